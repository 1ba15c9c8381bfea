//! # Peak-Time Parsing
//!
//! This module parses the free-text blood-glucose peak-time labels attached
//! to ingredient records ("90min", "1.5h") into a minute count.
//!
//! ## Features
//!
//! - Integer minute labels: "90min", "45 MIN"
//! - Decimal hour labels: "1.5h", "2 h"
//! - Total parsing: anything unrecognized falls back to 60 minutes rather
//!   than failing, so a malformed label never aborts an analysis
//!
//! ## Usage
//!
//! ```rust
//! use carbcurve::peak_time::parse_peak_time;
//!
//! assert_eq!(parse_peak_time("90min"), 90.0);
//! assert_eq!(parse_peak_time("1.5h"), 90.0);
//! assert_eq!(parse_peak_time("soon-ish"), 60.0);
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Fallback when a label matches neither pattern, in minutes
pub const DEFAULT_PEAK_MINUTES: f64 = 60.0;

// Pattern for integer minute labels such as "90min" or "45 min"
pub const MINUTES_PATTERN: &str = r"(?i)^(\d+)\s*min$";

// Pattern for decimal hour labels such as "1.5h" or "2 h"
pub const HOURS_PATTERN: &str = r"(?i)^(\d+(?:\.\d+)?)\s*h$";

// Lazy static regexes to avoid recompilation on every ingredient
lazy_static! {
    static ref MINUTES_REGEX: Regex =
        Regex::new(MINUTES_PATTERN).expect("Minutes pattern should be valid");
    static ref HOURS_REGEX: Regex =
        Regex::new(HOURS_PATTERN).expect("Hours pattern should be valid");
}

/// Parse a free-text peak-time label into minutes
///
/// This is a total function: every input maps to a non-negative minute
/// count. Labels that match neither the minute nor the hour pattern default
/// to [`DEFAULT_PEAK_MINUTES`] as a deliberate policy, not an error.
pub fn parse_peak_time(label: &str) -> f64 {
    let label = label.trim();

    if let Some(captures) = MINUTES_REGEX.captures(label) {
        if let Ok(minutes) = captures[1].parse::<u32>() {
            return minutes as f64;
        }
    }

    if let Some(captures) = HOURS_REGEX.captures(label) {
        if let Ok(hours) = captures[1].parse::<f64>() {
            return hours * 60.0;
        }
    }

    debug!(
        "Unrecognized peak-time label {:?}, defaulting to {} minutes",
        label, DEFAULT_PEAK_MINUTES
    );
    DEFAULT_PEAK_MINUTES
}
