//! Conversion between numeric seconds and the wire duration format.
//!
//! The wire format encodes a duration as its decimal seconds value followed
//! by the literal suffix `s` (e.g. `"3s"`, `"0.5s"`). No other units are
//! supported.

use crate::error::{Error, Result};

/// Format a seconds value as a wire duration string.
///
/// Uses `f64`'s default formatting, which emits the shortest decimal that
/// parses back to the same value, so `to_seconds` recovers the input exactly.
pub fn from_seconds(seconds: f64) -> String {
    format!("{}s", seconds)
}

/// Parse a wire duration string back into seconds.
///
/// Errors if the trailing `s` suffix is missing or the remainder is not a
/// decimal number.
pub fn to_seconds(duration: &str) -> Result<f64> {
    let value = duration
        .strip_suffix('s')
        .ok_or_else(|| Error::MissingSuffix {
            input: duration.to_string(),
        })?;
    value.parse::<f64>().map_err(|source| Error::InvalidSeconds {
        input: duration.to_string(),
        source,
    })
}
