//! Configuration parsing and startup validation.
//!
//! Parses `(key, value)` string pairs from the host's configuration store
//! into a typed [`Options`] value. Enum-valued and numeric keys are validated
//! here, before any rendering occurs: a bad location or text position is a
//! fatal [`ConfigError`], while unrecognized or duplicated keys only produce
//! [`ParseWarning`]s.
//!
//! # Example
//!
//! ```
//! use qrlayout::config;
//! use qrlayout::Location;
//!
//! let result = config::parse([
//!     ("wait_location", "midtop-right"),
//!     ("offset", "(10, 10)"),
//!     ("side_text", "\"scan me\""),
//! ])
//! .unwrap();
//!
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.options.wait_location, Location::MidTopRight);
//! assert_eq!(result.options.side_text, "scan me");
//! ```

mod color;
mod options;
mod parse;
mod template;

pub use options::Options;
pub use parse::dequote;
pub use template::{UrlVars, expand_template};

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

/// Result of parsing configuration pairs.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed, validated options.
    pub options: Options,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from configuration parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A known key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
}

/// Fatal configuration error, raised before any rendering occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A location value is not in the location vocabulary.
    #[error("unknown QR code location on '{state}' state: '{value}'")]
    UnknownLocation {
        /// Which UI state's key carried the bad value (`wait` or `print`).
        state: &'static str,
        value: String,
    },
    /// A text position value is not in the flow-mode vocabulary.
    #[error("unknown text position: '{value}'")]
    UnknownTextPosition { value: String },
    /// A key was recognized but its value could not be parsed.
    #[error("invalid value for '{key}': '{value}' ({reason})")]
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse configuration pairs into validated [`Options`].
///
/// Unset keys keep their documented defaults.
pub fn parse<'a, I>(pairs: I) -> Result<ParseResult, ConfigError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let (options, warnings) = parse::parse_pairs(pairs)?;
    Ok(ParseResult { options, warnings })
}
