//! Key dispatch and value parsers for the configuration pairs.

use alloc::string::String;
use alloc::vec::Vec;

use super::color::parse_rgb;
use super::options::Options;
use super::{ConfigError, ParseWarning};
use crate::placement::{Location, TextFlow};

/// Known configuration keys, sorted for binary search.
const KEYS: &[&str] = &[
    "background",
    "border_size",
    "foreground",
    "offset",
    "prefix_url",
    "print_location",
    "side_text",
    "size",
    "text_position",
    "wait_location",
];

pub(crate) fn parse_pairs<'a, I>(pairs: I) -> Result<(Options, Vec<ParseWarning>), ConfigError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut opts = Options::default();
    let mut warnings = Vec::new();
    let mut seen = [false; KEYS.len()];

    for (key, value) in pairs {
        let key = key.trim();
        match KEYS.binary_search(&key) {
            Ok(idx) => {
                if seen[idx] {
                    warnings.push(ParseWarning::DuplicateKey {
                        key: String::from(key),
                        value: String::from(value),
                    });
                }
                seen[idx] = true;
                apply_key(key, value, &mut opts)?;
            }
            Err(_) => warnings.push(ParseWarning::KeyNotRecognized {
                key: String::from(key),
                value: String::from(value),
            }),
        }
    }

    Ok((opts, warnings))
}

fn apply_key(key: &str, value: &str, opts: &mut Options) -> Result<(), ConfigError> {
    match key {
        "prefix_url" => opts.prefix_url = String::from(value.trim()),
        "side_text" => opts.side_text = String::from(dequote(value)),

        "foreground" => opts.foreground = require_rgb("foreground", value)?,
        "background" => opts.background = require_rgb("background", value)?,

        "offset" => {
            opts.offset = parse_offset(value).ok_or(ConfigError::ValueInvalid {
                key: "offset",
                value: String::from(value),
                reason: "expected two non-negative integers: x,y or (x, y)",
            })?;
        }

        "wait_location" => {
            opts.wait_location = parse_location(value).ok_or(ConfigError::UnknownLocation {
                state: "wait",
                value: String::from(value),
            })?;
        }
        "print_location" => {
            opts.print_location = parse_location(value).ok_or(ConfigError::UnknownLocation {
                state: "print",
                value: String::from(value),
            })?;
        }

        "size" => opts.box_size = require_u32("size", value)?,
        "border_size" => opts.border_size = require_u32("border_size", value)?,

        "text_position" => {
            opts.text_position =
                parse_text_flow(value).ok_or(ConfigError::UnknownTextPosition {
                    value: String::from(value),
                })?;
        }

        // parse_pairs only dispatches keys present in KEYS
        _ => unreachable!("unhandled known key {key:?}"),
    }
    Ok(())
}

// ---- Value parsers ----

/// Strip one pair of wrapping double quotes. A lone `"` stays unchanged.
pub fn dequote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

fn require_rgb(key: &'static str, value: &str) -> Result<crate::placement::Rgb, ConfigError> {
    parse_rgb(value).ok_or(ConfigError::ValueInvalid {
        key,
        value: String::from(value),
        reason: "expected (r, g, b) or #rrggbb",
    })
}

fn require_u32(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    parse_u32(value).ok_or(ConfigError::ValueInvalid {
        key,
        value: String::from(value),
        reason: "expected a non-negative integer",
    })
}

fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

/// Parse `x,y` or `(x, y)` into a non-negative offset pair.
fn parse_offset(s: &str) -> Option<(u32, u32)> {
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');
    let mut parts = s.split(',');
    let x = parts.next()?.trim().parse::<u32>().ok()?;
    let y = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Exact match against the location vocabulary.
fn parse_location(s: &str) -> Option<Location> {
    let s = s.trim();
    Location::ALL.into_iter().find(|loc| loc.name() == s)
}

/// Exact match against the flow-mode vocabulary.
fn parse_text_flow(s: &str) -> Option<TextFlow> {
    let s = s.trim();
    TextFlow::ALL.into_iter().find(|flow| flow.name() == s)
}
