//! Typed configuration options: one field per config key, with defaults.

use alloc::string::String;

use crate::placement::{Location, Rgb, TextFlow};

/// Validated option values for the badge overlay.
///
/// Field names follow the configuration keys; `box_size` maps to the `size`
/// key. String-typed in the store, typed here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    /// URL template (`prefix_url`). Supports `{picture}`, `{count}` and
    /// `{url}` substitution.
    pub prefix_url: String,
    /// QR foreground color (`foreground`).
    pub foreground: Rgb,
    /// QR background color (`background`).
    pub background: Rgb,
    /// Optional text displayed close to the badge (`side_text`), stored with
    /// wrapping quotes already stripped. Empty means no side text.
    pub side_text: String,
    /// Inward (x, y) push from the anchored container edge (`offset`).
    pub offset: (u32, u32),
    /// Badge location on the wait screen (`wait_location`).
    pub wait_location: Location,
    /// Badge location on the print screen (`print_location`).
    pub print_location: Location,
    /// QR module pixel size (`size`, string-typed in the store).
    pub box_size: u32,
    /// QR quiet-zone size (`border_size`, string-typed in the store).
    pub border_size: u32,
    /// Side-text flow relative to the badge (`text_position`).
    pub text_position: TextFlow,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prefix_url: String::from("{url}"),
            foreground: Rgb::white(),
            background: Rgb::black(),
            side_text: String::new(),
            offset: (20, 40),
            wait_location: Location::BottomLeft,
            print_location: Location::BottomRight,
            box_size: 7,
            border_size: 4,
            text_position: TextFlow::LeftRight,
        }
    }
}
