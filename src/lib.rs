//! QR badge placement for host windows: anchor resolution, side-text layout,
//! and draw orchestration for the wait/print screens.
//!
//! The layout core is pure geometry — no pixel operations, no allocations,
//! `no_std` compatible. Everything pixel-shaped (QR encoding, text
//! rasterization, blitting) stays behind collaborator traits.
//!
//! # Modules
//!
//! - [`placement`] — anchor locations, offset application, text-region planning
//! - [`compose`] — scene assembly and the surface/rasterizer seams (`alloc`)
//! - [`config`] — option parsing, validation, URL templating (`alloc`)
//! - [`host`] — session state and UI-event dispatch (`alloc`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod placement;

#[cfg(feature = "alloc")]
pub mod compose;
#[cfg(feature = "alloc")]
pub mod config;
#[cfg(feature = "alloc")]
pub mod host;

// Re-exports: core types from the placement module
pub use placement::{
    DEFAULT_TEXT_MARGIN, Location, Primary, Rect, Rgb, Size, Sub, TextFlow, TextRegion,
    plan_text_region, resolve,
};

#[cfg(feature = "alloc")]
pub use compose::{Line, LineAlign, Scene, Surface, TextRasterizer, stack_below};
#[cfg(feature = "alloc")]
pub use config::{ConfigError, Options, ParseResult, ParseWarning, UrlVars};
#[cfg(feature = "alloc")]
pub use host::{HostError, QrEncoder, QrPlugin, QrStyle, Session, UiEvent};
