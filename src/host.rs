//! Host integration: session state and UI-event dispatch.
//!
//! Replaces framework hook registration with an explicit state machine: the
//! host owns a [`Session`] and forwards its lifecycle moments as [`UiEvent`]s
//! to a [`QrPlugin`], which runs the pure layout core against the collaborator
//! traits ([`Surface`], [`TextRasterizer`], [`QrEncoder`]).
//!
//! All handlers are synchronous and run on the host's rendering thread; the
//! only mutable state is the session, which a handler holds exclusively.

use alloc::string::String;

use log::{debug, info};
use thiserror::Error;

use crate::compose::{Scene, Surface, TextRasterizer};
use crate::config::{ConfigError, Options, UrlVars, expand_template};
use crate::placement::{Rgb, Size};

/// Fatal host-layer error. Surfaced to the caller, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The QR encoding backend is not installed.
    #[error("QR encoder dependency is not installed")]
    EncoderUnavailable,
    /// Invalid configuration, detected at startup.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Styling forwarded to the QR encoder collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QrStyle {
    pub foreground: Rgb,
    pub background: Rgb,
    /// Pixel size of one QR module.
    pub box_size: u32,
    /// Quiet-zone size in modules.
    pub border: u32,
}

/// QR image generator collaborator.
///
/// Given a payload string and styling, returns a rasterized image and its
/// pixel dimensions. Implementations backed by an optional dependency signal
/// its absence with [`HostError::EncoderUnavailable`].
pub trait QrEncoder {
    type Image;

    fn generate(&mut self, payload: &str, style: &QrStyle) -> Result<(Self::Image, Size), HostError>;
}

/// Per-session state owned by the host.
///
/// Explicit optional fields instead of ambient attributes: `previous_qr` is
/// absent until the first capture completes, and the cached wait scene is
/// absent until the wait screen has been entered with a QR available.
#[derive(Debug, Clone)]
pub struct Session<I> {
    /// Last generated QR image and its dimensions.
    pub previous_qr: Option<(I, Size)>,
    /// File name of the last capture, for `{picture}` substitution.
    pub picture_filename: Option<String>,
    /// Number of captures taken, for `{count}` substitution.
    pub capture_count: u64,
    /// Upload URL of the last capture, for `{url}` substitution.
    pub previous_url: Option<String>,
    /// True while a side plugin (e.g. a gallery) owns the screen.
    pub gallery_active: bool,
    scene: Option<Scene<I>>,
}

impl<I> Session<I> {
    pub fn new() -> Self {
        Self {
            previous_qr: None,
            picture_filename: None,
            capture_count: 0,
            previous_url: None,
            gallery_active: false,
            scene: None,
        }
    }

    /// The wait scene cached by the last `EnterWait`, if any.
    pub fn cached_scene(&self) -> Option<&Scene<I>> {
        self.scene.as_ref()
    }
}

impl<I> Default for Session<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// UI moments the host forwards to [`QrPlugin::dispatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UiEvent {
    /// The wait screen was entered.
    EnterWait,
    /// The wait screen is being repainted (e.g. after a transient overlay).
    RedrawWait,
    /// The print screen was entered.
    EnterPrint,
    /// A capture finished processing; the QR image must be (re)generated.
    GenerateImage,
}

/// The badge overlay plugin: validated options plus transition handlers.
///
/// Options arrive already validated by [`crate::config::parse`]; `text_color`
/// is the host window's text color, used for the side-text lines.
#[derive(Debug, Clone)]
pub struct QrPlugin {
    options: Options,
    text_color: Rgb,
}

impl QrPlugin {
    pub fn new(options: Options, text_color: Rgb) -> Self {
        info!(
            "qrlayout ready: wait at '{}', print at '{}'",
            options.wait_location.name(),
            options.print_location.name()
        );
        Self {
            options,
            text_color,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Dispatch table for the host's lifecycle hooks.
    pub fn dispatch<W, R, Q>(
        &self,
        event: UiEvent,
        session: &mut Session<W::Image>,
        window: &mut W,
        rasterizer: &mut R,
        encoder: &mut Q,
    ) -> Result<(), HostError>
    where
        W: Surface,
        W::Image: Clone,
        R: TextRasterizer<Image = W::Image>,
        Q: QrEncoder<Image = W::Image>,
    {
        match event {
            UiEvent::EnterWait => {
                self.on_enter_wait(session, window, rasterizer);
                Ok(())
            }
            UiEvent::RedrawWait => {
                self.on_redraw_wait(session, window);
                Ok(())
            }
            UiEvent::EnterPrint => {
                self.on_enter_print(session, window, rasterizer);
                Ok(())
            }
            UiEvent::GenerateImage => self.on_generate_image(session, encoder),
        }
    }

    /// Compose and draw the wait overlay, caching the scene for redraws.
    ///
    /// No-op before the first capture (nothing to show yet).
    pub fn on_enter_wait<W, R>(
        &self,
        session: &mut Session<W::Image>,
        window: &mut W,
        rasterizer: &mut R,
    ) where
        W: Surface,
        W::Image: Clone,
        R: TextRasterizer<Image = W::Image>,
    {
        let Some((image, size)) = session.previous_qr.clone() else {
            debug!("no QR image yet, skipping wait overlay");
            return;
        };
        let scene = Scene::compose(
            window.bounds(),
            image,
            size,
            self.options.wait_location,
            self.options.offset,
            &self.options.side_text,
            self.options.text_position,
            self.text_color,
            rasterizer,
        );
        scene.draw(window);
        session.scene = Some(scene);
    }

    /// Re-blit the cached wait scene.
    ///
    /// Skips entirely while a side plugin owns the screen; otherwise reuses
    /// the cache verbatim — no recomputation, no rasterizer calls.
    pub fn on_redraw_wait<W>(&self, session: &Session<W::Image>, window: &mut W)
    where
        W: Surface,
    {
        if session.gallery_active {
            debug!("overlay active, yielding the wait screen");
            return;
        }
        if let Some(scene) = &session.scene {
            scene.draw(window);
        }
    }

    /// Compose and draw the print overlay. Drawn once, not cached.
    pub fn on_enter_print<W, R>(
        &self,
        session: &Session<W::Image>,
        window: &mut W,
        rasterizer: &mut R,
    ) where
        W: Surface,
        W::Image: Clone,
        R: TextRasterizer<Image = W::Image>,
    {
        let Some((image, size)) = session.previous_qr.clone() else {
            debug!("no QR image yet, skipping print overlay");
            return;
        };
        let scene = Scene::compose(
            window.bounds(),
            image,
            size,
            self.options.print_location,
            self.options.offset,
            &self.options.side_text,
            self.options.text_position,
            self.text_color,
            rasterizer,
        );
        scene.draw(window);
    }

    /// Expand the URL template and regenerate the QR image for the session.
    ///
    /// Encoder failure is fatal and propagates to the caller.
    pub fn on_generate_image<Q>(
        &self,
        session: &mut Session<Q::Image>,
        encoder: &mut Q,
    ) -> Result<(), HostError>
    where
        Q: QrEncoder,
    {
        let vars = UrlVars {
            picture: session.picture_filename.as_deref().unwrap_or(""),
            count: session.capture_count,
            url: session.previous_url.as_deref().unwrap_or(""),
        };
        let payload = expand_template(&self.options.prefix_url, &vars);
        let style = QrStyle {
            foreground: self.options.foreground,
            background: self.options.background,
            box_size: self.options.box_size,
            border: self.options.border_size,
        };
        let (image, size) = encoder.generate(&payload, &style)?;
        session.previous_qr = Some((image, size));
        // The cached wait scene belongs to the old image.
        session.scene = None;
        Ok(())
    }

    /// Hangup suppression hook: logged, otherwise ignored.
    pub fn on_hangup(&self) {
        debug!("hangup received, ignoring");
    }
}
