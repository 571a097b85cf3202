//! Display collaborator contract.
//!
//! The overlay is whatever shows the map: an in-game panel, a file on disk, a
//! recording fake in tests. The session controller pushes the committed buffer
//! through [`Overlay::set_surface`] and [`Overlay::present`], and the legend and
//! hint through the text setters. Widget construction is the overlay's own
//! business; the controller only asks it to [`Overlay::build`] when it reports
//! not ready, and tries again on the next tick if that fails.

use crate::raster::PixelBuffer;

/// Error returned by an [`Overlay`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    /// The host UI could not be built yet (e.g. mid scene reload).
    #[error("overlay not ready: {0}")]
    NotReady(String),
    /// The committed buffer could not be shown.
    #[error("failed to present map surface: {0}")]
    Present(String),
}

pub trait Overlay {
    /// Whether widgets exist and can receive a surface.
    fn is_ready(&self) -> bool;

    /// Create the widgets. Called again on later ticks after a failure.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NotReady`] when the host cannot build them yet.
    fn build(&mut self) -> Result<(), OverlayError>;

    /// Show or hide the panel.
    fn set_visible(&mut self, visible: bool);

    /// Hand over the committed buffer.
    fn set_surface(&mut self, buffer: &PixelBuffer);

    /// Push the last surface to the screen.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Present`] if the surface could not be shown.
    fn present(&mut self) -> Result<(), OverlayError>;

    fn set_legend(&mut self, text: &str);

    fn set_hint(&mut self, text: &str);
}
