//! File-backed overlay: presents the committed map as a PNG on disk.
//!
//! The in-game panel is replaced by a file. `build` checks the output
//! directory exists, `present` encodes the last surface, and legend and hint
//! are printed to stdout. Rows are written top-down, so the buffer's
//! bottom-up layout is flipped on the way out and `+y` ends up at the top of
//! the image.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tablet::overlay::{Overlay, OverlayError};
use tablet::raster::PixelBuffer;
use tracing::info;

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Encode `buffer` as a PNG at `path`, top row first.
///
/// # Errors
///
/// Returns [`OverlayError::Present`] if the side does not fit the encoder or
/// the file cannot be written.
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), OverlayError> {
    let side = u32::try_from(buffer.side()).map_err(|e| OverlayError::Present(e.to_string()))?;
    let mut bytes = Vec::with_capacity(buffer.pixels().len() * 4);
    for row in buffer.rows().rev() {
        for px in row {
            bytes.extend_from_slice(&px.to_array());
        }
    }
    let image = RgbaImage::from_raw(side, side, bytes)
        .ok_or_else(|| OverlayError::Present(format!("buffer does not fill a {side}x{side} image")))?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| OverlayError::Present(format!("{}: {e}", path.display())))
}

/// Overlay that writes each presented map to `out`.
#[derive(Debug)]
pub struct PngOverlay {
    out: PathBuf,
    ready: bool,
    visible: bool,
    surface: Option<PixelBuffer>,
    presented: u32,
}

impl PngOverlay {
    #[must_use]
    pub fn new(out: PathBuf) -> Self {
        Self {
            out,
            ready: false,
            visible: false,
            surface: None,
            presented: 0,
        }
    }

    /// Number of successful presents.
    #[must_use]
    pub fn presented(&self) -> u32 {
        self.presented
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl Overlay for PngOverlay {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn build(&mut self) -> Result<(), OverlayError> {
        let dir = match self.out.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.is_dir() {
            return Err(OverlayError::NotReady(format!("output directory {} does not exist", dir.display())));
        }
        self.ready = true;
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        info!(visible, "map panel visibility changed");
    }

    fn set_surface(&mut self, buffer: &PixelBuffer) {
        self.surface = Some(buffer.clone());
    }

    fn present(&mut self) -> Result<(), OverlayError> {
        let Some(surface) = &self.surface else {
            return Err(OverlayError::Present("no surface set".into()));
        };
        write_png(&self.out, surface)?;
        self.presented += 1;
        info!(path = %self.out.display(), side = surface.side(), "map written");
        Ok(())
    }

    fn set_legend(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_hint(&mut self, text: &str) {
        println!("{text}");
    }
}
