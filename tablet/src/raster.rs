//! Raster canvas: the square RGBA buffer the map is painted into.
//!
//! [`CanvasSize`] is the only way to name a side length, and it can only be
//! built by clamping, so a [`PixelBuffer`] outside the allowed range cannot
//! exist. [`RasterCanvas`] owns the buffer across refreshes and reallocates it
//! only when the requested side changes; a reallocated buffer carries no old
//! contents and is expected to be fully repainted (grid first) before commit.
//!
//! Pixel `(0, 0)` is the bottom-left of the displayed map. Rows are stored
//! bottom-up, so `+y` points "up" on screen.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use tracing::debug;

use crate::consts::{BACKGROUND, GRID_LINE, GRID_SPACING_PX, MAX_CANVAS_PX, MIN_CANVAS_PX};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Side length of a square canvas, always within `[MIN_CANVAS_PX, MAX_CANVAS_PX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanvasSize(usize);

impl CanvasSize {
    /// Clamp a requested side into the allowed range.
    #[must_use]
    pub fn clamped(requested: i32) -> Self {
        Self(requested.clamp(MIN_CANVAS_PX, MAX_CANVAS_PX).unsigned_abs() as usize)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Center pixel coordinate on both axes (`side / 2`).
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn center(self) -> i64 {
        (self.0 / 2) as i64
    }
}

/// Square RGBA pixel buffer, row-major and bottom-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: CanvasSize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Allocate a transparent buffer. Callers repaint it before display.
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        Self { size, pixels: vec![Rgba::TRANSPARENT; size.get() * size.get()] }
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.size.get()
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        let side = self.side();
        if x >= side || y >= side {
            return None;
        }
        self.pixels.get(y * side + x).copied()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Rows from bottom (`y = 0`) to top.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgba]> {
        self.pixels.chunks(self.side())
    }

    /// Fill every pixel: grid lines on multiples of [`GRID_SPACING_PX`], background elsewhere.
    pub fn paint_grid(&mut self) {
        let side = self.side();
        for (y, row) in self.pixels.chunks_mut(side).enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = if x % GRID_SPACING_PX == 0 || y % GRID_SPACING_PX == 0 { GRID_LINE } else { BACKGROUND };
            }
        }
    }

    /// Fill the disc `(x - cx)² + (y - cy)² <= radius²`, clipped to the buffer.
    ///
    /// The center may lie anywhere, including far outside the buffer. A zero
    /// radius paints only the center pixel; a negative or NaN radius paints
    /// nothing. Overlapping dots overwrite each other.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn paint_dot(&mut self, cx: i64, cy: i64, radius: f64, color: Rgba) {
        if radius.is_nan() || radius < 0.0 {
            return;
        }

        // Saturating float-to-int cast: an infinite radius reaches i64::MAX.
        let reach = radius.ceil() as i64;
        let last = self.side() as i64 - 1;
        let x0 = cx.saturating_sub(reach).max(0);
        let x1 = cx.saturating_add(reach).min(last);
        let y0 = cy.saturating_sub(reach).max(0);
        let y1 = cy.saturating_add(reach).min(last);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let limit = radius * radius;
        let side = self.side();
        for y in y0..=y1 {
            let dy = y.abs_diff(cy) as f64;
            for x in x0..=x1 {
                let dx = x.abs_diff(cx) as f64;
                if dx * dx + dy * dy <= limit {
                    self.pixels[y as usize * side + x as usize] = color;
                }
            }
        }
    }
}

/// Owner of the map buffer across refreshes.
#[derive(Debug, Default)]
pub struct RasterCanvas {
    buffer: Option<PixelBuffer>,
    allocations: u64,
    commits: u64,
}

impl RasterCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the buffer `size` on a side, reallocating only if the side changed.
    ///
    /// A reallocation discards the previous contents entirely.
    pub fn resize(&mut self, size: CanvasSize) -> &mut PixelBuffer {
        let stale = self.buffer.as_ref().is_none_or(|buf| buf.size() != size);
        if stale {
            debug!(side = size.get(), "allocating map buffer");
            self.buffer = Some(PixelBuffer::new(size));
            self.allocations += 1;
        }
        self.buffer.get_or_insert_with(|| PixelBuffer::new(size))
    }

    /// Mark the current buffer ready for display.
    ///
    /// Returns the committed buffer, or `None` if nothing was ever allocated.
    pub fn commit(&mut self) -> Option<&PixelBuffer> {
        if self.buffer.is_some() {
            self.commits += 1;
        }
        self.buffer.as_ref()
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Number of buffer allocations so far.
    #[must_use]
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Number of commits so far.
    #[must_use]
    pub fn commits(&self) -> u64 {
        self.commits
    }
}
