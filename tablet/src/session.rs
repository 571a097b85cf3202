//! Map session controller: the per-tick entry point and the refresh cycle.
//!
//! DESIGN
//! ======
//! The host calls [`MapSession::tick`] once per frame with a single boolean
//! saying whether the toggle fired. A closed-to-open edge runs exactly one
//! refresh: resize the canvas, locate landmarks, paint the grid, the ship
//! marker and one dot per landmark, commit, then push surface, legend and hint
//! to the overlay. Nothing refreshes while the panel stays open, so the map is
//! a snapshot of the moment it was opened.
//!
//! Failures never leave a tick. A missing ship anchor degrades to a
//! center-only marker, an overlay that cannot build is retried next tick, and
//! a failed present is logged.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::{debug, error, info, warn};

use crate::config::MapConfig;
use crate::consts::{
    ANCHOR_MARKER, FIRE_EXIT, MAIN_ENTRANCE, MARKER_RADIUS_PX, UNKNOWN_ENTRANCE, UNRESOLVED_MARKER,
};
use crate::legend::{LegendSnapshot, hint_text};
use crate::locator::{LandmarkKind, LandmarkSource};
use crate::overlay::Overlay;
use crate::projection::{Offset, ship_local_offset};
use crate::raster::{PixelBuffer, RasterCanvas, Rgba};
use crate::state::MapState;

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No toggle this tick.
    None,
    /// The overlay is not built yet; the toggle was not consumed.
    NotReady,
    /// The panel opened and a refresh ran.
    Opened(RefreshSummary),
    /// The panel closed.
    Closed,
}

/// Outcome of one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Buffer side in pixels.
    pub side: usize,
    pub ship_found: bool,
    /// Landmarks the locator returned (painted only when the ship was found).
    pub landmarks: usize,
}

/// Fixed dot color for each landmark kind.
#[must_use]
pub fn color_for(kind: LandmarkKind) -> Rgba {
    match kind {
        LandmarkKind::Main => MAIN_ENTRANCE,
        LandmarkKind::FireExit => FIRE_EXIT,
        LandmarkKind::Unknown => UNKNOWN_ENTRANCE,
    }
}

/// Pixel position of a ship-local offset: `center + round(offset / meters_per_pixel)`.
///
/// Halves round to even. Results saturate instead of overflowing.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_pixel(offset: Offset, center: i64, meters_per_pixel: f64) -> (i64, i64) {
    let px = (offset.x / meters_per_pixel).round_ties_even() as i64;
    let py = (offset.y / meters_per_pixel).round_ties_even() as i64;
    (center.saturating_add(px), center.saturating_add(py))
}

/// Controller owning the panel state, the canvas and the last pushed text.
pub struct MapSession<L> {
    locator: L,
    state: MapState,
    canvas: RasterCanvas,
    legend: String,
    hint: String,
}

impl<L: LandmarkSource> MapSession<L> {
    #[must_use]
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            state: MapState::default(),
            canvas: RasterCanvas::new(),
            legend: String::new(),
            hint: String::new(),
        }
    }

    // --- Tick ---

    /// Advance one host tick.
    ///
    /// `config` is read as a snapshot; edits made between ticks apply to the
    /// next refresh.
    pub fn tick<O: Overlay>(&mut self, toggle_requested: bool, config: &MapConfig, overlay: &mut O) -> Action {
        if !overlay.is_ready() {
            if let Err(e) = overlay.build() {
                error!(error = %e, "map overlay build failed; retrying next tick");
            }
            if !overlay.is_ready() {
                return Action::NotReady;
            }
        }

        if !toggle_requested {
            return Action::None;
        }

        self.state = self.state.toggled();
        overlay.set_visible(self.state.is_open());
        if !self.state.is_open() {
            debug!("map panel closed");
            return Action::Closed;
        }

        let summary = self.refresh(config);
        self.publish(overlay);
        Action::Opened(summary)
    }

    // --- Refresh ---

    /// Recompute landmarks and repaint the canvas from scratch.
    ///
    /// Does not touch the overlay; [`MapSession::tick`] pushes the result.
    pub fn refresh(&mut self, config: &MapConfig) -> RefreshSummary {
        let size = config.canvas_size();
        let center = size.center();
        let located = self.locator.locate();

        let buffer = self.canvas.resize(size);
        buffer.paint_grid();

        match located.anchor {
            None => {
                warn!(landmarks = located.landmarks.len(), "ship anchor not found; drawing center marker only");
                buffer.paint_dot(center, center, MARKER_RADIUS_PX, UNRESOLVED_MARKER);
            }
            Some(anchor) => {
                buffer.paint_dot(center, center, MARKER_RADIUS_PX, ANCHOR_MARKER);
                for landmark in &located.landmarks {
                    let offset = ship_local_offset(
                        landmark.position - anchor.position,
                        anchor.right,
                        anchor.forward,
                        config.rotation_offset_deg,
                    );
                    let (x, y) = to_pixel(offset, center, config.meters_per_pixel);
                    buffer.paint_dot(x, y, config.dot_radius_px, color_for(landmark.kind));
                }
            }
        }
        self.canvas.commit();

        let ship_found = located.anchor.is_some();
        self.legend = LegendSnapshot::new(ship_found, located.landmarks.len(), config).to_string();
        self.hint = hint_text(&config.toggle_key);

        let summary = RefreshSummary { side: size.get(), ship_found, landmarks: located.landmarks.len() };
        info!(side = summary.side, ship_found, landmarks = summary.landmarks, "map refreshed");
        summary
    }

    fn publish<O: Overlay>(&self, overlay: &mut O) {
        if let Some(buffer) = self.canvas.buffer() {
            overlay.set_surface(buffer);
        }
        if let Err(e) = overlay.present() {
            error!(error = %e, "map present failed");
        }
        overlay.set_legend(&self.legend);
        overlay.set_hint(&self.hint);
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> MapState {
        self.state
    }

    /// The last committed buffer, if a refresh has run.
    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.canvas.buffer()
    }

    #[must_use]
    pub fn canvas(&self) -> &RasterCanvas {
        &self.canvas
    }

    /// Legend text from the last refresh (empty before the first).
    #[must_use]
    pub fn legend(&self) -> &str {
        &self.legend
    }

    /// Hint text from the last refresh (empty before the first).
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn locator(&self) -> &L {
        &self.locator
    }
}
