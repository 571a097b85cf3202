//! Shared constants for the tablet crate.

use crate::raster::Rgba;

// ── Canvas ──────────────────────────────────────────────────────

/// Smallest allowed canvas side in pixels.
pub const MIN_CANVAS_PX: i32 = 256;

/// Largest allowed canvas side in pixels.
pub const MAX_CANVAS_PX: i32 = 1024;

/// Distance between grid lines in pixels.
pub const GRID_SPACING_PX: usize = 32;

/// Radius of the ship marker drawn at the canvas center.
pub const MARKER_RADIUS_PX: f64 = 6.0;

// ── Palette ─────────────────────────────────────────────────────

pub const GRID_LINE: Rgba = Rgba::opaque(38, 38, 38);
pub const BACKGROUND: Rgba = Rgba::opaque(23, 23, 26);

/// Ship marker when the anchor was found.
pub const ANCHOR_MARKER: Rgba = Rgba::opaque(255, 255, 255);

/// Ship marker when no anchor could be resolved.
pub const UNRESOLVED_MARKER: Rgba = Rgba::opaque(255, 235, 4);

pub const MAIN_ENTRANCE: Rgba = Rgba::opaque(0, 255, 0);
pub const FIRE_EXIT: Rgba = Rgba::opaque(255, 0, 0);
pub const UNKNOWN_ENTRANCE: Rgba = Rgba::opaque(0, 255, 255);

// ── Scene ───────────────────────────────────────────────────────

/// Case-insensitive name fragment identifying an object on the ship.
pub const SHIP_NAME_NEEDLE: &str = "Terminal";

/// Runtime type name of entrance behaviours.
pub const ENTRANCE_TYPE_NAME: &str = "EntranceTeleport";

/// Bool field: `true` on the outside side of an entrance pair.
pub const OUTSIDE_FIELD: &str = "isEntranceToBuilding";

/// Int field: 0 is the main entrance, 1 the fire exit.
pub const ENTRANCE_ID_FIELD: &str = "entranceId";
