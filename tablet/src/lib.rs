//! Schematic outside map for the ship tablet overlay.
//!
//! This crate turns a snapshot of the host scene into a square RGBA map: the
//! ship sits at the center, and every outside entrance is projected into the
//! ship's own frame, rotated by the configured offset, scaled to pixels and
//! painted as a colored dot over a background grid. The host owns input,
//! widgets and compositing; it feeds one toggle boolean per tick and receives a
//! committed buffer plus legend text through the [`overlay::Overlay`] trait.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Tick-driven controller and the once-per-open refresh |
//! | [`state`] | Open/Closed panel state machine |
//! | [`locator`] | Ship anchor and entrance discovery, typed landmark records |
//! | [`scene`] | Host scene query contract and an in-memory JSON snapshot |
//! | [`projection`] | World vectors and the ship-local rotated projection |
//! | [`raster`] | Square pixel buffer, grid and clipped dot painting |
//! | [`legend`] | Legend and hint text |
//! | [`overlay`] | Display collaborator contract |
//! | [`config`] | Map settings with defaults and env loading |
//! | [`consts`] | Canvas limits, palette and scene identifiers |

pub mod config;
pub mod consts;
pub mod legend;
pub mod locator;
pub mod overlay;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod session;
pub mod state;
