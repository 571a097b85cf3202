//! Landmark discovery: the ship anchor and classified outside entrances.
//!
//! The session controller only sees [`LandmarkSource`] and the typed records
//! it returns. All knowledge of object names, behaviour type names and field
//! names lives in [`SceneLocator`], the adapter over a [`SceneQuery`] host.

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{ENTRANCE_ID_FIELD, ENTRANCE_TYPE_NAME, OUTSIDE_FIELD, SHIP_NAME_NEEDLE};
use crate::projection::Vec3;
use crate::scene::SceneQuery;

/// What an entrance leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkKind {
    /// Entrance with a missing or unrecognized id.
    #[default]
    Unknown,
    /// The facility's main entrance (id 0).
    Main,
    /// A fire exit (id 1).
    FireExit,
}

impl LandmarkKind {
    /// Classify an entrance id; anything but 0 or 1 is [`LandmarkKind::Unknown`].
    #[must_use]
    pub fn from_entrance_id(id: Option<i32>) -> Self {
        match id {
            Some(0) => Self::Main,
            Some(1) => Self::FireExit,
            _ => Self::Unknown,
        }
    }
}

/// A classified point of interest in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub kind: LandmarkKind,
    pub position: Vec3,
}

/// Reference pose the map is centered on and oriented by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipAnchor {
    pub position: Vec3,
    pub right: Vec3,
    pub forward: Vec3,
}

/// Result of one locate pass. Landmarks keep the host's scan order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Located {
    pub anchor: Option<ShipAnchor>,
    pub landmarks: Vec<Landmark>,
}

/// Anything that can produce a fresh [`Located`] on demand.
pub trait LandmarkSource {
    fn locate(&self) -> Located;
}

/// A fixed result, returned unchanged on every call.
impl LandmarkSource for Located {
    fn locate(&self) -> Located {
        self.clone()
    }
}

/// Locator over a host scene.
///
/// The ship anchor is the top-most ancestor of the first object whose name
/// contains `"Terminal"` (any case). Which object comes first depends on the
/// host's scan order. Entrances are behaviours of type `EntranceTeleport`;
/// those whose `isEntranceToBuilding` field is present and `false` sit inside
/// the facility and are skipped.
#[derive(Debug, Clone)]
pub struct SceneLocator<S> {
    scene: S,
}

impl<S: SceneQuery> SceneLocator<S> {
    #[must_use]
    pub fn new(scene: S) -> Self {
        Self { scene }
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Resolve the ship anchor, if any object matches.
    #[must_use]
    pub fn find_anchor(&self) -> Option<ShipAnchor> {
        let first = self.scene.find_by_name_substring(SHIP_NAME_NEEDLE).into_iter().next()?;
        let root = self.scene.root(first);
        Some(ShipAnchor {
            position: self.scene.position(root),
            right: self.scene.right_axis(root),
            forward: self.scene.forward_axis(root),
        })
    }

    /// Classify one entrance candidate; `None` when it faces the interior.
    fn classify(&self, candidate: S::Handle) -> Option<Landmark> {
        if self.scene.try_get_bool(candidate, OUTSIDE_FIELD) == Some(false) {
            return None;
        }
        let kind = LandmarkKind::from_entrance_id(self.scene.try_get_int(candidate, ENTRANCE_ID_FIELD));
        Some(Landmark { kind, position: self.scene.position(candidate) })
    }

    /// All outside entrances, in scan order.
    #[must_use]
    pub fn find_landmarks(&self) -> Vec<Landmark> {
        let candidates = self.scene.find_by_runtime_type_name(ENTRANCE_TYPE_NAME);
        let total = candidates.len();
        let landmarks: Vec<Landmark> = candidates.into_iter().filter_map(|c| self.classify(c)).collect();
        debug!(candidates = total, kept = landmarks.len(), "entrance scan");
        landmarks
    }
}

impl<S: SceneQuery> LandmarkSource for SceneLocator<S> {
    fn locate(&self) -> Located {
        Located { anchor: self.find_anchor(), landmarks: self.find_landmarks() }
    }
}
