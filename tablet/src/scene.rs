//! Host scene contract and an in-memory snapshot implementation.
//!
//! [`SceneQuery`] is everything the locator needs from a scene graph: name and
//! runtime-type searches, ancestry, tolerant field reads and pose accessors.
//! A live engine binding implements it over its own object handles; this crate
//! ships [`SceneSnapshot`], a JSON-loadable scene used by the host runner and
//! the tests. Snapshot scans return objects in declaration order.
//!
//! Field reads never fail: a missing field, a value of the wrong JSON type or
//! an integer outside `i32` all read as `None`.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::projection::Vec3;

/// Error returned when building a [`SceneSnapshot`].
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The snapshot JSON could not be parsed.
    #[error("failed to parse scene snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    /// An object names a parent index that does not exist.
    #[error("object {index} has parent {parent}, but the scene has {len} objects")]
    DanglingParent { index: usize, parent: usize, len: usize },
    /// Following parents from an object never reaches a root.
    #[error("object {index} is part of a parent cycle")]
    ParentCycle { index: usize },
}

/// Read-only queries the locator issues against a host scene.
pub trait SceneQuery {
    /// Opaque reference to a scene object.
    type Handle: Copy;

    /// Objects whose name contains `text`, ignoring case. Order is host-defined.
    fn find_by_name_substring(&self, text: &str) -> Vec<Self::Handle>;

    /// Behaviour objects whose runtime type name equals `name`. Order is host-defined.
    fn find_by_runtime_type_name(&self, name: &str) -> Vec<Self::Handle>;

    /// Top-most ancestor of `object` (the object itself if it has no parent).
    fn root(&self, object: Self::Handle) -> Self::Handle;

    fn try_get_bool(&self, object: Self::Handle, field: &str) -> Option<bool>;

    fn try_get_int(&self, object: Self::Handle, field: &str) -> Option<i32>;

    fn position(&self, object: Self::Handle) -> Vec3;

    fn right_axis(&self, object: Self::Handle) -> Vec3;

    fn forward_axis(&self, object: Self::Handle) -> Vec3;
}

/// Index of an object within a [`SceneSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectIndex(pub usize);

fn default_right() -> Vec3 {
    Vec3::RIGHT
}

fn default_forward() -> Vec3 {
    Vec3::FORWARD
}

/// One object in a scene snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    /// Index of the parent object, if any.
    #[serde(default)]
    pub parent: Option<usize>,
    /// Runtime type name of the behaviour attached to this object, if any.
    #[serde(default)]
    pub runtime_type: Option<String>,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default = "default_right")]
    pub right: Vec3,
    #[serde(default = "default_forward")]
    pub forward: Vec3,
    /// Behaviour fields by name.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl SceneObject {
    /// A world-aligned object at `position` with no parent, behaviour or fields.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            parent: None,
            runtime_type: None,
            position,
            right: Vec3::RIGHT,
            forward: Vec3::FORWARD,
            fields: Map::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawScene {
    objects: Vec<SceneObject>,
}

/// A frozen scene graph with validated parent links.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneSnapshot {
    objects: Vec<SceneObject>,
}

impl SceneSnapshot {
    /// Build a snapshot, rejecting dangling parents and parent cycles.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DanglingParent`] or [`SceneError::ParentCycle`].
    pub fn new(objects: Vec<SceneObject>) -> Result<Self, SceneError> {
        let len = objects.len();
        for (index, object) in objects.iter().enumerate() {
            let mut cursor = object.parent;
            let mut steps = 0;
            while let Some(parent) = cursor {
                let Some(next) = objects.get(parent) else {
                    return Err(SceneError::DanglingParent { index, parent, len });
                };
                steps += 1;
                if steps > len {
                    return Err(SceneError::ParentCycle { index });
                }
                cursor = next.parent;
            }
        }
        Ok(Self { objects })
    }

    /// Parse a snapshot of the form `{"objects": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] for malformed JSON, or a validation error
    /// from [`SceneSnapshot::new`].
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        let raw: RawScene = serde_json::from_str(text)?;
        Self::new(raw.objects)
    }

    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    #[must_use]
    pub fn get(&self, handle: ObjectIndex) -> Option<&SceneObject> {
        self.objects.get(handle.0)
    }

    fn field(&self, handle: ObjectIndex, field: &str) -> Option<&Value> {
        self.get(handle)?.fields.get(field)
    }

    fn scan(&self, mut keep: impl FnMut(&SceneObject) -> bool) -> Vec<ObjectIndex> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| keep(object))
            .map(|(i, _)| ObjectIndex(i))
            .collect()
    }
}

impl SceneQuery for SceneSnapshot {
    type Handle = ObjectIndex;

    fn find_by_name_substring(&self, text: &str) -> Vec<ObjectIndex> {
        let needle = text.to_lowercase();
        self.scan(|object| object.name.to_lowercase().contains(&needle))
    }

    fn find_by_runtime_type_name(&self, name: &str) -> Vec<ObjectIndex> {
        self.scan(|object| object.runtime_type.as_deref() == Some(name))
    }

    fn root(&self, object: ObjectIndex) -> ObjectIndex {
        let mut current = object;
        // Parent links were validated acyclic; the bound only guards foreign handles.
        for _ in 0..=self.objects.len() {
            match self.get(current).and_then(|o| o.parent) {
                Some(parent) => current = ObjectIndex(parent),
                None => break,
            }
        }
        current
    }

    fn try_get_bool(&self, object: ObjectIndex, field: &str) -> Option<bool> {
        self.field(object, field)?.as_bool()
    }

    fn try_get_int(&self, object: ObjectIndex, field: &str) -> Option<i32> {
        let wide = self.field(object, field)?.as_i64()?;
        match i32::try_from(wide) {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    fn position(&self, object: ObjectIndex) -> Vec3 {
        self.get(object).map_or(Vec3::ZERO, |o| o.position)
    }

    fn right_axis(&self, object: ObjectIndex) -> Vec3 {
        self.get(object).map_or(Vec3::RIGHT, |o| o.right)
    }

    fn forward_axis(&self, object: ObjectIndex) -> Vec3 {
        self.get(object).map_or(Vec3::FORWARD, |o| o.forward)
    }
}
