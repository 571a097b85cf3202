#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point or direction in world space (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// A 2D offset in ship-local space (meters).
///
/// `x` runs along the ship's right axis and `y` along its forward axis, before
/// any rotation offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate counter-clockwise by `degrees`.
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

/// Project a world-space delta onto the ship's right/forward axes, then rotate
/// the result by `rotation_offset_deg`.
///
/// The map therefore turns with the ship rather than staying world-aligned.
/// No scaling or rounding happens here.
#[must_use]
pub fn ship_local_offset(delta: Vec3, right: Vec3, forward: Vec3, rotation_offset_deg: f64) -> Offset {
    Offset::new(delta.dot(right), delta.dot(forward)).rotated(rotation_offset_deg)
}
