#[cfg(test)]
#[path = "legend_test.rs"]
mod legend_test;

use std::fmt;

use crate::config::MapConfig;

/// Summary shown beside the map. Rebuilt on every refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendSnapshot {
    pub ship_found: bool,
    pub landmark_count: usize,
    pub meters_per_pixel: f64,
    pub rotation_offset_deg: f64,
}

impl LegendSnapshot {
    #[must_use]
    pub fn new(ship_found: bool, landmark_count: usize, config: &MapConfig) -> Self {
        Self {
            ship_found,
            landmark_count,
            meters_per_pixel: config.meters_per_pixel,
            rotation_offset_deg: config.rotation_offset_deg,
        }
    }
}

impl fmt::Display for LegendSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ship = if self.ship_found { "OK" } else { "NOT FOUND" };
        writeln!(f, "Ship: {ship}")?;
        writeln!(f, "Entrances: {}", self.landmark_count)?;
        writeln!(f, "Scale: 1px = {:.1}m", self.meters_per_pixel)?;
        write!(f, "Rotation: {:.0}°", self.rotation_offset_deg)
    }
}

/// Hint line naming the toggle key.
#[must_use]
pub fn hint_text(toggle_key: &str) -> String {
    format!("Toggle: {toggle_key}")
}
