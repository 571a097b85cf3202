//! Panel state machine: the map is either closed or showing one snapshot.
//!
//! The host's input layer decides whether the toggle fired this tick (key
//! mapping, text-entry focus and cursor lock are its concern). This module only
//! sees the resulting edge and flips between the two states.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Whether the map panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapState {
    /// Panel hidden; no refresh runs.
    #[default]
    Closed,
    /// Panel showing the snapshot taken when it opened.
    Open,
}

impl MapState {
    /// State after one toggle edge.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
