//! Per-shape motion state.
//!
//! The motion surface tracks play/pause, speed, amount, and mode per shape
//! and persists across selection changes and re-initialization, but no
//! transform is ever derived from it: the animation path is intentionally
//! absent. Only the state machine exists.

use serde::{Deserialize, Serialize};

/// Motion mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionMode {
    #[default]
    Wave,
    Pulse,
    Stretch,
}

impl MotionMode {
    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            MotionMode::Wave => "Wave",
            MotionMode::Pulse => "Pulse",
            MotionMode::Stretch => "Stretch",
        }
    }

    /// Get all available motion modes.
    pub fn all() -> &'static [MotionMode] {
        &[MotionMode::Wave, MotionMode::Pulse, MotionMode::Stretch]
    }
}

/// Inert motion state for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Whether motion is toggled on.
    pub playing: bool,
    /// Selected mode.
    pub mode: MotionMode,
    /// Speed control value.
    pub speed: f64,
    /// Amount control value.
    pub amount: f64,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            playing: false,
            mode: MotionMode::default(),
            speed: 50.0,
            amount: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_off() {
        let state = MotionState::default();
        assert!(!state.playing);
        assert_eq!(state.mode, MotionMode::Wave);
        assert!((state.speed - 50.0).abs() < f64::EPSILON);
        assert!((state.amount - 50.0).abs() < f64::EPSILON);
    }
}
