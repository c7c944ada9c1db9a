//! A clamped numeric gauge used for the life total.

use std::fmt;

/// A numeric resource clamped between zero and a fixed maximum.
///
/// The maximum is set at character creation and never grows; healing past it
/// is silently capped. A track at zero is not an error state here, only a
/// condition the session loop checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    current: i32,
    max: i32,
}

impl Track {
    /// Create a track starting at its maximum value.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Create a track with an explicit current value, clamped into range.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Adjust by a delta, clamping to `[0, max]`. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(0, self.max);
        self.current
    }

    /// Current value.
    pub fn current(self) -> i32 {
        self.current
    }

    /// Maximum value.
    pub fn max(self) -> i32 {
        self.max
    }

    /// Whether the track has run out.
    pub fn is_empty(self) -> bool {
        self.current <= 0
    }

    /// Whether the track is at its maximum.
    pub fn is_full(self) -> bool {
        self.current >= self.max
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
