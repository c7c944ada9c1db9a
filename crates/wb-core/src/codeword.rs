//! Codeword registry: permanent narrative flags.
//!
//! A codeword marks that some event has happened to this character. Once
//! gained it is never removed during normal play, and gaining it twice is a
//! no-op.

use std::fmt;

/// Every codeword in the story content set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Codeword {
    /// Sworn to return to the harbor.
    Anchor,
    /// Saw the light on the Teeth.
    Beacon,
    /// Survived the burning of the caravan.
    Cinder,
    /// Set adrift by the wreckers.
    Drift,
    /// Kept an ember of the shrine fire.
    Ember,
    /// Sounded the deep channel.
    Fathom,
    /// Came into town the crooked way.
    Gull,
    /// Stands in the harbor wardens' favor.
    Harbor,
    /// Salvaged the keel-plate of the Grey Tern.
    Keel,
}

impl Codeword {
    /// Every codeword, in declaration order.
    pub const ALL: [Codeword; 9] = [
        Codeword::Anchor,
        Codeword::Beacon,
        Codeword::Cinder,
        Codeword::Drift,
        Codeword::Ember,
        Codeword::Fathom,
        Codeword::Gull,
        Codeword::Harbor,
        Codeword::Keel,
    ];

    /// Stable id used by the save record.
    pub fn name(self) -> &'static str {
        match self {
            Codeword::Anchor => "anchor",
            Codeword::Beacon => "beacon",
            Codeword::Cinder => "cinder",
            Codeword::Drift => "drift",
            Codeword::Ember => "ember",
            Codeword::Fathom => "fathom",
            Codeword::Gull => "gull",
            Codeword::Harbor => "harbor",
            Codeword::Keel => "keel",
        }
    }

    /// Parse a stable id back to a codeword. Unknown ids yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codeword::Anchor => write!(f, "Anchor"),
            Codeword::Beacon => write!(f, "Beacon"),
            Codeword::Cinder => write!(f, "Cinder"),
            Codeword::Drift => write!(f, "Drift"),
            Codeword::Ember => write!(f, "Ember"),
            Codeword::Fathom => write!(f, "Fathom"),
            Codeword::Gull => write!(f, "Gull"),
            Codeword::Harbor => write!(f, "Harbor"),
            Codeword::Keel => write!(f, "Keel"),
        }
    }
}
