//! Skill registry: the trained abilities a character may hold.

use std::fmt;

/// Every skill in the story content set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    /// Fighting with blades.
    Swordplay,
    /// Shooting with bow and sling.
    Archery,
    /// Moving unseen and unheard.
    Stealth,
    /// Locks, pockets, and sleight of hand.
    Thievery,
    /// Old tongues, old tales, old maps.
    Lore,
    /// Tracking, foraging, weather-sense.
    Wilderness,
    /// Handling boats and reading tides.
    Seafaring,
    /// Soft words in hard places.
    Diplomacy,
}

impl SkillKind {
    /// Every skill kind, in declaration order.
    pub const ALL: [SkillKind; 8] = [
        SkillKind::Swordplay,
        SkillKind::Archery,
        SkillKind::Stealth,
        SkillKind::Thievery,
        SkillKind::Lore,
        SkillKind::Wilderness,
        SkillKind::Seafaring,
        SkillKind::Diplomacy,
    ];

    /// Stable id used by the save record.
    pub fn name(self) -> &'static str {
        match self {
            SkillKind::Swordplay => "swordplay",
            SkillKind::Archery => "archery",
            SkillKind::Stealth => "stealth",
            SkillKind::Thievery => "thievery",
            SkillKind::Lore => "lore",
            SkillKind::Wilderness => "wilderness",
            SkillKind::Seafaring => "seafaring",
            SkillKind::Diplomacy => "diplomacy",
        }
    }

    /// Parse a stable id back to a kind. Unknown ids yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }
}

// Skills display with an initial capital, matching how the character sheet
// and story text refer to them.
impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillKind::Swordplay => write!(f, "Swordplay"),
            SkillKind::Archery => write!(f, "Archery"),
            SkillKind::Stealth => write!(f, "Stealth"),
            SkillKind::Thievery => write!(f, "Thievery"),
            SkillKind::Lore => write!(f, "Lore"),
            SkillKind::Wilderness => write!(f, "Wilderness"),
            SkillKind::Seafaring => write!(f, "Seafaring"),
            SkillKind::Diplomacy => write!(f, "Diplomacy"),
        }
    }
}
