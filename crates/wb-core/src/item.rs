//! Item registry: every object a character can carry.
//!
//! A static enumeration with descriptive metadata. The save record refers to
//! items by their stable `name()` id, so variants must never be renamed once
//! content ships.

use std::fmt;

/// Every carryable object in the story content set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A plain soldier's sword.
    Sword,
    /// A knife fit for close work.
    Dagger,
    /// A shortbow of horn and yew.
    Bow,
    /// A hooded storm lantern.
    Lantern,
    /// Thirty feet of hempen rope.
    Rope,
    /// A weighted casting net.
    FishingNet,
    /// A leather waterskin.
    Waterskin,
    /// A bundle of travel rations.
    Provisions,
    /// Salted fish wrapped in cloth.
    DriedFish,
    /// A comb of wild honey.
    Honeycomb,
    /// A pot of wound salve.
    HealingSalve,
    /// A heavy brass key of unknown provenance.
    BrassKey,
    /// A small idol of tarnished silver.
    SilverIdol,
    /// A cloudy crystal orb.
    CrystalOrb,
    /// A winter cloak of sewn furs.
    FurCloak,
}

impl ItemKind {
    /// Every item kind, in declaration order.
    pub const ALL: [ItemKind; 15] = [
        ItemKind::Sword,
        ItemKind::Dagger,
        ItemKind::Bow,
        ItemKind::Lantern,
        ItemKind::Rope,
        ItemKind::FishingNet,
        ItemKind::Waterskin,
        ItemKind::Provisions,
        ItemKind::DriedFish,
        ItemKind::Honeycomb,
        ItemKind::HealingSalve,
        ItemKind::BrassKey,
        ItemKind::SilverIdol,
        ItemKind::CrystalOrb,
        ItemKind::FurCloak,
    ];

    /// Stable id used by the save record.
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Sword => "sword",
            ItemKind::Dagger => "dagger",
            ItemKind::Bow => "bow",
            ItemKind::Lantern => "lantern",
            ItemKind::Rope => "rope",
            ItemKind::FishingNet => "fishing_net",
            ItemKind::Waterskin => "waterskin",
            ItemKind::Provisions => "provisions",
            ItemKind::DriedFish => "dried_fish",
            ItemKind::Honeycomb => "honeycomb",
            ItemKind::HealingSalve => "healing_salve",
            ItemKind::BrassKey => "brass_key",
            ItemKind::SilverIdol => "silver_idol",
            ItemKind::CrystalOrb => "crystal_orb",
            ItemKind::FurCloak => "fur_cloak",
        }
    }

    /// Parse a stable id back to a kind. Unknown ids yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }

    /// Whether this item can be consumed by an eating interaction.
    pub fn edible(self) -> bool {
        matches!(
            self,
            ItemKind::Provisions | ItemKind::DriedFish | ItemKind::Honeycomb
        )
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Sword => write!(f, "sword"),
            ItemKind::Dagger => write!(f, "dagger"),
            ItemKind::Bow => write!(f, "bow"),
            ItemKind::Lantern => write!(f, "storm lantern"),
            ItemKind::Rope => write!(f, "coil of rope"),
            ItemKind::FishingNet => write!(f, "fishing net"),
            ItemKind::Waterskin => write!(f, "waterskin"),
            ItemKind::Provisions => write!(f, "provisions"),
            ItemKind::DriedFish => write!(f, "dried fish"),
            ItemKind::Honeycomb => write!(f, "honeycomb"),
            ItemKind::HealingSalve => write!(f, "healing salve"),
            ItemKind::BrassKey => write!(f, "brass key"),
            ItemKind::SilverIdol => write!(f, "silver idol"),
            ItemKind::CrystalOrb => write!(f, "crystal orb"),
            ItemKind::FurCloak => write!(f, "fur cloak"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::parse(kind.name()), Some(kind));
        }
    }

    #[test]
    fn parse_unknown_is_none() {
        assert_eq!(ItemKind::parse("vorpal_blade"), None);
        assert_eq!(ItemKind::parse(""), None);
    }

    #[test]
    fn edible_kinds() {
        assert!(ItemKind::Provisions.edible());
        assert!(ItemKind::DriedFish.edible());
        assert!(!ItemKind::Sword.edible());
        assert!(!ItemKind::HealingSalve.edible());
    }
}
