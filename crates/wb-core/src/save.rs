//! Save record serialization.
//!
//! A [`SaveRecord`] is the durable, order-independent key-value form of a
//! [`PlayerState`]. Registries are referenced by stable string ids so that a
//! save written against older content still loads: unknown ids are dropped
//! silently, absent fields default to their zero values, and anything worse
//! than that degrades to a sentinel record the frontend must refuse to
//! resume from.

use serde::{Deserialize, Serialize};

use crate::codeword::Codeword;
use crate::error::SaveError;
use crate::id::NodeId;
use crate::item::ItemKind;
use crate::player::PlayerState;
use crate::skill::SkillKind;
use crate::track::Track;

/// The durable form of a play session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRecord {
    /// Character name.
    pub name: String,
    /// Class description.
    pub description: String,
    /// Character archetype id.
    pub character_type: String,
    /// Current life.
    pub life: i32,
    /// Maximum life.
    pub life_limit: i32,
    /// Money carried.
    pub money: i32,
    /// Carry limit.
    pub item_limit: usize,
    /// Skill cap.
    pub skills_limit: usize,
    /// Total money donated.
    pub donation: i32,
    /// One-shot blessing flag.
    pub blessed: bool,
    /// Immortality flag.
    pub immortal: bool,
    /// Whether the ritual of the ball has begun.
    pub ritual_ball_started: bool,
    /// Mini-game counter.
    pub ticks: i32,
    /// Mini-game counter.
    pub cross: i32,
    /// Codeword ids.
    pub codewords: Vec<String>,
    /// Carried item ids, in pack order.
    pub items: Vec<String>,
    /// Active skill ids.
    pub skills: Vec<String>,
    /// Lost item ids, in the order they were lost.
    pub lost_items: Vec<String>,
    /// Lost skill ids, in the order they were lost.
    pub lost_skills: Vec<String>,
    /// Money stripped away by story events.
    pub lost_money: i32,
    /// Current story node id.
    pub node: i32,
    /// Creation time in epoch milliseconds. Sort key and default file stem.
    pub created_at_millis: i64,
}

impl SaveRecord {
    /// Capture a state as a record.
    pub fn from_state(state: &PlayerState) -> Self {
        Self {
            name: state.name.clone(),
            description: state.description.clone(),
            character_type: state.character_type.clone(),
            life: state.life.current(),
            life_limit: state.life.max(),
            money: state.money,
            item_limit: state.item_limit,
            skills_limit: state.skills_limit,
            donation: state.donation,
            blessed: state.blessed,
            immortal: state.immortal,
            ritual_ball_started: state.ritual_ball_started,
            ticks: state.ticks,
            cross: state.cross,
            codewords: state.codewords.iter().map(|w| w.name().to_string()).collect(),
            items: state.items.iter().map(|i| i.name().to_string()).collect(),
            skills: state.skills.iter().map(|s| s.name().to_string()).collect(),
            lost_items: state.lost_items.iter().map(|i| i.name().to_string()).collect(),
            lost_skills: state.lost_skills.iter().map(|s| s.name().to_string()).collect(),
            lost_money: state.lost_money,
            node: state.node.0,
            created_at_millis: state.created_at,
        }
    }

    /// Reconstruct a state from a record.
    ///
    /// Ids that no longer exist in the registries are dropped without
    /// comment: a stale save referencing removed content should still load.
    pub fn into_state(self) -> PlayerState {
        PlayerState {
            name: self.name,
            description: self.description,
            character_type: self.character_type,
            life: Track::with_current(self.life, self.life_limit),
            money: self.money.max(0),
            items: self.items.iter().filter_map(|s| ItemKind::parse(s)).collect(),
            skills: self.skills.iter().filter_map(|s| SkillKind::parse(s)).collect(),
            codewords: self
                .codewords
                .iter()
                .filter_map(|s| Codeword::parse(s))
                .collect(),
            lost_items: self
                .lost_items
                .iter()
                .filter_map(|s| ItemKind::parse(s))
                .collect(),
            lost_skills: self
                .lost_skills
                .iter()
                .filter_map(|s| SkillKind::parse(s))
                .collect(),
            lost_money: self.lost_money,
            donation: self.donation,
            blessed: self.blessed,
            immortal: self.immortal,
            ritual_ball_started: self.ritual_ball_started,
            ticks: self.ticks,
            cross: self.cross,
            item_limit: self.item_limit,
            skills_limit: self.skills_limit,
            node: NodeId(self.node),
            created_at: self.created_at_millis,
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON. Malformed input yields the sentinel record rather
    /// than an error.
    pub fn from_json(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|_| Self::sentinel())
    }

    /// The record that signals an invalid or unreadable save.
    pub fn sentinel() -> Self {
        Self {
            node: NodeId::INVALID.0,
            ..Self::default()
        }
    }

    /// Whether this record is the invalid-save sentinel.
    pub fn is_sentinel(&self) -> bool {
        !NodeId(self.node).is_valid()
    }

    /// Default file stem for a fresh save: the creation timestamp.
    pub fn file_stem(&self) -> String {
        self.created_at_millis.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> PlayerState {
        let mut state = PlayerState::new("Kestrel", "sea_thief", "A thief off the grey water.", 9)
            .with_money(20)
            .with_skills(&[SkillKind::Thievery, SkillKind::Seafaring])
            .with_items(&[ItemKind::Bow, ItemKind::DriedFish, ItemKind::DriedFish]);
        state.add_codeword(Codeword::Gull);
        state.add_codeword(Codeword::Beacon);
        state.lose_items(&[ItemKind::Bow]);
        state.lose_skills(&[SkillKind::Thievery]);
        state.gain_life(-2);
        state.donate(4);
        state.ritual_ball_started = true;
        state.ticks = 2;
        state.node = NodeId(75);
        state
    }

    #[test]
    fn round_trip_preserves_everything() {
        let state = test_state();
        let record = SaveRecord::from_state(&state);
        let json = record.to_json().unwrap();
        let back = SaveRecord::from_json(&json).into_state();
        assert_eq!(back, state);
    }

    #[test]
    fn loss_history_order_survives() {
        let mut state = test_state();
        state.lose_items(&[ItemKind::DriedFish, ItemKind::DriedFish]);
        let back = SaveRecord::from_state(&state).into_state();
        assert_eq!(
            back.lost_items,
            vec![ItemKind::Bow, ItemKind::DriedFish, ItemKind::DriedFish]
        );
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let state = test_state();
        let mut record = SaveRecord::from_state(&state);
        record.items.push("vorpal_blade".to_string());
        record.skills.insert(0, "necromancy".to_string());
        record.codewords.push("zephyr".to_string());
        let back = record.into_state();
        assert_eq!(back.items, state.items);
        assert_eq!(back.skills, state.skills);
        assert_eq!(back.codewords, state.codewords);
    }

    #[test]
    fn absent_fields_default_to_zero() {
        let record = SaveRecord::from_json(r#"{"name":"Nim","node":3}"#);
        assert!(!record.is_sentinel());
        let state = record.into_state();
        assert_eq!(state.name, "Nim");
        assert_eq!(state.node, NodeId(3));
        assert_eq!(state.money, 0);
        assert_eq!(state.life.current(), 0);
        assert!(!state.blessed);
        assert!(state.items.is_empty());
        assert_eq!(state.created_at, 0);
    }

    #[test]
    fn malformed_input_yields_sentinel() {
        assert!(SaveRecord::from_json("").is_sentinel());
        assert!(SaveRecord::from_json("not json at all {").is_sentinel());
        assert!(SaveRecord::from_json("[1,2,3]").is_sentinel());
        let state = SaveRecord::from_json("{{{{").into_state();
        assert_eq!(state.node, NodeId::INVALID);
    }

    #[test]
    fn file_stem_is_creation_timestamp() {
        let mut record = SaveRecord::from_state(&test_state());
        record.created_at_millis = 1_700_000_000_000;
        assert_eq!(record.file_stem(), "1700000000000");
    }

    #[test]
    fn record_json_round_trip() {
        let record = SaveRecord::from_state(&test_state());
        let json = record.to_json().unwrap();
        assert_eq!(SaveRecord::from_json(&json), record);
    }
}
