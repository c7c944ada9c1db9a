//! The mutable record of one character's play session.
//!
//! All state changes flow through the mutators here. They enforce the carry,
//! skill, and codeword invariants, and keep the loss history that later story
//! text refers back to ("everything the bandits took from you...").

use std::collections::BTreeSet;

use chrono::Utc;

use crate::codeword::Codeword;
use crate::id::NodeId;
use crate::item::ItemKind;
use crate::skill::SkillKind;
use crate::track::Track;

/// Default number of items a character can carry.
pub const DEFAULT_ITEM_LIMIT: usize = 12;
/// Default number of skills a character is created with.
pub const DEFAULT_SKILLS_LIMIT: usize = 4;

/// One character's complete session state.
///
/// Owned exclusively by the session controller while a session runs, and
/// structurally copied when a hypothetical future is simulated. Fields are
/// public for reading; writes should go through the mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Character name.
    pub name: String,
    /// Short class description shown on the character sheet.
    pub description: String,
    /// Character archetype id.
    pub character_type: String,
    /// Life total, clamped to `[0, max]`.
    pub life: Track,
    /// Money carried. Never negative.
    pub money: i32,
    /// Carried items: an ordered multiset, soft-capped by `item_limit`.
    pub items: Vec<ItemKind>,
    /// Active skills, capped by `skills_limit`.
    pub skills: Vec<SkillKind>,
    /// Codewords gained so far. Grows monotonically.
    pub codewords: BTreeSet<Codeword>,
    /// Items shed over the course of play, in the order they were lost.
    pub lost_items: Vec<ItemKind>,
    /// Skills shed over the course of play, in the order they were lost.
    pub lost_skills: Vec<SkillKind>,
    /// Money stripped away by story events (not ordinary spending).
    pub lost_money: i32,
    /// Total money given away at shrines.
    pub donation: i32,
    /// One-shot blessing that can undo a single loss of life.
    pub blessed: bool,
    /// The character cannot die while this holds.
    pub immortal: bool,
    /// Whether the ritual of the ball has begun.
    pub ritual_ball_started: bool,
    /// Scratch counter for the dice-circle mini-game.
    pub ticks: i32,
    /// Scratch counter for the dice-circle mini-game.
    pub cross: i32,
    /// Carry limit for `items`.
    pub item_limit: usize,
    /// Skill cap fixed at character creation.
    pub skills_limit: usize,
    /// The story node the character currently stands at.
    pub node: NodeId,
    /// Creation time in epoch milliseconds. Doubles as the default save name.
    pub created_at: i64,
}

impl PlayerState {
    /// Create a fresh character at full life, standing at node 0.
    pub fn new(
        name: impl Into<String>,
        character_type: impl Into<String>,
        description: impl Into<String>,
        life: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            character_type: character_type.into(),
            life: Track::new(life),
            money: 0,
            items: Vec::new(),
            skills: Vec::new(),
            codewords: BTreeSet::new(),
            lost_items: Vec::new(),
            lost_skills: Vec::new(),
            lost_money: 0,
            donation: 0,
            blessed: false,
            immortal: false,
            ritual_ball_started: false,
            ticks: 0,
            cross: 0,
            item_limit: DEFAULT_ITEM_LIMIT,
            skills_limit: DEFAULT_SKILLS_LIMIT,
            node: NodeId(0),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Set the starting purse.
    pub fn with_money(mut self, money: i32) -> Self {
        self.money = money.max(0);
        self
    }

    /// Set the starting items.
    pub fn with_items(mut self, items: &[ItemKind]) -> Self {
        self.items = items.to_vec();
        self
    }

    /// Set the starting skills.
    pub fn with_skills(mut self, skills: &[SkillKind]) -> Self {
        self.skills = skills.to_vec();
        self
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Adjust life by a delta (negative for damage), clamped to `[0, max]`.
    ///
    /// Dropping to zero raises nothing here; the session loop checks for
    /// death after every node event and choice.
    pub fn gain_life(&mut self, delta: i32) {
        self.life.adjust(delta);
    }

    /// Add items to the pack. The carry limit is not enforced here: the
    /// session loop forces drop interactions until the limit holds again.
    pub fn get_items(&mut self, items: &[ItemKind]) {
        self.items.extend_from_slice(items);
    }

    /// Remove the first occurrence of each named item, recording it in the
    /// loss history. Items requested but not held are silently ignored.
    pub fn lose_items(&mut self, items: &[ItemKind]) {
        for wanted in items {
            if let Some(pos) = self.items.iter().position(|i| i == wanted) {
                let item = self.items.remove(pos);
                self.lost_items.push(item);
            }
        }
    }

    /// Remove the named skills from the active set into the loss history.
    /// Skills not held are silently ignored.
    pub fn lose_skills(&mut self, skills: &[SkillKind]) {
        for wanted in skills {
            if let Some(pos) = self.skills.iter().position(|s| s == wanted) {
                let skill = self.skills.remove(pos);
                self.lost_skills.push(skill);
            }
        }
    }

    /// Strip the character of items and money, recording everything in the
    /// loss history. Skills and codewords persist.
    pub fn lose_all(&mut self) {
        let stripped: Vec<ItemKind> = self.items.drain(..).collect();
        self.lost_items.extend(stripped);
        self.lost_money += self.money;
        self.money = 0;
    }

    /// Spend money. Returns false (and changes nothing) if the purse is
    /// short.
    pub fn spend(&mut self, amount: i32) -> bool {
        if amount < 0 || amount > self.money {
            return false;
        }
        self.money -= amount;
        true
    }

    /// Add money to the purse.
    pub fn gain_money(&mut self, amount: i32) {
        self.money += amount.max(0);
    }

    /// Give money away, tracking the running donation total. Returns false
    /// (and changes nothing) if the purse is short.
    pub fn donate(&mut self, amount: i32) -> bool {
        if !self.spend(amount) {
            return false;
        }
        self.donation += amount;
        true
    }

    /// Gain a codeword. Idempotent: gaining a word already held is a no-op.
    pub fn add_codeword(&mut self, word: Codeword) {
        self.codewords.insert(word);
    }

    // -----------------------------------------------------------------------
    // Predicates
    // -----------------------------------------------------------------------

    /// Whether at least one of the named item is held.
    pub fn has_item(&self, item: ItemKind) -> bool {
        self.items.contains(&item)
    }

    /// Whether every listed item is held, counting multiplicity: a list
    /// naming the same kind twice requires two of it in the pack.
    pub fn has_items(&self, wanted: &[ItemKind]) -> bool {
        let mut pool = self.items.clone();
        wanted.iter().all(|w| {
            if let Some(pos) = pool.iter().position(|i| i == w) {
                pool.remove(pos);
                true
            } else {
                false
            }
        })
    }

    /// Whether the named skill is active.
    pub fn has_skill(&self, skill: SkillKind) -> bool {
        self.skills.contains(&skill)
    }

    /// Whether the named codeword has been gained.
    pub fn has_codeword(&self, word: Codeword) -> bool {
        self.codewords.contains(&word)
    }

    /// Whether the skill is active and at least one qualifying tool is held.
    /// Models "use skill X together with any suitable implement".
    pub fn has_skill_with_any(&self, skill: SkillKind, tools: &[ItemKind]) -> bool {
        self.has_skill(skill) && tools.iter().any(|t| self.has_item(*t))
    }

    /// Whether the pack is within the carry limit. The loop guard for forced
    /// drop interactions.
    pub fn carry_ok(&self) -> bool {
        self.items.len() <= self.item_limit
    }

    /// Whether the character is dead. Immortal characters never are, however
    /// empty the life track.
    pub fn is_dead(&self) -> bool {
        self.life.is_empty() && !self.immortal
    }

    /// The edible items currently held, in pack order.
    pub fn edible_items(&self) -> Vec<ItemKind> {
        self.items.iter().copied().filter(|i| i.edible()).collect()
    }
}
