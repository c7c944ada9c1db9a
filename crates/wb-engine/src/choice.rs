//! Choices: the gated edges of the story graph.

use wb_core::{Codeword, ItemKind, NodeId, SkillKind};

/// One selectable option on a story node.
///
/// A choice is a weak edge: it names its destination by id, resolved through
/// the registry, since the graph is cyclic and destinations are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Text shown in the choice menu.
    pub text: String,
    /// The gate and side effect attached to this edge.
    pub kind: ChoiceKind,
    /// Default destination node.
    pub dest: NodeId,
}

impl Choice {
    /// Create an ungated choice to the given destination.
    pub fn new(text: impl Into<String>, dest: impl Into<NodeId>) -> Self {
        Self {
            text: text.into(),
            kind: ChoiceKind::Normal,
            dest: dest.into(),
        }
    }

    /// Attach a gate or side effect.
    pub fn with_kind(mut self, kind: ChoiceKind) -> Self {
        self.kind = kind;
        self
    }
}

/// The discriminated union of choice behaviors.
///
/// Exactly one arm applies per choice. Preconditions are checked before any
/// mutation; a failed precondition denies the choice and changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceKind {
    /// No gate, no effect.
    Normal,
    /// Requires holding the item. No effect.
    Item(ItemKind),
    /// Requires holding every listed item (counting multiplicity). No effect.
    AllItems(Vec<ItemKind>),
    /// Requires the codeword. No effect.
    Codeword(Codeword),
    /// Adds the item to the pack. The next visit's drop loop enforces the
    /// carry limit if this pushes past it.
    GetItem(ItemKind),
    /// Requires and removes the item.
    LoseItem(ItemKind),
    /// Strips items and money.
    LoseAll,
    /// Requires the purse to show at least this much. Nothing is spent.
    Money(i32),
    /// Requires and spends this much.
    LoseMoney(i32),
    /// Adjusts life by this delta. The transition still occurs if life hits
    /// zero; the session then ends in death at the destination.
    Life(i32),
    /// Eat up to `threshold` provisions. Life changes by the number eaten
    /// minus the threshold, so eating too little costs life.
    Eat {
        /// Consumption cap and break-even count.
        threshold: i32,
    },
    /// Eat at least one provision for a flat heal of `amount`, however many
    /// are consumed.
    EatHeal {
        /// Life granted on success; also the consumption cap.
        amount: i32,
    },
    /// Requires the skill.
    Skill(SkillKind),
    /// Requires the skill plus any one of the listed tools.
    SkillAny {
        /// Required skill.
        skill: SkillKind,
        /// Qualifying tools; holding any one suffices.
        tools: Vec<ItemKind>,
    },
    /// Requires the skill plus one specific tool.
    SkillItem {
        /// Required skill.
        skill: SkillKind,
        /// The one tool that works.
        tool: ItemKind,
    },
    /// Give away an amount of money of the player's choosing.
    Donate,
    /// Give away one item of the player's choosing. The destination comes
    /// from the gift table when the item appears there, else the default.
    Gift {
        /// Gift-to-destination table.
        table: Vec<(ItemKind, NodeId)>,
    },
    /// Shed skills until only `skills_limit - count` remain. Unresolved
    /// selections self-loop back into the node rather than denying.
    LoseSkills {
        /// How many skills must be given up, relative to the cap.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_normal() {
        let c = Choice::new("Walk through the gate", 10);
        assert_eq!(c.kind, ChoiceKind::Normal);
        assert_eq!(c.dest, NodeId(10));
    }

    #[test]
    fn builder_attaches_kind() {
        let c = Choice::new("Show the brass key", 30).with_kind(ChoiceKind::Item(ItemKind::BrassKey));
        assert_eq!(c.kind, ChoiceKind::Item(ItemKind::BrassKey));
    }
}
