//! Choice resolution: the state machine core.
//!
//! Given one selected choice and the live player state, decide where the
//! story goes next. Preconditions are checked before anything mutates, so a
//! denial leaves the state untouched; a success applies its side effects and
//! yields the destination in the same step. There is no partial success.

use wb_core::{ItemKind, NodeId, PlayerState, SkillKind};

use crate::choice::{Choice, ChoiceKind};
use crate::error::Denial;
use crate::ui::{Selection, StoryUi};

/// The outcome of resolving one selected choice.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Go to this node. A destination equal to the current node is the
    /// self-loop that re-enters the node's interstitial checks (used by
    /// unresolved skill loss).
    Goto(NodeId),
    /// The choice's precondition failed. Nothing changed.
    Denied(Denial),
    /// The player backed out of the choice's sub-interaction. Nothing
    /// changed.
    Aborted,
    /// The quit signal was observed mid-interaction.
    Quit,
}

/// Resolve one selected choice against the live state.
///
/// `current` is the id of the node the choice sits on; interactive kinds
/// that stay unresolved return it as a self-loop destination.
pub fn resolve(
    choice: &Choice,
    state: &mut PlayerState,
    ui: &mut dyn StoryUi,
    current: NodeId,
) -> Resolution {
    match &choice.kind {
        ChoiceKind::Normal => Resolution::Goto(choice.dest),
        ChoiceKind::Item(item) => {
            if state.has_item(*item) {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::MissingItem)
            }
        }
        ChoiceKind::AllItems(items) => {
            if state.has_items(items) {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::MissingItems)
            }
        }
        ChoiceKind::Codeword(word) => {
            if state.has_codeword(*word) {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::MissingCodeword)
            }
        }
        ChoiceKind::GetItem(item) => {
            state.get_items(&[*item]);
            Resolution::Goto(choice.dest)
        }
        ChoiceKind::LoseItem(item) => {
            if state.has_item(*item) {
                state.lose_items(&[*item]);
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::MissingItem)
            }
        }
        ChoiceKind::LoseAll => {
            state.lose_all();
            Resolution::Goto(choice.dest)
        }
        ChoiceKind::Money(amount) => {
            if state.money >= *amount {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::NotEnoughMoney)
            }
        }
        ChoiceKind::LoseMoney(amount) => {
            if state.spend(*amount) {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::NotEnoughMoney)
            }
        }
        ChoiceKind::Life(delta) => {
            state.gain_life(*delta);
            Resolution::Goto(choice.dest)
        }
        ChoiceKind::Eat { threshold } => resolve_eat(state, ui, choice.dest, *threshold),
        ChoiceKind::EatHeal { amount } => resolve_eat_heal(state, ui, choice.dest, *amount),
        ChoiceKind::Skill(skill) => {
            if state.has_skill(*skill) {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::MissingSkill)
            }
        }
        ChoiceKind::SkillAny { skill, tools } => {
            if !state.has_skill(*skill) {
                Resolution::Denied(Denial::MissingSkill)
            } else if tools.iter().any(|t| state.has_item(*t)) {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::MissingTool)
            }
        }
        ChoiceKind::SkillItem { skill, tool } => {
            if !state.has_skill(*skill) {
                Resolution::Denied(Denial::MissingSkill)
            } else if state.has_item(*tool) {
                Resolution::Goto(choice.dest)
            } else {
                Resolution::Denied(Denial::MissingTool)
            }
        }
        ChoiceKind::Donate => resolve_donate(state, ui, choice.dest),
        ChoiceKind::Gift { table } => resolve_gift(state, ui, choice.dest, table),
        ChoiceKind::LoseSkills { count } => {
            resolve_lose_skills(state, ui, choice.dest, current, *count)
        }
    }
}

fn resolve_eat(
    state: &mut PlayerState,
    ui: &mut dyn StoryUi,
    dest: NodeId,
    threshold: i32,
) -> Resolution {
    let edible = state.edible_items();
    if edible.is_empty() {
        return Resolution::Denied(Denial::NothingEdible);
    }
    let labels: Vec<String> = edible.iter().map(|i| i.to_string()).collect();
    let cap = threshold.max(0) as usize;
    match ui.choose_many("What will you eat?", &labels, cap) {
        Selection::Picked(sel) => {
            let eaten = picked_kinds(&edible, &sel, cap);
            let count = eaten.len() as i32;
            state.lose_items(&eaten);
            state.gain_life(count - threshold);
            Resolution::Goto(dest)
        }
        Selection::Back | Selection::Preview(_) => Resolution::Aborted,
        Selection::Quit => Resolution::Quit,
    }
}

fn resolve_eat_heal(
    state: &mut PlayerState,
    ui: &mut dyn StoryUi,
    dest: NodeId,
    amount: i32,
) -> Resolution {
    let edible = state.edible_items();
    if edible.is_empty() {
        return Resolution::Denied(Denial::NothingEdible);
    }
    let labels: Vec<String> = edible.iter().map(|i| i.to_string()).collect();
    let cap = amount.max(1) as usize;
    match ui.choose_many("What will you eat?", &labels, cap) {
        Selection::Picked(sel) => {
            let eaten = picked_kinds(&edible, &sel, cap);
            if eaten.is_empty() {
                // Declining to eat anything declines the meal.
                return Resolution::Aborted;
            }
            state.lose_items(&eaten);
            state.gain_life(amount);
            Resolution::Goto(dest)
        }
        Selection::Back | Selection::Preview(_) => Resolution::Aborted,
        Selection::Quit => Resolution::Quit,
    }
}

fn resolve_donate(state: &mut PlayerState, ui: &mut dyn StoryUi, dest: NodeId) -> Resolution {
    if state.money <= 0 {
        return Resolution::Denied(Denial::NoMoney);
    }
    match ui.amount("How much will you give?", state.money) {
        Selection::Picked(raw) => {
            let amount = raw.clamp(0, state.money);
            state.donate(amount);
            Resolution::Goto(dest)
        }
        Selection::Back | Selection::Preview(_) => Resolution::Aborted,
        Selection::Quit => Resolution::Quit,
    }
}

fn resolve_gift(
    state: &mut PlayerState,
    ui: &mut dyn StoryUi,
    dest: NodeId,
    table: &[(ItemKind, NodeId)],
) -> Resolution {
    if state.items.is_empty() {
        return Resolution::Denied(Denial::NoItems);
    }
    let labels: Vec<String> = state.items.iter().map(|i| i.to_string()).collect();
    match ui.choose("What will you give?", &labels) {
        Selection::Picked(index) if index < state.items.len() => {
            let given = state.items[index];
            state.lose_items(&[given]);
            let found = table.iter().find(|(item, _)| *item == given);
            Resolution::Goto(found.map(|(_, to)| *to).unwrap_or(dest))
        }
        Selection::Picked(_) | Selection::Back | Selection::Preview(_) => Resolution::Aborted,
        Selection::Quit => Resolution::Quit,
    }
}

fn resolve_lose_skills(
    state: &mut PlayerState,
    ui: &mut dyn StoryUi,
    dest: NodeId,
    current: NodeId,
    count: usize,
) -> Resolution {
    let target = state.skills_limit.saturating_sub(count);
    if state.skills.len() <= target {
        return Resolution::Goto(dest);
    }
    let need = state.skills.len() - target;
    let labels: Vec<String> = state.skills.iter().map(|s| s.to_string()).collect();
    let prompt = "Choose the skills you must give up.";
    match ui.choose_many(prompt, &labels, need) {
        Selection::Picked(sel) => {
            shed_skills(state, &sel, need);
            if state.skills.len() <= target {
                Resolution::Goto(dest)
            } else {
                // Not enough given up yet: stay and be asked again.
                Resolution::Goto(current)
            }
        }
        // This interaction permits no cancellation.
        Selection::Back | Selection::Preview(_) => Resolution::Goto(current),
        Selection::Quit => Resolution::Quit,
    }
}

/// Map a multi-selection back to item kinds, using the selected index for
/// each pick. Duplicate and out-of-range indices are ignored; at most `cap`
/// picks count.
pub(crate) fn picked_kinds(options: &[ItemKind], sel: &[usize], cap: usize) -> Vec<ItemKind> {
    let mut taken: Vec<usize> = Vec::new();
    for &index in sel {
        if taken.len() >= cap {
            break;
        }
        if index < options.len() && !taken.contains(&index) {
            taken.push(index);
        }
    }
    taken.into_iter().map(|index| options[index]).collect()
}

/// Remove up to `cap` skills by selected index, routing through the loss
/// history.
pub(crate) fn shed_skills(state: &mut PlayerState, sel: &[usize], cap: usize) {
    let mut taken: Vec<usize> = Vec::new();
    for &index in sel {
        if taken.len() >= cap {
            break;
        }
        if index < state.skills.len() && !taken.contains(&index) {
            taken.push(index);
        }
    }
    let kinds: Vec<SkillKind> = taken.into_iter().map(|index| state.skills[index]).collect();
    state.lose_skills(&kinds);
}
