//! The session controller's node-visit loop.
//!
//! One visit runs: background chain, arrival event, terminal and death
//! checks, the blessing side-channel, the forced interstitials that restore
//! state invariants, the optional shop and trade, and finally the choice
//! menu. The whole session is single-threaded and cooperative: every
//! blocking prompt observes the quit signal and unwinds immediately, leaving
//! the last explicit save as the durable checkpoint.

use std::time::Duration;

use wb_core::{ItemKind, NodeId, PlayerState};

use crate::error::EngineResult;
use crate::graph::{DEFAULT_REDIRECT_CAP, Navigator, StoryGraph};
use crate::node::{LosePool, NodeKind, StoryNode, TakePool, Trade};
use crate::resolver::{Resolution, picked_kinds, resolve, shed_skills};
use crate::ui::{Selection, Severity, StoryUi};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Life ran out.
    Death,
    /// A victorious ending node was reached.
    GoodEnding,
    /// A defeated ending node was reached.
    BadEnding,
    /// A doom node (or an unwritten passage) was reached.
    Doom,
    /// A forced-restart node was reached; the caller starts the story over.
    Restart,
    /// The quit signal was observed.
    Quit,
}

/// Tunables for a play session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cap on background-redirect hops.
    pub redirect_cap: usize,
    /// Advisory display duration passed with transient messages.
    pub message_hint: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            redirect_cap: DEFAULT_REDIRECT_CAP,
            message_hint: Duration::from_secs(2),
        }
    }
}

impl SessionConfig {
    /// Override the redirect hop cap.
    pub fn with_redirect_cap(mut self, cap: usize) -> Self {
        self.redirect_cap = cap.max(1);
        self
    }

    /// Override the message display hint.
    pub fn with_message_hint(mut self, hint: Duration) -> Self {
        self.message_hint = hint;
        self
    }
}

enum Step {
    Goto(NodeId),
    End(SessionEnd),
}

/// Drives one character through the story graph.
///
/// The session owns the player state for its whole run; the graph is shared,
/// immutable, and injected by the caller.
pub struct Session<'a> {
    graph: &'a StoryGraph,
    nav: Navigator<'a>,
    state: PlayerState,
    config: SessionConfig,
}

impl<'a> Session<'a> {
    /// Create a session with default configuration.
    pub fn new(graph: &'a StoryGraph, state: PlayerState) -> Self {
        Self::with_config(graph, state, SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(graph: &'a StoryGraph, state: PlayerState, config: SessionConfig) -> Self {
        let nav = Navigator::new(graph).with_redirect_cap(config.redirect_cap);
        Self {
            graph,
            nav,
            state,
            config,
        }
    }

    /// The player state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Mutable access to the player state.
    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    /// Run the visit loop from the state's current node until the session
    /// ends. A finished session cannot be resumed; start a new one.
    pub fn run(&mut self, ui: &mut dyn StoryUi) -> EngineResult<SessionEnd> {
        let mut target = self.state.node;
        loop {
            match self.visit(target, ui)? {
                Step::Goto(next) => target = next,
                Step::End(end) => return Ok(end),
            }
        }
    }

    fn visit(&mut self, entry: NodeId, ui: &mut dyn StoryUi) -> EngineResult<Step> {
        let graph = self.graph;
        let id = self.nav.background_chain(entry, &self.state)?;
        let placeholder;
        let node = match graph.get(id) {
            Ok(node) => node,
            Err(_) => {
                placeholder = StoryNode::placeholder(id);
                &placeholder
            }
        };

        self.state.node = id;
        let entry_life = self.state.life.current();
        if let Some(event) = node.event {
            event(&mut self.state);
        }
        ui.narrate(&node.text);

        match node.kind {
            NodeKind::GoodEnding => return Ok(Step::End(SessionEnd::GoodEnding)),
            NodeKind::BadEnding => return Ok(Step::End(SessionEnd::BadEnding)),
            NodeKind::Doom => return Ok(Step::End(SessionEnd::Doom)),
            NodeKind::Restart => return Ok(Step::End(SessionEnd::Restart)),
            NodeKind::Normal => {}
        }
        if self.state.is_dead() {
            return Ok(Step::End(SessionEnd::Death));
        }

        let mut first_pass = true;
        let mut blessing_offered = false;
        loop {
            if let Some(count) = node.skill_loss
                && let Some(end) = self.force_skill_loss(count, ui)
            {
                return Ok(Step::End(end));
            }
            if first_pass
                && let Some(pool) = &node.take
                && pool.limit > 0
                && let Some(end) = self.offer_take(pool, ui)
            {
                return Ok(Step::End(end));
            }
            if let Some(pool) = &node.lose
                && let Some(end) = self.forced_steal(pool, ui)
            {
                return Ok(Step::End(end));
            }
            if let Some(end) = self.forced_drop(ui) {
                return Ok(Step::End(end));
            }
            if first_pass {
                if !node.shop.is_empty()
                    && let Some(end) = self.run_shop(&node.shop, ui)
                {
                    return Ok(Step::End(end));
                }
                if let Some(trade) = &node.trade
                    && let Some(end) = self.offer_trade(trade, ui)
                {
                    return Ok(Step::End(end));
                }
            }
            first_pass = false;

            // A blessing can veto one loss of life. Offered once per visit.
            if self.state.blessed
                && !blessing_offered
                && self.state.life.current() < entry_life
            {
                blessing_offered = true;
                if let Some(end) = self.offer_blessing(entry_life, ui) {
                    return Ok(Step::End(end));
                }
            }

            if node.choices.is_empty() {
                // Nothing leads on from here.
                return Ok(Step::End(SessionEnd::Doom));
            }

            ui.checkpoint(&self.state);
            let labels: Vec<String> = node.choices.iter().map(|c| c.text.clone()).collect();
            match ui.choose("What will you do?", &labels) {
                Selection::Picked(index) if index < node.choices.len() => {
                    match resolve(&node.choices[index], &mut self.state, ui, id) {
                        Resolution::Goto(dest) if dest == id => {
                            // Unresolved self-loop: re-enter the invariant
                            // checks without replaying the arrival event.
                        }
                        Resolution::Goto(dest) => {
                            if let Some(farewell) = &node.farewell {
                                ui.narrate(farewell);
                            }
                            return Ok(Step::Goto(dest));
                        }
                        Resolution::Denied(denial) => {
                            ui.message(
                                &denial.to_string(),
                                Severity::Warn,
                                self.config.message_hint,
                            );
                        }
                        Resolution::Aborted => {}
                        Resolution::Quit => return Ok(Step::End(SessionEnd::Quit)),
                    }
                }
                Selection::Picked(_) | Selection::Back => {}
                Selection::Preview(index) if index < node.choices.len() => {
                    let dest = node.choices[index].dest;
                    match self.nav.simulate_future(dest, &self.state) {
                        Ok(text) => ui.message(
                            &format!("A vision comes to you:\n{text}"),
                            Severity::Info,
                            self.config.message_hint,
                        ),
                        Err(e) => {
                            ui.message(&e.to_string(), Severity::Error, self.config.message_hint);
                        }
                    }
                }
                Selection::Preview(_) => {}
                Selection::Quit => return Ok(Step::End(SessionEnd::Quit)),
            }
        }
    }

    fn offer_blessing(&mut self, entry_life: i32, ui: &mut dyn StoryUi) -> Option<SessionEnd> {
        match ui.confirm("A blessing rests on you. Undo the harm you have just suffered?") {
            Selection::Picked(true) => {
                let shortfall = entry_life - self.state.life.current();
                self.state.gain_life(shortfall);
                self.state.blessed = false;
                ui.message(
                    "The blessing is spent.",
                    Severity::Info,
                    self.config.message_hint,
                );
                None
            }
            Selection::Quit => Some(SessionEnd::Quit),
            _ => None,
        }
    }

    fn force_skill_loss(&mut self, count: usize, ui: &mut dyn StoryUi) -> Option<SessionEnd> {
        let target = self.state.skills_limit.saturating_sub(count);
        while self.state.skills.len() > target {
            let need = self.state.skills.len() - target;
            let labels: Vec<String> = self.state.skills.iter().map(|s| s.to_string()).collect();
            match ui.choose_many("Your training is stripped from you. Choose what goes.", &labels, need)
            {
                Selection::Picked(sel) => shed_skills(&mut self.state, &sel, need),
                Selection::Quit => return Some(SessionEnd::Quit),
                // This interaction permits no cancellation.
                Selection::Back | Selection::Preview(_) => {}
            }
        }
        None
    }

    fn offer_take(&mut self, pool: &TakePool, ui: &mut dyn StoryUi) -> Option<SessionEnd> {
        let labels: Vec<String> = pool.items.iter().map(|i| i.to_string()).collect();
        let prompt = format!("You may take up to {} of these.", pool.limit);
        match ui.choose_many(&prompt, &labels, pool.limit) {
            Selection::Picked(sel) => {
                let taken = picked_kinds(&pool.items, &sel, pool.limit);
                self.state.get_items(&taken);
            }
            Selection::Quit => return Some(SessionEnd::Quit),
            Selection::Back | Selection::Preview(_) => {}
        }
        None
    }

    fn forced_steal(&mut self, pool: &LosePool, ui: &mut dyn StoryUi) -> Option<SessionEnd> {
        loop {
            let held: Vec<usize> = self
                .state
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| pool.items.contains(item))
                .map(|(pos, _)| pos)
                .collect();
            if held.len() <= pool.keep {
                return None;
            }
            let labels: Vec<String> = held
                .iter()
                .map(|&pos| self.state.items[pos].to_string())
                .collect();
            match ui.choose("They will not let you keep all of this. Give something up.", &labels)
            {
                Selection::Picked(index) if index < held.len() => {
                    let item = self.state.items[held[index]];
                    self.state.lose_items(&[item]);
                }
                Selection::Quit => return Some(SessionEnd::Quit),
                // This interaction permits no cancellation.
                _ => {}
            }
        }
    }

    fn forced_drop(&mut self, ui: &mut dyn StoryUi) -> Option<SessionEnd> {
        while !self.state.carry_ok() {
            let labels: Vec<String> = self.state.items.iter().map(|i| i.to_string()).collect();
            match ui.choose("Your pack is too heavy. Something must be left behind.", &labels) {
                Selection::Picked(index) if index < self.state.items.len() => {
                    let item = self.state.items[index];
                    self.state.lose_items(&[item]);
                }
                Selection::Quit => return Some(SessionEnd::Quit),
                // This interaction permits no cancellation.
                _ => {}
            }
        }
        None
    }

    fn run_shop(&mut self, wares: &[(ItemKind, i32)], ui: &mut dyn StoryUi) -> Option<SessionEnd> {
        loop {
            let labels: Vec<String> = wares
                .iter()
                .map(|(item, price)| format!("{item} ({price} coins)"))
                .collect();
            let prompt = format!("The trader's wares ({} coins in your purse)", self.state.money);
            match ui.choose(&prompt, &labels) {
                Selection::Picked(index) if index < wares.len() => {
                    let (item, price) = wares[index];
                    if self.state.spend(price) {
                        self.state.get_items(&[item]);
                        ui.message(
                            &format!("You buy the {item}."),
                            Severity::Info,
                            self.config.message_hint,
                        );
                    } else {
                        ui.message(
                            "You cannot afford that.",
                            Severity::Warn,
                            self.config.message_hint,
                        );
                    }
                }
                Selection::Back => return None,
                Selection::Quit => return Some(SessionEnd::Quit),
                Selection::Picked(_) | Selection::Preview(_) => {}
            }
        }
    }

    fn offer_trade(&mut self, trade: &Trade, ui: &mut dyn StoryUi) -> Option<SessionEnd> {
        if !self.state.has_item(trade.give) {
            return None;
        }
        let prompt = format!("Trade your {} for the {}?", trade.give, trade.take);
        match ui.confirm(&prompt) {
            Selection::Picked(true) => {
                self.state.lose_items(&[trade.give]);
                self.state.get_items(&[trade.take]);
            }
            Selection::Quit => return Some(SessionEnd::Quit),
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use wb_core::{Codeword, SkillKind};

    use super::*;
    use crate::choice::{Choice, ChoiceKind};
    use crate::ui::scripted::ScriptedUi;

    fn test_state() -> PlayerState {
        PlayerState::new("Rhianne", "wayfarer", "", 10)
            .with_money(10)
            .with_skills(&[
                SkillKind::Swordplay,
                SkillKind::Stealth,
                SkillKind::Wilderness,
                SkillKind::Diplomacy,
            ])
            .with_items(&[ItemKind::Sword, ItemKind::Provisions])
    }

    fn ending(id: i32, kind: NodeKind) -> StoryNode {
        StoryNode::new(id, "It is over.").with_kind(kind)
    }

    #[test]
    fn reaches_a_good_ending() {
        let mut g = StoryGraph::new();
        g.insert(StoryNode::new(0, "The gate.").with_choice(Choice::new("On", 1)))
            .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert_eq!(ui.narrated, vec!["The gate.", "It is over."]);
    }

    #[test]
    fn lethal_life_choice_transitions_then_dies() {
        // Life 10, a -15 choice: life clamps to 0 and the session ends in
        // death at the destination.
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The ledge.")
                .with_choice(Choice::new("Jump", 1).with_kind(ChoiceKind::Life(-15))),
        )
        .unwrap();
        g.insert(StoryNode::new(1, "The rocks below."))
            .unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::Death);
        assert_eq!(session.state().life.current(), 0);
        assert!(ui.narrated.contains(&"The rocks below.".to_string()));
    }

    #[test]
    fn immortal_survives_the_same_fall() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The ledge.")
                .with_choice(Choice::new("Jump", 1).with_kind(ChoiceKind::Life(-15))),
        )
        .unwrap();
        g.insert(StoryNode::new(1, "The rocks below.").with_choice(Choice::new("Crawl", 2)))
            .unwrap();
        g.insert(ending(2, NodeKind::BadEnding)).unwrap();

        let mut state = test_state();
        state.immortal = true;
        let mut ui = ScriptedUi::new().pick(0).pick(0);
        let mut session = Session::new(&g, state);
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::BadEnding);
    }

    #[test]
    fn denial_re_prompts_at_the_same_node() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The door.")
                .with_choice(
                    Choice::new("Unlock it", 1).with_kind(ChoiceKind::Item(ItemKind::BrassKey)),
                )
                .with_choice(Choice::new("Walk away", 2)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();
        g.insert(ending(2, NodeKind::BadEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0).pick(1);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::BadEnding);
        assert_eq!(ui.messages.len(), 1);
        assert!(ui.messages[0].contains("do not have"));
    }

    #[test]
    fn event_hook_applies_before_choices() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "Over the wall.")
                .on_event(|s| s.add_codeword(Codeword::Gull))
                .with_choice(
                    Choice::new("Whisper the word", 1)
                        .with_kind(ChoiceKind::Codeword(Codeword::Gull)),
                ),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert!(session.state().has_codeword(Codeword::Gull));
    }

    #[test]
    fn background_redirects_route_the_visit() {
        let mut g = StoryGraph::new();
        g.insert(StoryNode::new(0, "").on_background(|s| {
            Some(if s.has_codeword(Codeword::Harbor) {
                NodeId(2)
            } else {
                NodeId(1)
            })
        }))
        .unwrap();
        g.insert(ending(1, NodeKind::BadEnding)).unwrap();
        g.insert(ending(2, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new();
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::BadEnding);

        let mut state = test_state();
        state.add_codeword(Codeword::Harbor);
        let mut ui = ScriptedUi::new();
        let mut session = Session::new(&g, state);
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
    }

    #[test]
    fn unknown_destination_degrades_to_placeholder_doom() {
        let mut g = StoryGraph::new();
        g.insert(StoryNode::new(0, "The gate.").with_choice(Choice::new("On", 404)))
            .unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::Doom);
        assert!(ui.narrated[1].contains("not yet written"));
    }

    #[test]
    fn forced_drop_runs_until_carry_ok() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The hoard.")
                .on_event(|s| s.get_items(&[ItemKind::Rope; 12]))
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        // 14 items against a limit of 12: two drops are forced.
        let mut ui = ScriptedUi::new().pick(0).pick(0).pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert_eq!(session.state().items.len(), 12);
        assert!(session.state().carry_ok());
        assert_eq!(session.state().lost_items.len(), 2);
    }

    #[test]
    fn forced_steal_keeps_at_most_the_limit() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The bandit toll.")
                .with_lose(&[ItemKind::SilverIdol, ItemKind::CrystalOrb, ItemKind::BrassKey], 1)
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut state = test_state().with_items(&[
            ItemKind::Sword,
            ItemKind::SilverIdol,
            ItemKind::CrystalOrb,
            ItemKind::BrassKey,
        ]);
        state.item_limit = 12;
        // Two valuables must go before the choice menu appears.
        let mut ui = ScriptedUi::new().pick(0).pick(0).pick(0);
        let mut session = Session::new(&g, state);
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        let valuables = session
            .state()
            .items
            .iter()
            .filter(|i| {
                matches!(
                    i,
                    ItemKind::SilverIdol | ItemKind::CrystalOrb | ItemKind::BrassKey
                )
            })
            .count();
        assert_eq!(valuables, 1);
        assert!(session.state().has_item(ItemKind::Sword));
    }

    #[test]
    fn node_skill_loss_loops_until_satisfied() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The hag's toll.")
                .with_skill_loss(2)
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        // First selection gives up only one skill; the loop asks again.
        let mut ui = ScriptedUi::new().pick_many(&[0]).pick_many(&[0]).pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert_eq!(session.state().skills.len(), 2);
        assert_eq!(session.state().lost_skills.len(), 2);
    }

    #[test]
    fn take_pool_is_offered_once_and_capped() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The key cellar.")
                .with_take(&[ItemKind::SilverIdol, ItemKind::CrystalOrb, ItemKind::HealingSalve], 2)
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick_many(&[0, 2, 1]).pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert!(session.state().has_item(ItemKind::SilverIdol));
        assert!(session.state().has_item(ItemKind::HealingSalve));
        assert!(!session.state().has_item(ItemKind::CrystalOrb));
    }

    #[test]
    fn shop_buys_and_refuses_overdraft() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "Market rows.")
                .with_ware(ItemKind::Rope, 3)
                .with_ware(ItemKind::FurCloak, 40)
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0).pick(1).back().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert!(session.state().has_item(ItemKind::Rope));
        assert!(!session.state().has_item(ItemKind::FurCloak));
        assert_eq!(session.state().money, 7);
        assert!(ui.messages.iter().any(|m| m.contains("cannot afford")));
    }

    #[test]
    fn trade_swaps_on_confirmation() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The trader.")
                .with_trade(ItemKind::Sword, ItemKind::FurCloak)
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().answer(true).pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert!(!session.state().has_item(ItemKind::Sword));
        assert!(session.state().has_item(ItemKind::FurCloak));
    }

    #[test]
    fn trade_skipped_without_the_goods() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The trader.")
                .with_trade(ItemKind::BrassKey, ItemKind::FurCloak)
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        // No confirm prompt was consumed.
        assert!(ui.confirms.is_empty());
    }

    #[test]
    fn blessing_undoes_event_damage_once() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The rockfall.")
                .on_event(|s| s.gain_life(-4))
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut state = test_state();
        state.blessed = true;
        let mut ui = ScriptedUi::new().answer(true).pick(0);
        let mut session = Session::new(&g, state);
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert_eq!(session.state().life.current(), 10);
        assert!(!session.state().blessed);
    }

    #[test]
    fn blessing_declined_is_kept() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The rockfall.")
                .on_event(|s| s.gain_life(-4))
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut state = test_state();
        state.blessed = true;
        let mut ui = ScriptedUi::new().answer(false).pick(0);
        let mut session = Session::new(&g, state);
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert_eq!(session.state().life.current(), 6);
        assert!(session.state().blessed);
    }

    #[test]
    fn unblessed_damage_asks_nothing() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The rockfall.")
                .on_event(|s| s.gain_life(-4))
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert!(ui.prompts.iter().all(|p| !p.contains("blessing")));
    }

    #[test]
    fn farewell_shown_on_leaving() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The gate.")
                .with_farewell("The dust settles behind you.")
                .with_choice(Choice::new("On", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        session.run(&mut ui).unwrap();
        assert_eq!(
            ui.narrated,
            vec!["The gate.", "The dust settles behind you.", "It is over."]
        );
    }

    #[test]
    fn self_loop_choice_re_enters_without_replaying_event() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The dice circle.")
                .on_event(|s| s.ticks += 1)
                .with_choice(Choice::new("Linger", 0))
                .with_choice(Choice::new("Leave", 1)),
        )
        .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0).pick(0).pick(1);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        // Lingering twice did not replay the arrival event.
        assert_eq!(session.state().ticks, 1);
        assert_eq!(ui.narrated.len(), 2);
    }

    #[test]
    fn preview_shows_the_future_without_committing() {
        let mut g = StoryGraph::new();
        g.insert(
            StoryNode::new(0, "The fork.")
                .with_choice(Choice::new("Left", 1))
                .with_choice(Choice::new("Right", 2)),
        )
        .unwrap();
        g.insert(
            StoryNode::new(1, "You are robbed blind.").on_event(|s| s.lose_all()),
        )
        .unwrap();
        g.insert(ending(2, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().preview(0).pick(1);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::GoodEnding);
        assert!(ui.messages.iter().any(|m| m.contains("robbed blind")));
        assert_eq!(session.state().money, 10);
    }

    #[test]
    fn quit_unwinds_from_the_choice_menu() {
        let mut g = StoryGraph::new();
        g.insert(StoryNode::new(0, "The gate.").with_choice(Choice::new("On", 1)))
            .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new();
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::Quit);
    }

    #[test]
    fn restart_node_ends_the_session() {
        let mut g = StoryGraph::new();
        g.insert(StoryNode::new(0, "The gate.").with_choice(Choice::new("Drink", 1)))
            .unwrap();
        g.insert(ending(1, NodeKind::Restart)).unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::Restart);
    }

    #[test]
    fn current_node_is_committed_for_saving() {
        let mut g = StoryGraph::new();
        g.insert(StoryNode::new(0, "The gate.").with_choice(Choice::new("On", 7)))
            .unwrap();
        g.insert(StoryNode::new(7, "The gatehouse.").with_choice(Choice::new("On", 1)))
            .unwrap();
        g.insert(ending(1, NodeKind::GoodEnding)).unwrap();

        let mut ui = ScriptedUi::new().pick(0);
        let mut session = Session::new(&g, test_state());
        assert_eq!(session.run(&mut ui).unwrap(), SessionEnd::Quit);
        assert_eq!(session.state().node, NodeId(7));
    }
}
