//! Story nodes and their hooks.
//!
//! Nodes are immutable once the registry is built. Behavior that cannot be
//! expressed as data hangs off two plain function hooks: `background`
//! redirects before anything is shown, `event` mutates the player state on
//! arrival. Both are pure functions over the state, so content stays unit
//! testable without a UI.

use wb_core::{ItemKind, NodeId, PlayerState};

use crate::choice::Choice;

/// Redirect hook: run before a node is shown. Returning an id reroutes the
/// visit; `None` lets the node display.
pub type BackgroundHook = fn(&PlayerState) -> Option<NodeId>;

/// Event hook: applied to the live state when the node is arrived at.
pub type EventHook = fn(&mut PlayerState);

/// Classification of a node's role in the story graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// An ordinary passage.
    #[default]
    Normal,
    /// Ends the session; the frontend starts the story over.
    Restart,
    /// A victorious ending.
    GoodEnding,
    /// A defeated ending.
    BadEnding,
    /// A hopeless dead-end.
    Doom,
}

impl NodeKind {
    /// Whether a visit to a node of this kind ends the session.
    pub fn is_terminal(self) -> bool {
        !matches!(self, NodeKind::Normal)
    }
}

/// A pool of items a node offers for the taking.
#[derive(Debug, Clone, PartialEq)]
pub struct TakePool {
    /// What is on offer.
    pub items: Vec<ItemKind>,
    /// How many may be taken.
    pub limit: usize,
}

/// Items a node confiscates: of the listed kinds, the player keeps at most
/// `keep`.
#[derive(Debug, Clone, PartialEq)]
pub struct LosePool {
    /// The kinds subject to confiscation.
    pub items: Vec<ItemKind>,
    /// How many of them the player may keep.
    pub keep: usize,
}

/// A one-for-one exchange a node offers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade {
    /// What the player hands over.
    pub give: ItemKind,
    /// What the player receives.
    pub take: ItemKind,
}

/// A single narrative unit: display text plus everything that can happen at
/// it.
#[derive(Debug, Clone)]
pub struct StoryNode {
    /// Stable content id.
    pub id: NodeId,
    /// Display text.
    pub text: String,
    /// Optional illustration reference for frontends that can show one.
    pub image: Option<String>,
    /// Role in the story graph.
    pub kind: NodeKind,
    /// Outgoing choices.
    pub choices: Vec<Choice>,
    /// Items for sale here, with prices.
    pub shop: Vec<(ItemKind, i32)>,
    /// Exchange offered here.
    pub trade: Option<Trade>,
    /// Items offered for the taking.
    pub take: Option<TakePool>,
    /// Items confiscated down to a keep-limit.
    pub lose: Option<LosePool>,
    /// Skills that must be given up on arrival, relative to the skill cap.
    pub skill_loss: Option<usize>,
    /// Text shown when the player leaves by a successful choice.
    pub farewell: Option<String>,
    /// Routing hook, run before the node is shown.
    pub background: Option<BackgroundHook>,
    /// Arrival hook, applied to the live state.
    pub event: Option<EventHook>,
}

impl StoryNode {
    /// Create a bare normal node.
    pub fn new(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            image: None,
            kind: NodeKind::Normal,
            choices: Vec::new(),
            shop: Vec::new(),
            trade: None,
            take: None,
            lose: None,
            skill_loss: None,
            farewell: None,
            background: None,
            event: None,
        }
    }

    /// Set the node kind.
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach an illustration reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Put an item up for sale.
    pub fn with_ware(mut self, item: ItemKind, price: i32) -> Self {
        self.shop.push((item, price));
        self
    }

    /// Offer a one-for-one exchange.
    pub fn with_trade(mut self, give: ItemKind, take: ItemKind) -> Self {
        self.trade = Some(Trade { give, take });
        self
    }

    /// Offer a pool of items for the taking.
    pub fn with_take(mut self, items: &[ItemKind], limit: usize) -> Self {
        self.take = Some(TakePool {
            items: items.to_vec(),
            limit,
        });
        self
    }

    /// Confiscate the listed kinds down to a keep-limit.
    pub fn with_lose(mut self, items: &[ItemKind], keep: usize) -> Self {
        self.lose = Some(LosePool {
            items: items.to_vec(),
            keep,
        });
        self
    }

    /// Force giving up skills on arrival.
    pub fn with_skill_loss(mut self, count: usize) -> Self {
        self.skill_loss = Some(count);
        self
    }

    /// Set the farewell text shown on leaving.
    pub fn with_farewell(mut self, text: impl Into<String>) -> Self {
        self.farewell = Some(text.into());
        self
    }

    /// Attach a background routing hook.
    pub fn on_background(mut self, hook: BackgroundHook) -> Self {
        self.background = Some(hook);
        self
    }

    /// Attach an arrival event hook.
    pub fn on_event(mut self, hook: EventHook) -> Self {
        self.event = Some(hook);
        self
    }

    /// The graceful stand-in for an id with no registered node: a dead-end
    /// the player can see instead of a crash.
    pub fn placeholder(id: NodeId) -> Self {
        Self::new(
            id,
            format!("The trail gives out here. This part of the story is not yet written ({id})."),
        )
        .with_kind(NodeKind::Doom)
    }
}
