//! Error taxonomy and denial reasons.

use thiserror::Error;
use wb_core::NodeId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Defects in the story graph itself.
///
/// These indicate broken content, not player mistakes, and are the only
/// conditions the engine treats as hard failures. Even then the session
/// loop degrades unknown ids to a placeholder dead-end rather than crashing
/// the frontend.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No node is registered under this id.
    #[error("unknown story node: {0}")]
    UnknownNode(NodeId),

    /// A node with this id is already registered.
    #[error("duplicate story node: {0}")]
    DuplicateNode(NodeId),

    /// A background-redirect chain ran past the hop cap, which can only
    /// happen when content redirects in a cycle.
    #[error("background redirects exceeded {limit} hops at node {at}")]
    CyclicRedirect {
        /// The node the chain was at when the cap was hit.
        at: NodeId,
        /// The configured hop cap.
        limit: usize,
    },
}

/// Why a selected choice could not be taken.
///
/// A denial never mutates state. It is surfaced as a transient message and
/// the player picks again at the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Denial {
    /// The choice requires an item the player does not hold.
    #[error("You do not have what that requires.")]
    MissingItem,

    /// The choice requires several items and at least one is missing.
    #[error("You do not have everything that requires.")]
    MissingItems,

    /// The choice is gated on a codeword the player has not gained.
    #[error("That means nothing to you.")]
    MissingCodeword,

    /// The purse is too light for a money gate or payment.
    #[error("You do not have enough money.")]
    NotEnoughMoney,

    /// A donation was offered with an empty purse.
    #[error("You have no money to give.")]
    NoMoney,

    /// An eating interaction found nothing edible in the pack.
    #[error("You have nothing fit to eat.")]
    NothingEdible,

    /// A gift was offered with an empty pack.
    #[error("You have nothing to give.")]
    NoItems,

    /// The choice requires a skill the player does not have.
    #[error("You lack the skill for that.")]
    MissingSkill,

    /// The player has the skill but not the means to use it.
    #[error("You have the skill, but not the means to use it.")]
    MissingTool,
}
