//! Story graph, choice resolution, and the session loop for Wegbuch.
//!
//! The engine is a state machine over immutable story nodes: transitions are
//! gated by typed predicates over the mutable [`wb_core::PlayerState`], side
//! effects apply atomically per transition, and forced sub-interactions
//! (drop, steal, eat, donate, gift, trade, skill loss) are woven into the
//! visit loop to keep the state invariants holding. Everything a player sees
//! or presses goes through the [`StoryUi`] port; the engine never renders.

/// Choices: the gated edges of the story graph.
pub mod choice;
/// Error taxonomy and denial reasons.
pub mod error;
/// The node registry and graph navigator.
pub mod graph;
/// Story nodes and their hooks.
pub mod node;
/// Choice resolution: the state machine core.
pub mod resolver;
/// The session controller's node-visit loop.
pub mod session;
/// The presentation port the engine drives.
pub mod ui;

pub use choice::{Choice, ChoiceKind};
pub use error::{Denial, EngineError, EngineResult};
pub use graph::{Navigator, StoryGraph};
pub use node::{LosePool, NodeKind, StoryNode, TakePool, Trade};
pub use resolver::{Resolution, resolve};
pub use session::{Session, SessionConfig, SessionEnd};
pub use ui::{Selection, Severity, StoryUi};
