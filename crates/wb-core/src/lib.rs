//! Core types for Wegbuch: registries, player state, and the save codec.
//!
//! Everything here is plain data: the item/skill/codeword registries, the
//! mutable [`PlayerState`] record with its invariant-enforcing mutators, and
//! the [`SaveRecord`] codec that turns a state into a durable key-value
//! record and back. No I/O happens in this crate beyond serde.

/// Codeword registry.
pub mod codeword;
/// Error types for the save codec.
pub mod error;
/// Stable story node identifiers.
pub mod id;
/// Item registry.
pub mod item;
/// The mutable per-session character record.
pub mod player;
/// Save record serialization.
pub mod save;
/// Skill registry.
pub mod skill;
/// Clamped numeric gauge used for the life total.
pub mod track;

pub use codeword::Codeword;
pub use error::SaveError;
pub use id::NodeId;
pub use item::ItemKind;
pub use player::PlayerState;
pub use save::SaveRecord;
pub use skill::SkillKind;
pub use track::Track;
