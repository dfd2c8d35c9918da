//! Blog entities as they are stored inside the `posts` and `users` collections.
//!
//! Field names and enum encodings follow the JSON shape existing clients send,
//! so a stored blob can be handed back to them unchanged.

pub mod errors;
pub mod kinds;
pub mod post;
pub mod user;

pub use kinds::{ReactionKind, VoteKind};
pub use post::{Comment, Post, Reactions, Votes};
pub use user::{Action, LoginInput, User};

/// Numeric identifier shared by every entity.
pub type EntityId = i64;

/// An entity that lives in a collection keyed by its `id` field.
pub trait Identified {
    fn id(&self) -> EntityId;
}
