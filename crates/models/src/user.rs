use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::kinds::{ReactionKind, VoteKind};
use crate::{EntityId, Identified};

/// One entry of a user's interaction history with a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "postId")]
    pub post_id: EntityId,
    #[serde(default)]
    pub action: Option<VoteKind>,
    #[serde(default)]
    pub reaction: Option<ReactionKind>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stored user record. The password is kept and compared in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub password: String,
    pub fullname: String,
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Fields this crate does not model, kept so they round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Identified for User {
    fn id(&self) -> EntityId { self.id }
}

/// Body of a login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}
