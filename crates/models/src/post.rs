use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{EntityId, Identified};

/// Per-reaction counters, keyed on the wire by the reaction ordinal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(rename = "0", default)]
    pub laugh: u64,
    #[serde(rename = "1", default)]
    pub love: u64,
    #[serde(rename = "2", default)]
    pub angry: u64,
    #[serde(rename = "3", default)]
    pub sad: u64,
}

/// Per-vote counters, keyed on the wire by the vote ordinal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    #[serde(rename = "0", default)]
    pub upvote: u64,
    #[serde(rename = "1", default)]
    pub downvote: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    pub username: String,
    #[serde(rename = "postId")]
    pub post_id: EntityId,
    pub comment: String,
    pub date: String,
    /// Fields this crate does not model, kept so they round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub username: String,
    pub title: String,
    pub content: String,
    pub date: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default)]
    pub actions: Votes,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Append a comment at the end of the thread; display order is insertion order.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl Identified for Post {
    fn id(&self) -> EntityId { self.id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_client_document() -> anyhow::Result<()> {
        let post: Post = serde_json::from_value(json!({
            "id": 1700000000000i64,
            "username": "ana",
            "title": "Hello",
            "content": "First!",
            "date": "2024-01-01T00:00:00.000Z",
            "comments": [{
                "id": 1, "username": "bo", "postId": 1700000000000i64,
                "comment": "hi", "date": "2024-01-02T00:00:00.000Z"
            }],
            "reactions": {"0": 1, "1": 2, "2": 0, "3": 4},
            "actions": {"0": 5, "1": 1}
        }))?;
        assert_eq!(post.comments[0].post_id, post.id);
        assert_eq!(post.reactions, Reactions { laugh: 1, love: 2, angry: 0, sad: 4 });
        assert_eq!(post.actions.upvote, 5);
        Ok(())
    }

    #[test]
    fn encodes_counters_with_ordinal_keys() -> anyhow::Result<()> {
        let value = serde_json::to_value(Votes { upvote: 3, downvote: 0 })?;
        assert_eq!(value, json!({"0": 3, "1": 0}));
        Ok(())
    }

    #[test]
    fn missing_thread_and_counters_default_to_empty() -> anyhow::Result<()> {
        let post: Post = serde_json::from_value(json!({
            "id": 2, "username": "ana", "title": "t", "content": "c", "date": "d"
        }))?;
        assert!(post.comments.is_empty());
        assert_eq!(post.reactions, Reactions::default());
        Ok(())
    }

    #[test]
    fn unknown_fields_round_trip_in_place() -> anyhow::Result<()> {
        let raw = r#"{"id":1,"username":"ana","title":"t","content":"c","date":"d","comments":[{"id":2,"username":"bo","postId":1,"comment":"hi","date":"d","edited":false}],"reactions":{"0":0,"1":0,"2":0,"3":0},"actions":{"0":0,"1":0},"tags":["rust"],"cover":"a.png"}"#;
        let post: Post = serde_json::from_str(raw)?;
        assert_eq!(post.extra["tags"], json!(["rust"]));
        assert_eq!(post.comments[0].extra["edited"], json!(false));
        assert_eq!(serde_json::to_string(&post)?, raw);
        Ok(())
    }

    #[test]
    fn negative_counter_rejected() {
        let res = serde_json::from_value::<Votes>(json!({"0": -1, "1": 0}));
        assert!(res.is_err());
    }
}
