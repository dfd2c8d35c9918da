use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Vote a user cast on a post. Encoded as its ordinal (`0` up, `1` down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VoteKind {
    Upvote,
    Downvote,
}

impl TryFrom<u8> for VoteKind {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VoteKind::Upvote),
            1 => Ok(VoteKind::Downvote),
            value => Err(ModelError::UnknownOrdinal { kind: "vote", value }),
        }
    }
}

impl From<VoteKind> for u8 {
    fn from(kind: VoteKind) -> u8 {
        match kind {
            VoteKind::Upvote => 0,
            VoteKind::Downvote => 1,
        }
    }
}

/// Reaction a user left on a post. Encoded as its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReactionKind {
    Laugh,
    Love,
    Angry,
    Sad,
}

impl TryFrom<u8> for ReactionKind {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ReactionKind::Laugh),
            1 => Ok(ReactionKind::Love),
            2 => Ok(ReactionKind::Angry),
            3 => Ok(ReactionKind::Sad),
            value => Err(ModelError::UnknownOrdinal { kind: "reaction", value }),
        }
    }
}

impl From<ReactionKind> for u8 {
    fn from(kind: ReactionKind) -> u8 {
        match kind {
            ReactionKind::Laugh => 0,
            ReactionKind::Love => 1,
            ReactionKind::Angry => 2,
            ReactionKind::Sad => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_wire_values() {
        assert_eq!(serde_json::to_string(&VoteKind::Downvote).unwrap(), "1");
        assert_eq!(serde_json::to_string(&ReactionKind::Sad).unwrap(), "3");
        assert_eq!(serde_json::from_str::<ReactionKind>("1").unwrap(), ReactionKind::Love);
    }

    #[test]
    fn out_of_range_ordinal_rejected() {
        let err = serde_json::from_str::<VoteKind>("2").unwrap_err();
        assert!(err.to_string().contains("unknown vote ordinal: 2"));
        assert_eq!(
            ReactionKind::try_from(9),
            Err(ModelError::UnknownOrdinal { kind: "reaction", value: 9 })
        );
    }
}
