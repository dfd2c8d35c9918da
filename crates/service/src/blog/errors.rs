use thiserror::Error;

use crate::errors::ServiceError;

/// Business outcomes of blog operations that are not a success.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("{0} already Exists")]
    UsernameTaken(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_response_bodies() {
        assert_eq!(BlogError::UsernameTaken("ana".into()).to_string(), "ana already Exists");
        assert_eq!(BlogError::InvalidCredentials.to_string(), "Invalid credentials");
        let store = BlogError::from(ServiceError::Store("down".into()));
        assert_eq!(store.to_string(), "store error: down");
    }
}
