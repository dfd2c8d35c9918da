//! Service layer for the blog backend.
//! - `storage`: the key-value store adapter and its backends.
//! - `repository`: whole-collection read-modify-write over one store key.
//! - `blog`: the per-endpoint operations built on the repository.

pub mod errors;
pub mod storage;
pub mod repository;
pub mod blog;

pub use blog::{BlogError, BlogService};
pub use errors::ServiceError;
