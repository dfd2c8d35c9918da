//! Blog module: the compute step of each endpoint, independent of HTTP.

pub mod errors;
pub mod service;

pub use errors::BlogError;
pub use service::BlogService;
