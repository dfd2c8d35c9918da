use std::sync::Arc;

use service::storage::KvStore;
use service::BlogService;

/// Shared handler state. The store is injected here and nowhere else.
#[derive(Clone)]
pub struct ServerState {
    pub blog: BlogService,
}

impl ServerState {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { blog: BlogService::new(store) }
    }
}
