use parking_lot::RwLock;
use std::sync::Arc;
use voyago_core::Store;

/// Shared handler state. The store sits behind one lock so every core
/// operation runs as a single read-modify-write critical section; handlers
/// must not hold the guard across an await point.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
