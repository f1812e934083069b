use std::sync::Arc;

use crate::database::activity_store::ActivityStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ActivityStore>,
}

impl AppState {
    pub fn new(store: ActivityStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
