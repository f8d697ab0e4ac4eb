use crate::services::history::HistoryLog;
use crate::services::store::RetentionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RetentionStore>,
    pub history: Arc<HistoryLog>,
}
