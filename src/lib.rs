pub mod config;
pub mod telemetry;
pub mod state;
pub mod error;
pub mod domain { pub mod artifact; }
pub mod services { pub mod encoder; pub mod history; pub mod store; }
pub mod web { pub mod router; pub mod handlers; }

use anyhow::Context;
use std::sync::Arc;

use crate::domain::artifact::KEEP_ARTIFACTS;
use crate::services::{history::HistoryLog, store::RetentionStore};
use crate::state::AppState;

pub async fn build_app(cfg: crate::config::Config) -> anyhow::Result<(axum::Router, u16)> {
    tokio::fs::create_dir_all(&cfg.public_dir)
        .await
        .with_context(|| format!("create public dir {}", cfg.public_dir.display()))?;

    let store = RetentionStore::new(&cfg.public_dir, KEEP_ARTIFACTS);
    let history = HistoryLog::new(&cfg.history_file);

    let state = AppState {
        store: Arc::new(store),
        history: Arc::new(history),
    };

    Ok((crate::web::router::build_router(state), cfg.port))
}
