use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::{AppError, Result};
use crate::services::encoder;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub qr_code_path: String,
    pub url: String,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn generate_qr(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let url = validate_url(req.url.as_deref())?;

    let png = encoder::encode_png(url)?;
    let file_name = state.store.write_artifact(&png).await?;

    // The artifact is on disk; history and pruning are best-effort and must
    // not fail the request.
    if let Err(err) = state.history.append(url).await {
        warn!(%err, "failed to append history entry");
    }
    if let Err(err) = state.store.prune().await {
        warn!(%err, "failed to prune artifact store");
    }

    info!(%url, file = %file_name, "generated qr code");
    Ok(Json(GenerateResponse {
        success: true,
        qr_code_path: format!("/{file_name}"),
        url: url.to_string(),
    }))
}

/// Returns the raw string untouched on success so the response echoes exactly
/// what was submitted, not the normalized form `Url` would print.
fn validate_url(raw: Option<&str>) -> Result<&str> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or(AppError::Validation("URL is required"))?;
    let parsed = Url::parse(raw).map_err(|_| AppError::Validation("Invalid URL format"))?;
    // Absolute URL with an authority; any scheme goes. The frontend is
    // stricter (http/https only), see DESIGN.md.
    if !parsed.has_host() {
        return Err(AppError::Validation("Invalid URL format"));
    }
    Ok(raw)
}
