use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::portfolio::{Portfolio, PortfolioData};

use super::contact::ContactRequest;
use super::error::ApiError;
use super::state::AppState;

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn get_portfolio_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Portfolio>, ApiError> {
    state.store.get().await.map(Json).ok_or(ApiError::NotFound)
}

/// Replace the document. A rejected body leaves the stored one untouched.
pub async fn put_portfolio_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Portfolio>, ApiError> {
    let data = PortfolioData::from_json(&body).map_err(|e| {
        warn!("Rejected portfolio update: {e}");
        ApiError::InvalidPortfolio
    })?;

    let portfolio = state.store.update(data).await;
    info!(id = %portfolio.id, "Portfolio updated");
    Ok(Json(portfolio))
}

pub async fn contact_handler(body: Bytes) -> Result<Json<Value>, ApiError> {
    let request: ContactRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::MalformedPayload)?;
    let submission = request.validate()?;

    info!(
        received_at = %Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        name = %submission.name,
        email = %submission.email,
        project_type = submission.project_type.as_deref().unwrap_or("-"),
        message = %submission.message,
        "Contact form submission"
    );

    Ok(Json(json!({ "message": "Message sent successfully!" })))
}
