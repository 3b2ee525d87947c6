//! Axum route handlers for registration and login.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::auth::store::{authenticate, register};
use crate::errors::AppError;
use crate::state::AppState;

/// Request body for both auth endpoints. Fields are optional so a missing
/// field maps to the service's own 400 response instead of an extractor
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn require(&self) -> Result<(&str, &str), AppError> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(AppError::InvalidInput),
        }
    }
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (email, password) = req.require()?;

    register(state.store.as_ref(), email, password)
        .await
        .inspect_err(|e| warn!("Registration failed for {email}: {e}"))?;

    info!("Registered user {email}");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registered successfully" })),
    ))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<Value>, AppError> {
    let (email, password) = req.require()?;

    authenticate(state.store.as_ref(), email, password)
        .await
        .inspect_err(|e| warn!("Login failed for {email}: {e}"))?;

    info!("Login successful for {email}");
    Ok(Json(json!({
        "message": "Login successful",
        "redirect": "/roadmap"
    })))
}
