//! Session handlers

use axum::{extract::State, Json};

use core_kernel::AccountId;

use crate::dto::session::{CreateSessionRequest, SessionResponse};
use crate::error::ApiError;
use crate::AppState;

/// Mints a session token for an account identity
///
/// This is the connected-account abstraction: the token only asserts who
/// is calling; whether that caller may do anything privileged is decided
/// by the domain's owner gate.
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let account_id = AccountId::from_uuid(request.account_id);
    let token = crate::auth::create_token(
        account_id,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(SessionResponse {
        token,
        account_id: request.account_id,
        expires_in_secs: state.config.jwt_expiration_secs,
    }))
}
