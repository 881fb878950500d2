//! Ledger ownership handlers

use axum::{extract::State, Extension, Json};

use core_kernel::AccountId;

use crate::dto::ledger::{OwnerResponse, TransferOwnershipRequest};
use crate::error::ApiError;
use crate::AppState;

/// Returns the current owner identity
pub async fn get_owner(State(state): State<AppState>) -> Json<OwnerResponse> {
    Json(OwnerResponse {
        owner: *state.service.owner().as_uuid(),
    })
}

/// Hands ownership to another account; owner-gated in the domain
pub async fn transfer_ownership(
    State(state): State<AppState>,
    Extension(caller): Extension<AccountId>,
    Json(request): Json<TransferOwnershipRequest>,
) -> Result<Json<OwnerResponse>, ApiError> {
    state
        .service
        .transfer_ownership(AccountId::from_uuid(request.new_owner), caller)?;

    Ok(Json(OwnerResponse {
        owner: request.new_owner,
    }))
}
