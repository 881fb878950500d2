//! Treasury handlers

use axum::{extract::State, Extension, Json};

use core_kernel::AccountId;

use crate::dto::treasury::{BalanceResponse, WithdrawResponse};
use crate::error::ApiError;
use crate::AppState;

/// Returns the custodial balance
pub async fn get_balance(State(state): State<AppState>) -> Json<BalanceResponse> {
    let balance = state.service.balance();
    Json(BalanceResponse {
        balance: balance.base_units().to_string(),
        currency: balance.currency().to_string(),
    })
}

/// Releases the entire balance to the owner; owner-gated in the domain
pub async fn withdraw(
    State(state): State<AppState>,
    Extension(caller): Extension<AccountId>,
) -> Result<Json<WithdrawResponse>, ApiError> {
    let released = state.service.withdraw(caller)?;

    Ok(Json(WithdrawResponse {
        released: released.base_units().to_string(),
        recipient: *caller.as_uuid(),
    }))
}
