//! Treasury DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Held funds in base units
    pub balance: String,
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WithdrawResponse {
    /// Amount released to the owner, in base units
    pub released: String,
    pub recipient: Uuid,
}
