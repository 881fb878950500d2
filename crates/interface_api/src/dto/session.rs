//! Session DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// The account identity to connect as
    pub account_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub account_id: Uuid,
    pub expires_in_secs: u64,
}
