use serde::Serialize;

/// Response for account deletion
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
