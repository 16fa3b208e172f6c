//! Status payloads returned by mutation endpoints.
//!
//! Reads return rows (or arrays of rows) directly. Writes answer with a small
//! `{ "id": ..., "message": ... }` object; the messages are part of the
//! contract with the bundled HTML client.

use pathfinder_core::types::DbId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Row the mutation touched. Omitted for deletes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn with_id(id: DbId, message: &'static str) -> Self {
        Self {
            id: Some(id),
            message,
        }
    }

    pub fn message(message: &'static str) -> Self {
        Self { id: None, message }
    }
}
