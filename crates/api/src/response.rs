//! Shared response envelope types for API handlers.
//!
//! Collections and created ids use a `{ "data": ... }` envelope.

use filmlib_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: DbId,
}
