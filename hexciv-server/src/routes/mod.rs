//! HTTP route handlers

pub mod civs;
pub mod focus;
pub mod hex;
pub mod map;
pub mod path;
pub mod save;
pub mod status;
pub mod turn;

use hexciv_core::CoreError;
use serde_json::{json, Value};

/// Failure body shared by the command endpoints
pub(crate) fn error_body(err: &CoreError) -> Value {
    json!({
        "success": false,
        "error": err.to_string(),
    })
}
