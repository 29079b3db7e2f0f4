//! Touch input status handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use touch_core::{
    SetTouchRequest, SetTouchResponse, TouchAction, TouchStatus, DISABLE_TOUCH_INPUT,
};

use crate::error::ApiError;
use crate::state::AppState;

const MISSING_FIELD: &str = "Must provide 'disable' or 'enable' parameter";

/// Parse the set request body.
///
/// The body must be a JSON object; the Content-Type header is not checked.
/// A field that is present must be a boolean, `null` included, so `enable`
/// is never used while `disable` is in the body.
fn parse_set_request(body: &[u8]) -> Result<SetTouchRequest, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let Some(object) = value.as_object() else {
        return Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    for field in ["disable", "enable"] {
        if object.get(field).is_some_and(Value::is_null) {
            return Err(ApiError::BadRequest(format!(
                "'{}' must be a boolean, got null",
                field
            )));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request: {}", e)))
}

/// GET /touch/status
/// Report whether touch input is currently disabled
pub async fn get_touch_status(
    State(state): State<AppState>,
) -> Result<Json<TouchStatus>, ApiError> {
    let disabled = state
        .store()
        .get_bool(DISABLE_TOUCH_INPUT)
        .await
        .map_err(ApiError::StoreRead)?;

    Ok(Json(TouchStatus::from_disabled(disabled)))
}

/// POST /touch/set
/// Enable or disable touch input.
///
/// `{"disable": v}` stores `v`; `{"enable": v}` stores `!v`. If both are
/// present `disable` is used. The response reports the value read back from
/// the store after the write.
pub async fn set_touch_status(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SetTouchResponse>, ApiError> {
    let request = parse_set_request(&body)?;

    let disabled = request
        .target_disabled()
        .ok_or_else(|| ApiError::BadRequest(MISSING_FIELD.to_string()))?;

    let store = state.store();
    store
        .put_bool(DISABLE_TOUCH_INPUT, disabled)
        .await
        .map_err(ApiError::StoreWrite)?;

    let stored = store
        .get_bool(DISABLE_TOUCH_INPUT)
        .await
        .map_err(ApiError::StoreWrite)?;

    let action = TouchAction::from_disabled(disabled);
    tracing::info!(%action, touch_disabled = stored, store = store.name(), "Touch input updated");

    Ok(Json(SetTouchResponse::new(action, stored)))
}
