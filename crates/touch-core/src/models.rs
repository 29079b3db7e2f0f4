//! JSON wire models for the touch control API

use std::fmt;

use serde::{Deserialize, Serialize};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "touch_control";

/// Health check payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Current touch input state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchStatus {
    pub success: bool,
    pub touch_disabled: bool,
    pub touch_enabled: bool,
}

impl TouchStatus {
    /// Build from the stored `DisableTouchInput` value
    pub fn from_disabled(touch_disabled: bool) -> Self {
        Self {
            success: true,
            touch_disabled,
            touch_enabled: !touch_disabled,
        }
    }
}

/// Body of `POST /touch/set`
///
/// Exactly one field is expected. When both are present `disable` wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTouchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
}

impl SetTouchRequest {
    pub fn disable(value: bool) -> Self {
        Self {
            disable: Some(value),
            enable: None,
        }
    }

    pub fn enable(value: bool) -> Self {
        Self {
            disable: None,
            enable: Some(value),
        }
    }

    /// Value to store under `DisableTouchInput`, or `None` if the request
    /// carries neither field.
    pub fn target_disabled(&self) -> Option<bool> {
        match (self.disable, self.enable) {
            (Some(disable), _) => Some(disable),
            (None, Some(enable)) => Some(!enable),
            (None, None) => None,
        }
    }
}

/// What a successful set did, as reported in the response message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchAction {
    Enabled,
    Disabled,
}

impl TouchAction {
    pub fn from_disabled(disabled: bool) -> Self {
        if disabled {
            TouchAction::Disabled
        } else {
            TouchAction::Enabled
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TouchAction::Enabled => "enabled",
            TouchAction::Disabled => "disabled",
        }
    }

    /// Human-readable message, e.g. "Touch input disabled"
    pub fn message(&self) -> String {
        format!("Touch input {}", self)
    }
}

impl fmt::Display for TouchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of a successful `POST /touch/set`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTouchResponse {
    pub success: bool,
    pub message: String,
    pub touch_disabled: bool,
}

impl SetTouchResponse {
    pub fn new(action: TouchAction, touch_disabled: bool) -> Self {
        Self {
            success: true,
            message: action.message(),
            touch_disabled,
        }
    }
}

/// Error body returned by every failing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
