//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/convert`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertRequest {
    pub text: String,
    pub target: String,
}

/// Success body from `POST /api/convert`
#[derive(Deserialize)]
pub struct ConvertResponse {
    pub converted_text: String,
}

/// Failure body from the API
#[derive(Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /health`
#[derive(Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// One selectable conversion target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOption {
    /// Sent to the API as `target`
    pub value: String,
    /// Shown next to the option
    pub label: String,
}

impl TargetOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Styling state of a target option label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Active,
    Inactive,
}

/// What the result pane currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPane {
    Placeholder,
    Loading,
    Success(String),
    Error(String),
}

impl ResultPane {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ResultPane::Placeholder)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultPane::Error(_))
    }

    /// Text a copy action would place on the clipboard, if any
    pub fn copyable_text(&self) -> Option<&str> {
        match self {
            ResultPane::Success(text) | ResultPane::Error(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Outcome of the start-up health probe
#[derive(Debug, Clone, PartialEq)]
pub enum ApiStatus {
    Unknown,
    Online,
    Offline(String),
}
