//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Text Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const CONVERT_PATH: &str = "/api/convert";
pub const HEALTH_PATH: &str = "/health";
/// Overrides `api_base_url` from settings.json
pub const API_URL_ENV: &str = "TEXT_CONVERTER_API_URL";

pub const MAX_CHARS: usize = 500;
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

// User-facing messages
pub const MSG_EMPTY_INPUT: &str = "Please enter text to convert.";
pub const MSG_CONVERTING: &str = "Converting…";
pub const MSG_ERROR_PREFIX: &str = "An error occurred: ";
pub const MSG_UNKNOWN_SERVER_ERROR: &str = "An unknown error occurred.";
pub const MSG_COPIED: &str = "Copied to clipboard.";
pub const MSG_NOTHING_TO_COPY: &str = "Nothing to copy.";
pub const MSG_COPY_FAILED: &str = "Failed to copy to clipboard.";
pub const MSG_PLACEHOLDER: &str = "The converted text will appear here.";

/// Built-in target options as (value, label), used when settings carry none
pub const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("boss", "To my boss"),
    ("colleague", "To a colleague"),
    ("customer", "To a customer"),
];
pub const DEFAULT_TARGET: &str = "boss";
