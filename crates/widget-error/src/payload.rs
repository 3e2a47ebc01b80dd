//! Client-facing view of a [`WidgetError`].
//!
//! The payload is what an HTTP boundary returns as an error body. It carries
//! only the status, the tag, the user message and a timestamp; the internal
//! message, extra arguments and trace stay on the operator side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{WidgetError, severity::reason_phrase};

/// Timestamp layout shared by payloads and diagnostic reports.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

pub(crate) fn format_time(time: DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub code: u16,
    pub exception_type: String,
    pub message: String,
    pub time_utc: String,
}

impl Payload {
    /// Payload stamped with an explicit time.
    pub fn at(error: &WidgetError, time: DateTime<Utc>) -> Self {
        let status = error.severity();
        Self {
            code: status.as_u16(),
            exception_type: error.kind().name().to_string(),
            message: format!("{}: {}", reason_phrase(status), error.user_message()),
            time_utc: format_time(time),
        }
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Pretty JSON text (for logs or UI).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl WidgetError {
    /// Client payload stamped with the current UTC time.
    pub fn to_payload(&self) -> Payload {
        Payload::at(self, Utc::now())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        self.to_payload().to_json()
    }
}
