//! Toast notifications delivered through the `HX-Trigger` response header.
//!
//! The browser-side script listens for a `triggerToast` event whose detail is
//! `{ "variant": ..., "message": ... }`.

use actix_web::http::header::HeaderValue;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub variant: ToastVariant,
    pub message: String,
}

impl Toast {
    fn new(variant: ToastVariant, message: impl Into<String>) -> Self {
        Self {
            variant,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, message)
    }

    /// The `{"triggerToast": {...}}` event body.
    pub fn to_event_json(&self) -> String {
        json!({ "triggerToast": self }).to_string()
    }

    /// Value for the `HX-Trigger` header, `None` if the message cannot be
    /// carried in a header.
    pub fn header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.to_event_json()).ok()
    }
}
