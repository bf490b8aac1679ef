// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::template::Context;

/// One validation failure as reported by a validator.
///
/// Every field, including arbitrary `extra` data, is exposed to the message template.
///
/// # Example
/// ```
/// use message_box::messages::ErrorInfo;
///
/// let error = ErrorInfo::new("items.0.qty", "minNumber")
///     .with_value(0)
///     .with_data("min", 1);
///
/// let context = error.to_context();
/// assert_eq!(context["type"], "minNumber");
/// assert_eq!(context["min"], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Preformatted message that bypasses dictionary lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorInfo {
    pub fn new(name: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            error_type: error_type.into(),
            ..Self::default()
        }
    }

    /// An error not tied to a named field.
    pub fn unnamed(error_type: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The preformatted message, when it is non-empty.
    pub fn custom_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }

    /// Every present field as a render context; absent optional fields are omitted.
    pub fn to_context(&self) -> Context {
        let mut context = self.extra.clone();
        if let Some(name) = &self.name {
            context.insert("name".to_string(), Value::String(name.clone()));
        }
        context.insert("type".to_string(), Value::String(self.error_type.clone()));
        if let Some(value) = &self.value {
            context.insert("value".to_string(), value.clone());
        }
        if let Some(message) = &self.message {
            context.insert("message".to_string(), Value::String(message.clone()));
        }
        context
    }
}
