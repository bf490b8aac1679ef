// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dictionary lookup and message box updates.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// No dictionary exists for the resolved language.
///
/// # Log Level
/// `warn!` - Missing translation, surfaced to the caller as an error
///
/// # Example
/// ```
/// use message_box::observability::messages::lookup::MissingDictionary;
///
/// let msg = MissingDictionary { language: "fr" };
/// assert_eq!(msg.to_string(), "No messages found for language \"fr\"");
/// ```
pub struct MissingDictionary<'a> {
    pub language: &'a str,
}

impl Display for MissingDictionary<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No messages found for language \"{}\"", self.language)
    }
}

impl StructuredLog for MissingDictionary<'_> {
    fn log(&self) {
        tracing::warn!(language = self.language, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "missing_dictionary",
            span_name = name,
            language = self.language,
        )
    }
}

/// No message matched the error, so the generic fallback was rendered.
///
/// # Log Level
/// `debug!` - Degraded output, not a failure
pub struct FallbackMessageUsed<'a> {
    pub field_name: &'a str,
    pub error_type: &'a str,
    pub language: &'a str,
}

impl Display for FallbackMessageUsed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No '{}' message for field '{}' in language '{}', using fallback",
            self.error_type, self.field_name, self.language
        )
    }
}

impl StructuredLog for FallbackMessageUsed<'_> {
    fn log(&self) {
        tracing::debug!(
            field_name = self.field_name,
            error_type = self.error_type,
            language = self.language,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "fallback_message",
            span_name = name,
            field_name = self.field_name,
            error_type = self.error_type,
            language = self.language,
        )
    }
}

/// The error carried its own message, so no lookup happened.
///
/// # Log Level
/// `trace!` - Routine short-circuit
pub struct CustomMessageUsed<'a> {
    pub error_type: &'a str,
}

impl Display for CustomMessageUsed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Using caller-supplied message for '{}' error", self.error_type)
    }
}

impl StructuredLog for CustomMessageUsed<'_> {
    fn log(&self) {
        tracing::trace!(error_type = self.error_type, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("custom_message", span_name = name, error_type = self.error_type)
    }
}

/// Active language changed.
///
/// # Log Level
/// `debug!` - State change
pub struct LanguageChanged<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl Display for LanguageChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Message language changed from '{}' to '{}'", self.from, self.to)
    }
}

impl StructuredLog for LanguageChanged<'_> {
    fn log(&self) {
        tracing::debug!(from = self.from, to = self.to, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("language_changed", span_name = name, from = self.from, to = self.to)
    }
}

/// An empty language was passed to `set_language` and ignored.
///
/// # Log Level
/// `warn!` - Caller error, state unchanged
pub struct EmptyLanguageIgnored<'a> {
    pub current: &'a str,
}

impl Display for EmptyLanguageIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ignoring empty language, keeping '{}'", self.current)
    }
}

impl StructuredLog for EmptyLanguageIgnored<'_> {
    fn log(&self) {
        tracing::warn!(current = self.current, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "empty_language_ignored",
            span_name = name,
            current = self.current,
        )
    }
}

/// Messages merged into an instance dictionary.
///
/// # Log Level
/// `debug!` - State change
pub struct MessagesAdded {
    pub language_count: usize,
}

impl Display for MessagesAdded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Merged messages for {} language(s)", self.language_count)
    }
}

impl StructuredLog for MessagesAdded {
    fn log(&self) {
        tracing::debug!(language_count = self.language_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("messages_added", span_name = name, language_count = self.language_count)
    }
}
