// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for process-wide registry events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Registry defaults applied.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use message_box::observability::messages::registry::DefaultsApplied;
///
/// let msg = DefaultsApplied {
///     language: Some("es-ES"),
///     delimiters_updated: 1,
///     languages_merged: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DefaultsApplied<'a> {
    pub language: Option<&'a str>,
    pub delimiters_updated: usize,
    pub languages_merged: usize,
}

impl Display for DefaultsApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Applied message defaults: language={}, {} delimiter(s) updated, {} language(s) merged",
            self.language.unwrap_or("unchanged"),
            self.delimiters_updated,
            self.languages_merged
        )
    }
}

impl StructuredLog for DefaultsApplied<'_> {
    fn log(&self) {
        tracing::info!(
            language = self.language,
            delimiters_updated = self.delimiters_updated,
            languages_merged = self.languages_merged,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "defaults_applied",
            span_name = name,
            language = self.language,
            delimiters_updated = self.delimiters_updated,
            languages_merged = self.languages_merged,
        )
    }
}

/// A delimiter pattern passed to the registry was ignored.
///
/// # Log Level
/// `warn!` - Configuration ignored
pub struct DelimiterRejected<'a> {
    pub kind: &'a str,
    pub pattern: &'a str,
    pub reason: &'a str,
}

impl Display for DelimiterRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ignoring {} delimiter '{}': {}",
            self.kind, self.pattern, self.reason
        )
    }
}

impl StructuredLog for DelimiterRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            kind = self.kind,
            pattern = self.pattern,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "delimiter_rejected",
            span_name = name,
            kind = self.kind,
            pattern = self.pattern,
        )
    }
}

/// Registry state cleared.
///
/// # Log Level
/// `debug!` - Test isolation and host resets
pub struct RegistryReset;

impl Display for RegistryReset {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Message registry reset")
    }
}

impl StructuredLog for RegistryReset {
    fn log(&self) {
        tracing::debug!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("registry_reset", span_name = name)
    }
}
