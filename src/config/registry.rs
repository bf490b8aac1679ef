// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process-wide message defaults.
//!
//! A [`Registry`] holds the default language, default delimiters and a shared
//! [`MessageList`] consulted by every message box that points at it. The global
//! registry is created empty on first use and only changes through
//! [`Registry::set_defaults`] (or [`Registry::reset`], for test isolation). Hosts
//! that avoid ambient statics build their own registry with [`Registry::new`] and
//! hand it to each message box.
//!
//! # Concurrency
//! State sits behind a `parking_lot::RwLock`: any number of readers, writes serialized.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::config::delimiters::{Delimiter, Delimiters};
use crate::errors::Result;
use crate::messages::{merge, LanguageMessages, MessageList};
use crate::observability::messages::registry::{DefaultsApplied, DelimiterRejected, RegistryReset};
use crate::observability::messages::StructuredLog;

static GLOBAL_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

/// Arguments to [`Registry::set_defaults`].
///
/// Delimiters are raw pattern strings; a pattern that does not compile, or lacks a
/// capture group, is logged and ignored rather than failing the call. Every field is
/// optional, so defaults can be declared in YAML:
///
/// ```yaml
/// language: es-ES
/// escape: "\\[\\[(.+?)\\]\\]"
/// messages:
///   es-ES:
///     required: "{{name}} es obligatorio"
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryDefaults {
    pub language: Option<String>,
    pub interpolate: Option<String>,
    pub evaluate: Option<String>,
    pub escape: Option<String>,
    pub messages: Option<MessageList>,
}

impl RegistryDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse defaults from YAML the host already holds in memory.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_interpolate(mut self, pattern: impl Into<String>) -> Self {
        self.interpolate = Some(pattern.into());
        self
    }

    pub fn with_evaluate(mut self, pattern: impl Into<String>) -> Self {
        self.evaluate = Some(pattern.into());
        self
    }

    pub fn with_escape(mut self, pattern: impl Into<String>) -> Self {
        self.escape = Some(pattern.into());
        self
    }

    pub fn with_messages(mut self, messages: MessageList) -> Self {
        self.messages = Some(messages);
        self
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    language: Option<String>,
    delimiters: Delimiters,
    messages: MessageList,
}

/// Shared defaults for message boxes.
#[derive(Debug, Default)]
pub struct Registry {
    state: RwLock<RegistryState>,
}

impl Registry {
    /// An empty registry, independent of the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created empty on first use.
    pub fn global() -> Arc<Registry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Apply defaults.
    ///
    /// * `language` replaces the default language when it is a non-empty string.
    /// * each delimiter replaces its default when the pattern is valid.
    /// * `messages` is deep-merged into the shared dictionary.
    ///
    /// # Example
    /// ```
    /// use message_box::config::{Registry, RegistryDefaults};
    /// use message_box::messages::{LanguageMessages, MessageList};
    ///
    /// let registry = Registry::new();
    /// registry.set_defaults(
    ///     RegistryDefaults::new()
    ///         .with_language("es-ES")
    ///         .with_escape("(no closing paren")
    ///         .with_messages(MessageList::new().with_language(
    ///             "es-ES",
    ///             LanguageMessages::new().with_template("required", "Es requerido"),
    ///         )),
    /// );
    ///
    /// assert_eq!(registry.default_language().as_deref(), Some("es-ES"));
    /// assert_eq!(registry.default_delimiters().escape, None);
    /// assert!(registry.messages_for("es-ES").is_some());
    /// ```
    pub fn set_defaults(&self, defaults: RegistryDefaults) {
        let RegistryDefaults {
            language,
            interpolate,
            evaluate,
            escape,
            messages,
        } = defaults;

        let interpolate = accept_pattern("interpolate", interpolate);
        let evaluate = accept_pattern("evaluate", evaluate);
        let escape = accept_pattern("escape", escape);
        let delimiters_updated = [&interpolate, &evaluate, &escape]
            .iter()
            .filter(|d| d.is_some())
            .count();
        let language = language.filter(|language| !language.is_empty());
        let applied = DefaultsApplied {
            language: language.as_deref(),
            delimiters_updated,
            languages_merged: messages.as_ref().map_or(0, MessageList::len),
        };

        let span = applied.span("set_defaults");
        let _guard = span.enter();

        let mut state = self.state.write();

        if let Some(language) = &language {
            state.language = Some(language.clone());
        }
        if interpolate.is_some() {
            state.delimiters.interpolate = interpolate;
        }
        if evaluate.is_some() {
            state.delimiters.evaluate = evaluate;
        }
        if escape.is_some() {
            state.delimiters.escape = escape;
        }
        if let Some(messages) = &messages {
            merge(&mut state.messages, &[messages]);
        }
        drop(state);

        applied.log();
    }

    pub fn default_language(&self) -> Option<String> {
        self.state.read().language.clone()
    }

    /// Registry delimiters; a `None` class has no registry default.
    pub fn default_delimiters(&self) -> Delimiters {
        self.state.read().delimiters.clone()
    }

    /// The shared dictionary for one language, without copying it.
    pub fn messages_for(&self, language: &str) -> Option<Arc<LanguageMessages>> {
        self.state.read().messages.get(language).cloned()
    }

    /// Snapshot of the whole shared dictionary.
    pub fn messages(&self) -> MessageList {
        self.state.read().messages.clone()
    }

    /// Clear every default. Entries never expire on their own.
    pub fn reset(&self) {
        *self.state.write() = RegistryState::default();
        RegistryReset.log();
    }
}

fn accept_pattern(kind: &str, pattern: Option<String>) -> Option<Delimiter> {
    let pattern = pattern?;
    match Delimiter::new(&pattern) {
        Ok(delimiter) => Some(delimiter),
        Err(error) => {
            DelimiterRejected {
                kind,
                pattern: &pattern,
                reason: &error.to_string(),
            }
            .log();
            None
        }
    }
}
