// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{Delimiter, Registry};
use crate::messages::MessageList;
use crate::reactive::ReactiveProvider;
use crate::template::{Context, TemplateEngine};

/// Construction options for a [`MessageBox`](crate::MessageBox).
///
/// # Fields
/// * `language` - Initial language; falls back to the registry default, then `"en"`
/// * `messages` - Instance dictionary, taken as-is
/// * `interpolate` / `evaluate` / `escape` - Delimiter overrides; unset classes fall
///   back to the registry default, then the built-in default
/// * `reactive_provider` - Source of the dependency handle for language tracking
/// * `registry` - Registry to read defaults from; the global registry when unset
/// * `template_engine` - Compiler for string templates; [`DelimitedTemplateEngine`]
///   when unset
///
/// [`DelimitedTemplateEngine`]: crate::template::DelimitedTemplateEngine
#[derive(Clone, Default)]
pub struct MessageBoxOptions {
    pub language: Option<String>,
    pub messages: Option<MessageList>,
    pub interpolate: Option<Delimiter>,
    pub evaluate: Option<Delimiter>,
    pub escape: Option<Delimiter>,
    pub reactive_provider: Option<Arc<dyn ReactiveProvider>>,
    pub registry: Option<Arc<Registry>>,
    pub template_engine: Option<Arc<dyn TemplateEngine>>,
}

impl MessageBoxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_messages(mut self, messages: MessageList) -> Self {
        self.messages = Some(messages);
        self
    }

    pub fn with_interpolate(mut self, delimiter: Delimiter) -> Self {
        self.interpolate = Some(delimiter);
        self
    }

    pub fn with_evaluate(mut self, delimiter: Delimiter) -> Self {
        self.evaluate = Some(delimiter);
        self
    }

    pub fn with_escape(mut self, delimiter: Delimiter) -> Self {
        self.escape = Some(delimiter);
        self
    }

    pub fn with_reactive_provider(mut self, provider: Arc<dyn ReactiveProvider>) -> Self {
        self.reactive_provider = Some(provider);
        self
    }

    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_template_engine(mut self, engine: Arc<dyn TemplateEngine>) -> Self {
        self.template_engine = Some(engine);
        self
    }
}

/// Per-call options for [`MessageBox::message`](crate::MessageBox::message).
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    /// Extra render data; error fields override it.
    pub context: Option<Context>,
    /// Point lookup in this language instead of the active one. Not tracked reactively.
    pub language: Option<String>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
