// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Localized validation messages.
//!
//! A [`MessageBox`] turns an [`ErrorInfo`] into a human-readable string:
//!
//! 1. A non-empty `message` on the error is returned as-is.
//! 2. The field name is made generic (`items.3.qty` becomes `items.$.qty`).
//! 3. The registry and instance dictionaries for the language are merged, the
//!    instance winning conflicts. A language neither side knows is an error.
//! 4. The entry for the error type is selected, per field when it is a field map.
//! 5. String templates are compiled with the instance delimiters and rendered with
//!    `genericName`, the caller context and the error fields, later sources winning.
//!
//! Anything missing along the way yields `"<field> is invalid"` instead of failing.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use message_box::{
//!     ErrorInfo, FieldMessages, LanguageMessages, MessageBox, MessageBoxOptions,
//!     MessageList, MessageOptions, Registry,
//! };
//!
//! let messages = MessageList::new()
//!     .with_language("en", LanguageMessages::new()
//!         .with_template("required", "{{name}} is required")
//!         .with_fields("minNumber", FieldMessages::new()
//!             .with_default("Too small")
//!             .with_field("items.$.qty", "Order at least {{min}}")))
//!     .with_language("es-ES", LanguageMessages::new()
//!         .with_template("required", "{{name}} es obligatorio"));
//!
//! let mut message_box = MessageBox::new(
//!     MessageBoxOptions::new()
//!         .with_messages(messages)
//!         .with_registry(Arc::new(Registry::new())),
//! );
//! let options = MessageOptions::new();
//!
//! let qty = ErrorInfo::new("items.2.qty", "minNumber").with_data("min", 1);
//! assert_eq!(message_box.message(&qty, &options).unwrap(), "Order at least 1");
//!
//! message_box.set_language("es-ES");
//! let email = ErrorInfo::new("email", "required");
//! assert_eq!(message_box.message(&email, &options).unwrap(), "email es obligatorio");
//! ```

mod options;


use std::sync::Arc;

use serde_json::Value;

use crate::config::consts::{DEFAULT_LANGUAGE, UNNAMED_FIELD};
use crate::config::{Delimiters, Registry, RegistryDefaults};
use crate::errors::{MessageBoxError, Result};
use crate::messages::{self, merge, ErrorInfo, LanguageMessages, Message, MessageList};
use crate::observability::messages::lookup::{
    CustomMessageUsed, EmptyLanguageIgnored, FallbackMessageUsed, LanguageChanged, MessagesAdded,
    MissingDictionary,
};
use crate::observability::messages::StructuredLog;
use crate::reactive::{Dependency, ReactiveProvider};
use crate::template::{Context, DelimitedTemplateEngine, MessageFn, TemplateEngine};

pub use options::{MessageBoxOptions, MessageOptions};

/// The dictionary a lookup resolved to, and the language it was resolved for.
#[derive(Debug, Clone)]
pub struct ResolvedMessages {
    pub messages: Arc<LanguageMessages>,
    pub language: String,
}

/// Resolves validation errors into localized messages.
///
/// Cloning produces an independent instance: same language, delimiters, registry,
/// template engine and reactive provider, with a private copy of the instance
/// dictionary and its own dependency handle.
pub struct MessageBox {
    language: String,
    message_list: MessageList,
    delimiters: Delimiters,
    registry: Arc<Registry>,
    template_engine: Arc<dyn TemplateEngine>,
    reactive_provider: Option<Arc<dyn ReactiveProvider>>,
    dependency: Option<Arc<dyn Dependency>>,
}

impl MessageBox {
    /// Build a message box.
    ///
    /// The language and each delimiter resolve explicit option first, then the
    /// registry default, then the built-in default. The instance dictionary is
    /// used as given. A dependency handle is requested only when a reactive provider
    /// is supplied.
    pub fn new(options: MessageBoxOptions) -> Self {
        let MessageBoxOptions {
            language,
            messages,
            interpolate,
            evaluate,
            escape,
            reactive_provider,
            registry,
            template_engine,
        } = options;

        let registry = registry.unwrap_or_else(Registry::global);

        let language = language
            .filter(|language| !language.is_empty())
            .or_else(|| registry.default_language())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let delimiters = Delimiters {
            interpolate,
            evaluate,
            escape,
        }
        .or(&registry.default_delimiters())
        .or(&Delimiters::builtin());

        let dependency = reactive_provider.as_ref().map(|provider| provider.dependency());

        Self {
            language,
            message_list: messages.unwrap_or_default(),
            delimiters,
            registry,
            template_engine: template_engine.unwrap_or_else(|| Arc::new(DelimitedTemplateEngine)),
            reactive_provider,
            dependency,
        }
    }

    /// Apply defaults to the global registry.
    pub fn set_defaults(defaults: RegistryDefaults) {
        Registry::global().set_defaults(defaults);
    }

    /// See [`messages::make_name_generic`].
    pub fn make_name_generic(name: Option<&str>) -> Option<String> {
        messages::make_name_generic(name)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn message_list(&self) -> &MessageList {
        &self.message_list
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Resolve the effective dictionary for `language`, or for the active language.
    ///
    /// Only the active-language form reports a reactive dependency; an explicit
    /// language is a point query. The merged dictionary is built per call and never
    /// written back to either source.
    ///
    /// # Errors
    /// [`MessageBoxError::MissingDictionary`] when neither the registry nor the
    /// instance has messages for the language.
    pub fn get_messages_for(&self, language: Option<&str>) -> Result<ResolvedMessages> {
        let language = match language {
            Some(language) => language.to_string(),
            None => {
                if let Some(dependency) = &self.dependency {
                    dependency.depend();
                }
                self.language.clone()
            }
        };

        let shared = self.registry.messages_for(&language);
        let messages = match (self.message_list.get(&language), shared) {
            (Some(own), Some(shared)) => {
                let mut merged = LanguageMessages::new();
                merge(&mut merged, &[&*shared, &**own]);
                Arc::new(merged)
            }
            (Some(own), None) => Arc::clone(own),
            (None, Some(shared)) => shared,
            (None, None) => {
                MissingDictionary { language: &language }.log();
                return Err(MessageBoxError::MissingDictionary { language });
            }
        };

        Ok(ResolvedMessages { messages, language })
    }

    /// Render the message for one validation error.
    ///
    /// # Arguments
    /// * `error` - The failure to describe
    /// * `options` - Extra render context and an optional language override
    ///
    /// # Returns
    /// The error's own non-empty message if it has one, otherwise the rendered
    /// dictionary message, otherwise `"<field> is invalid"`.
    ///
    /// # Errors
    /// [`MessageBoxError::MissingDictionary`] for an unknown language, and
    /// [`MessageBoxError::Template`] when the selected template fails to compile.
    pub fn message(&self, error: &ErrorInfo, options: &MessageOptions) -> Result<String> {
        if let Some(custom) = error.custom_message() {
            CustomMessageUsed {
                error_type: &error.error_type,
            }
            .log();
            return Ok(custom.to_string());
        }

        let generic_name = messages::make_name_generic(error.name.as_deref());
        let resolved = self.get_messages_for(options.language.as_deref())?;

        let selected = resolved
            .messages
            .get(&error.error_type)
            .and_then(|entry| entry.select(generic_name.as_deref()));

        let render: MessageFn = match selected {
            Some(Message::Template(template)) => {
                self.template_engine.compile(template, &self.delimiters)?
            }
            Some(Message::Function(render)) => Arc::clone(render),
            None => {
                let field_name = error.name.as_deref().unwrap_or(UNNAMED_FIELD);
                FallbackMessageUsed {
                    field_name,
                    error_type: &error.error_type,
                    language: &resolved.language,
                }
                .log();
                return Ok(format!("{} is invalid", field_name));
            }
        };

        let mut context = Context::new();
        context.insert(
            "genericName".to_string(),
            generic_name.map_or(Value::Null, Value::String),
        );
        if let Some(extra) = &options.context {
            context.extend(extra.clone());
        }
        context.extend(error.to_context());

        Ok(render(&context))
    }

    /// Deep-merge `messages` into this instance's dictionary. The registry is untouched.
    pub fn add_messages(&mut self, messages: &MessageList) {
        merge(&mut self.message_list, &[messages]);
        MessagesAdded {
            language_count: messages.len(),
        }
        .log();
    }

    /// Switch the active language and invalidate readers of the previous one.
    ///
    /// An empty language is ignored.
    pub fn set_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        if language.is_empty() {
            EmptyLanguageIgnored {
                current: &self.language,
            }
            .log();
            return;
        }

        LanguageChanged {
            from: &self.language,
            to: &language,
        }
        .log();
        self.language = language;

        if let Some(dependency) = &self.dependency {
            dependency.changed();
        }
    }
}

impl Clone for MessageBox {
    fn clone(&self) -> Self {
        let mut copy = MessageBox::new(MessageBoxOptions {
            language: Some(self.language.clone()),
            messages: None,
            interpolate: self.delimiters.interpolate.clone(),
            evaluate: self.delimiters.evaluate.clone(),
            escape: self.delimiters.escape.clone(),
            reactive_provider: self.reactive_provider.clone(),
            registry: Some(Arc::clone(&self.registry)),
            template_engine: Some(Arc::clone(&self.template_engine)),
        });
        copy.add_messages(&self.message_list);
        copy
    }
}
