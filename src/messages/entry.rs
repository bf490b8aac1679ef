// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message dictionary data model.
//!
//! A [`MessageList`] maps a language tag to [`LanguageMessages`], which map an error
//! type to a [`MessageEntry`]. An entry is either a single [`Message`] (a template
//! string or a rendering function) or a [`FieldMessages`] override map keyed by
//! generic or concrete field name, with `_default` as the fallback key.
//!
//! Dictionaries deserialize from YAML or JSON: a string is a template and a mapping
//! is a per-field override map. Rendering functions can only be attached through the
//! builder methods.
//!
//! ```yaml
//! en:
//!   required: "{{name}} is required"
//!   minCount:
//!     _default: "Add at least {{minCount}} items"
//!     tags: "Pick at least {{minCount}} tags"
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::config::consts::DEFAULT_FIELD_KEY;
use crate::errors::Result;
use crate::template::{Context, MessageFn};

/// A leaf message: a template compiled at lookup time or a ready rendering function.
#[derive(Clone)]
pub enum Message {
    Template(String),
    Function(MessageFn),
}

impl Message {
    /// Wrap a closure as a rendering function.
    pub fn function<F>(render: F) -> Self
    where
        F: Fn(&Context) -> String + Send + Sync + 'static,
    {
        Message::Function(Arc::new(render))
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Message::Function(_) => f.write_str("Function(<fn>)"),
        }
    }
}

// Functions compare by identity.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Message::Template(a), Message::Template(b)) => a == b,
            (Message::Function(a), Message::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Message {
    fn from(template: &str) -> Self {
        Message::Template(template.to_string())
    }
}

impl From<String> for Message {
    fn from(template: String) -> Self {
        Message::Template(template)
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Message::Template)
    }
}

/// Per-field override map for one error type.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FieldMessages {
    messages: HashMap<String, Message>,
}

impl FieldMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `_default` message used when no field-specific entry matches.
    pub fn with_default(self, message: impl Into<Message>) -> Self {
        self.with_field(DEFAULT_FIELD_KEY, message)
    }

    /// Set the message for a generic (`items.$.name`) or concrete (`email`) field name.
    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<Message>) -> Self {
        self.messages.insert(field.into(), message.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, message: Message) {
        self.messages.insert(field.into(), message);
    }

    pub fn get(&self, field: &str) -> Option<&Message> {
        self.messages.get(field)
    }

    pub fn default_message(&self) -> Option<&Message> {
        self.messages.get(DEFAULT_FIELD_KEY)
    }

    /// Pick the entry for `generic_name`, falling back to `_default`.
    ///
    /// A missing name never matches a field entry.
    pub fn select(&self, generic_name: Option<&str>) -> Option<&Message> {
        generic_name
            .and_then(|name| self.messages.get(name))
            .or_else(|| self.default_message())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Message)> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// What an error type maps to inside one language.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageEntry {
    Single(Message),
    PerField(FieldMessages),
}

impl MessageEntry {
    /// Select the message for a field. A single message applies to every field.
    pub fn select(&self, generic_name: Option<&str>) -> Option<&Message> {
        match self {
            MessageEntry::Single(message) => Some(message),
            MessageEntry::PerField(fields) => fields.select(generic_name),
        }
    }
}

impl From<Message> for MessageEntry {
    fn from(message: Message) -> Self {
        MessageEntry::Single(message)
    }
}

impl From<&str> for MessageEntry {
    fn from(template: &str) -> Self {
        MessageEntry::Single(template.into())
    }
}

impl From<FieldMessages> for MessageEntry {
    fn from(fields: FieldMessages) -> Self {
        MessageEntry::PerField(fields)
    }
}

/// Error type to message entry, for a single language.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LanguageMessages {
    entries: HashMap<String, MessageEntry>,
}

impl LanguageMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(self, error_type: impl Into<String>, template: impl Into<String>) -> Self {
        self.with_entry(error_type, MessageEntry::Single(Message::Template(template.into())))
    }

    pub fn with_function<F>(self, error_type: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Context) -> String + Send + Sync + 'static,
    {
        self.with_entry(error_type, MessageEntry::Single(Message::function(render)))
    }

    pub fn with_fields(self, error_type: impl Into<String>, fields: FieldMessages) -> Self {
        self.with_entry(error_type, MessageEntry::PerField(fields))
    }

    pub fn with_entry(mut self, error_type: impl Into<String>, entry: impl Into<MessageEntry>) -> Self {
        self.entries.insert(error_type.into(), entry.into());
        self
    }

    pub fn insert(&mut self, error_type: impl Into<String>, entry: MessageEntry) {
        self.entries.insert(error_type.into(), entry);
    }

    pub fn get(&self, error_type: &str) -> Option<&MessageEntry> {
        self.entries.get(error_type)
    }

    pub(crate) fn get_mut(&mut self, error_type: &str) -> Option<&mut MessageEntry> {
        self.entries.get_mut(error_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MessageEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Language tag to [`LanguageMessages`].
///
/// Languages are held behind `Arc` and mutated copy-on-write, so handing a language's
/// messages to a reader never copies them and later merges never leak into earlier
/// readers or clones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageList {
    languages: HashMap<String, Arc<LanguageMessages>>,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>, messages: LanguageMessages) -> Self {
        self.languages.insert(language.into(), Arc::new(messages));
        self
    }

    /// Parse a dictionary held in memory as YAML.
    ///
    /// # Example
    /// ```
    /// use message_box::messages::MessageList;
    ///
    /// let list = MessageList::from_yaml_str(r#"
    /// en:
    ///   required: "{{name}} is required"
    ///   minCount:
    ///     _default: "Too few items"
    ///     tags: "Pick more tags"
    /// "#).unwrap();
    ///
    /// assert_eq!(list.get("en").unwrap().len(), 2);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Convert a JSON value already held by the caller.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn get(&self, language: &str) -> Option<&Arc<LanguageMessages>> {
        self.languages.get(language)
    }

    pub(crate) fn get_mut(&mut self, language: &str) -> Option<&mut Arc<LanguageMessages>> {
        self.languages.get_mut(language)
    }

    pub(crate) fn insert_shared(&mut self, language: String, messages: Arc<LanguageMessages>) {
        self.languages.insert(language, messages);
    }

    pub fn languages(&self) -> impl Iterator<Item = &String> {
        self.languages.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<LanguageMessages>)> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<'de> Deserialize<'de> for MessageList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let languages = HashMap::<String, LanguageMessages>::deserialize(deserializer)?
            .into_iter()
            .map(|(language, messages)| (language, Arc::new(messages)))
            .collect();
        Ok(Self { languages })
    }
}
