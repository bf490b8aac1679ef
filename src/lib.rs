// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Localized messages for validation errors.
//!
//! Dictionaries map a language tag to error-type entries, each either a message or a
//! per-field map of messages. A process-wide [`Registry`] holds shared defaults and
//! every [`MessageBox`] layers its own dictionary, language and delimiters on top.

pub mod config;        // delimiters, constants + shared registry
pub mod errors;        // error handling
pub mod message_box;   // the resolver
pub mod messages;      // dictionaries, merge, error records
pub mod observability;
pub mod reactive;      // optional dependency tracking
pub mod template;      // template engine adapter

pub use config::{Delimiter, Delimiters, Registry, RegistryDefaults};
pub use errors::{MessageBoxError, Result};
pub use message_box::{MessageBox, MessageBoxOptions, MessageOptions, ResolvedMessages};
pub use messages::{
    make_name_generic, ErrorInfo, FieldMessages, LanguageMessages, Message, MessageEntry,
    MessageList,
};
