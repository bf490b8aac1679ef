// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Template adapter.
//!
//! A [`TemplateEngine`] compiles a template string with a set of [`Delimiters`] into a
//! [`MessageFn`] that renders a [`Context`] to a string. The message box is agnostic
//! to the engine; [`DelimitedTemplateEngine`] is the reference implementation and
//! understands the built-in `{{{raw}}}` / `{{escaped}}` delimiters.

mod delimited;
mod value;

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::Delimiters;
use crate::errors::Result;

pub use delimited::DelimitedTemplateEngine;

/// Data a message is rendered with.
pub type Context = Map<String, Value>;

/// A compiled message: renders a context to the final string.
pub type MessageFn = Arc<dyn Fn(&Context) -> String + Send + Sync>;

/// Compiles message templates into renderers.
pub trait TemplateEngine: Send + Sync {
    /// Compile `template` using `delimiters` to locate substitution regions.
    ///
    /// A delimiter class set to `None` disables that kind of substitution.
    fn compile(&self, template: &str, delimiters: &Delimiters) -> Result<MessageFn>;
}
