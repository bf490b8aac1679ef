// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `registry` - defaults applied, delimiter patterns rejected, registry resets
//! * `lookup` - missing dictionaries, fallback messages, language and dictionary updates

pub mod lookup;
pub mod registry;

use tracing::Span;

/// A log event that knows its level and structured fields.
pub trait StructuredLog {
    /// Emit the event at its level with its structured fields.
    fn log(&self);

    /// A span carrying the same fields, for grouping related events.
    fn span(&self, name: &str) -> Span;
}
