// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for registry and lookup events.
//!
//! Message types follow a struct-based pattern with a `Display` implementation, so log
//! text lives in one place and every event carries the same structured fields:
//!
//! * `messages::registry` - process-wide defaults being applied or rejected
//! * `messages::lookup` - dictionary resolution, fallbacks and language changes
//!
//! The library only emits `tracing` events; installing a subscriber is left to the host.
//!
//! # Usage
//!
//! ```rust
//! use message_box::observability::messages::lookup::MissingDictionary;
//! use message_box::observability::messages::StructuredLog;
//!
//! let msg = MissingDictionary { language: "es-ES" };
//! msg.log();
//! ```

pub mod messages;
