// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod entry;
mod error_info;
mod generic_name;
mod merge;

pub use entry::{FieldMessages, LanguageMessages, Message, MessageEntry, MessageList};
pub use error_info::ErrorInfo;
pub use generic_name::make_name_generic;
pub use merge::{merge, DeepMerge};
