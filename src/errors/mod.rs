// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod message_box;

pub use message_box::{MessageBoxError, Result};
