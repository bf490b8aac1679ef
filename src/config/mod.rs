// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod delimiters;
mod registry;

pub mod consts;

pub use delimiters::{Delimiter, Delimiters};
pub use registry::{Registry, RegistryDefaults};
