// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Optional reactive integration.
//!
//! A message box can report that a lookup depended on its *current* language, and
//! announce when that language changes, through an injected [`ReactiveProvider`].
//! The box never builds a provider itself; hosts without a reactive runtime simply
//! don't supply one. [`Tracker`] is a small reference provider.

mod tracker;

use std::sync::Arc;

pub use tracker::{Computation, TrackedDependency, Tracker};

/// One reactive value's dependency handle.
pub trait Dependency: Send + Sync {
    /// Register the currently running computation as a dependent.
    fn depend(&self);

    /// Invalidate every registered dependent.
    fn changed(&self);
}

/// Factory of dependency handles.
pub trait ReactiveProvider: Send + Sync {
    fn dependency(&self) -> Arc<dyn Dependency>;
}
