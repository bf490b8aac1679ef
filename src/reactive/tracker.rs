// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::reactive::{Dependency, ReactiveProvider};

thread_local! {
    static CURRENT: RefCell<Option<Arc<Computation>>> = const { RefCell::new(None) };
}

/// A unit of work that re-runs when something it read changes.
///
/// The tracker only counts invalidations; re-running is the host's job.
#[derive(Debug, Default)]
pub struct Computation {
    invalidations: AtomicUsize,
}

impl Computation {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn invalidation_count(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }

    fn invalidate(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}

/// Reference [`ReactiveProvider`]: dependencies register the computation running on
/// the current thread.
///
/// # Example
/// ```
/// use message_box::reactive::{Computation, ReactiveProvider, Tracker};
///
/// let tracker = Tracker;
/// let dependency = tracker.dependency();
/// let computation = Computation::new();
///
/// Tracker::run(&computation, || dependency.depend());
/// dependency.changed();
/// dependency.changed();
///
/// assert_eq!(computation.invalidation_count(), 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Tracker;

impl Tracker {
    /// Run `f` with `computation` as the thread's current computation.
    pub fn run<R>(computation: &Arc<Computation>, f: impl FnOnce() -> R) -> R {
        let previous = CURRENT.with(|current| current.replace(Some(Arc::clone(computation))));
        let _restore = RestoreCurrent(previous);
        f()
    }

    pub fn current() -> Option<Arc<Computation>> {
        CURRENT.with(|current| current.borrow().clone())
    }
}

impl ReactiveProvider for Tracker {
    fn dependency(&self) -> Arc<dyn Dependency> {
        Arc::new(TrackedDependency::default())
    }
}

struct RestoreCurrent(Option<Arc<Computation>>);

impl Drop for RestoreCurrent {
    fn drop(&mut self) {
        let previous = self.0.take();
        CURRENT.with(|current| *current.borrow_mut() = previous);
    }
}

/// Dependency handle produced by [`Tracker`].
///
/// Dependents are released once invalidated; they register again on their next read.
#[derive(Debug, Default)]
pub struct TrackedDependency {
    dependents: Mutex<Vec<Weak<Computation>>>,
}

impl TrackedDependency {
    pub fn dependent_count(&self) -> usize {
        self.dependents
            .lock()
            .iter()
            .filter(|dependent| dependent.strong_count() > 0)
            .count()
    }
}

impl Dependency for TrackedDependency {
    fn depend(&self) {
        let Some(computation) = Tracker::current() else {
            return;
        };
        let mut dependents = self.dependents.lock();
        dependents.retain(|dependent| dependent.strong_count() > 0);
        let target = Arc::downgrade(&computation);
        if !dependents.iter().any(|dependent| dependent.ptr_eq(&target)) {
            dependents.push(target);
        }
    }

    fn changed(&self) {
        let dependents = std::mem::take(&mut *self.dependents.lock());
        for computation in dependents.iter().filter_map(Weak::upgrade) {
            computation.invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depend_outside_computation_is_ignored() {
        let dependency = TrackedDependency::default();
        dependency.depend();
        assert_eq!(dependency.dependent_count(), 0);
    }

    #[test]
    fn test_changed_invalidates_each_dependent_once() {
        let dependency = TrackedDependency::default();
        let first = Computation::new();
        let second = Computation::new();

        Tracker::run(&first, || {
            dependency.depend();
            dependency.depend();
        });
        Tracker::run(&second, || dependency.depend());
        assert_eq!(dependency.dependent_count(), 2);

        dependency.changed();
        assert_eq!(first.invalidation_count(), 1);
        assert_eq!(second.invalidation_count(), 1);
        assert_eq!(dependency.dependent_count(), 0);

        dependency.changed();
        assert_eq!(first.invalidation_count(), 1);
    }

    #[test]
    fn test_run_restores_previous_computation() {
        let outer = Computation::new();
        let inner = Computation::new();

        Tracker::run(&outer, || {
            Tracker::run(&inner, || {
                assert!(Arc::ptr_eq(&Tracker::current().unwrap(), &inner));
            });
            assert!(Arc::ptr_eq(&Tracker::current().unwrap(), &outer));
        });
        assert!(Tracker::current().is_none());
    }

    #[test]
    fn test_dropped_computations_are_skipped() {
        let dependency = TrackedDependency::default();
        {
            let computation = Computation::new();
            Tracker::run(&computation, || dependency.depend());
        }
        assert_eq!(dependency.dependent_count(), 0);
        dependency.changed();
    }

    #[test]
    fn test_short_lived_computations_do_not_accumulate() {
        let dependency = TrackedDependency::default();
        let survivor = Computation::new();
        Tracker::run(&survivor, || dependency.depend());

        for _ in 0..1_000 {
            let computation = Computation::new();
            Tracker::run(&computation, || dependency.depend());
        }

        assert!(dependency.dependents.lock().len() <= 2);
        assert_eq!(dependency.dependent_count(), 1);

        dependency.changed();
        assert_eq!(survivor.invalidation_count(), 1);
    }
}
