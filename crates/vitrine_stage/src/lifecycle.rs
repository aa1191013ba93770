//! Lifecycle scopes
//!
//! Every observer, listener, and timeline created while a view is mounted
//! is recorded against the view's `SceneScope`. On teardown the scope
//! releases all of them, in any order, exactly once. The revocation flag
//! flips before the releases run, so a completion callback scheduled
//! earlier can never fire into a torn-down view, even when teardown
//! happens mid-animation.
//!
//! The scope lives on the UI thread and accepts non-`Send` release
//! closures; only the revocation flag is shared with the (thread-safe)
//! animation callbacks.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use vitrine_animation::CompletionCallback;

/// A single releasable registration
///
/// `release()` is idempotent: the underlying closure runs at most once.
pub struct Disposable {
    release: Option<Box<dyn FnOnce()>>,
}

impl Disposable {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Run the release action if it has not run yet
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_released(&self) -> bool {
        self.release.is_none()
    }
}

/// Owner of everything a mounted view registered
///
/// Dropping the scope disposes it; explicit `dispose()` is also idempotent.
pub struct SceneScope {
    disposables: RefCell<Vec<Disposable>>,
    revoked: Arc<AtomicBool>,
}

impl SceneScope {
    pub fn new() -> Self {
        Self {
            disposables: RefCell::new(Vec::new()),
            revoked: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Record a disposable handle
    ///
    /// Adding to an already-disposed scope releases the handle immediately.
    pub fn add(&self, mut disposable: Disposable) {
        if self.is_disposed() {
            disposable.release();
            return;
        }
        self.disposables.borrow_mut().push(disposable);
    }

    /// Record a release closure
    pub fn add_release(&self, release: impl FnOnce() + 'static) {
        self.add(Disposable::new(release));
    }

    /// Wrap a callback so it becomes a no-op after the scope is disposed
    ///
    /// Use this for every completion callback handed to a timeline owned
    /// by this scope.
    pub fn guard(&self, callback: impl Fn() + Send + Sync + 'static) -> CompletionCallback {
        let revoked = Arc::clone(&self.revoked);
        Arc::new(move || {
            if !revoked.load(Ordering::Acquire) {
                callback();
            }
        })
    }

    pub fn is_disposed(&self) -> bool {
        self.revoked.load(Ordering::Acquire)
    }

    /// A cloneable token that reports whether this scope was disposed
    ///
    /// For callbacks that cannot go through `guard` (non-`Fn()` shapes,
    /// handler registries); check the token at the top of the callback.
    pub fn token(&self) -> RevocationToken {
        RevocationToken {
            revoked: Arc::clone(&self.revoked),
        }
    }

    /// Tear the scope down: revoke callbacks, then release everything
    ///
    /// The flag flips before any release runs, so nothing guarded by this
    /// scope can execute once disposal has started.
    pub fn dispose(&self) {
        if self.revoked.swap(true, Ordering::AcqRel) {
            return;
        }
        let mut disposables = std::mem::take(&mut *self.disposables.borrow_mut());
        for disposable in &mut disposables {
            disposable.release();
        }
        tracing::debug!(count = disposables.len(), "scene scope disposed");
    }

    /// How many registrations the scope currently holds
    pub fn len(&self) -> usize {
        self.disposables.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.disposables.borrow().is_empty()
    }
}

impl Default for SceneScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SceneScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Shared view of a scope's disposed state
#[derive(Clone)]
pub struct RevocationToken {
    revoked: Arc<AtomicBool>,
}

impl RevocationToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::Acquire)
    }
}
