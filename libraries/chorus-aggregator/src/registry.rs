//! Weak-handle observer registry
//!
//! Stores non-owning handles to registered observers: registering never
//! extends an observer's lifetime, and the owner of the observer remains
//! solely responsible for unregistering (or holding a [`Registration`] guard)
//! before dropping it.
//!
//! Delivery runs under the registry's read guard while register/unregister
//! take the write guard. Once `unregister` returns, no delivery to that
//! observer is in flight or can start, which is what makes teardown safe:
//! unregister, then drop the observer.

use std::sync::{Arc, RwLock, Weak};

/// Thread-safe set of weak observer handles
///
/// Generic over the callback trait object so the same semantics serve both
/// catalog updates and playback events. Observer identity is pointer
/// identity of the underlying allocation.
pub struct CallbackRegistry<C: ?Sized + Send + Sync> {
    observers: RwLock<Vec<Weak<C>>>,
}

impl<C: ?Sized + Send + Sync> CallbackRegistry<C> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer
    ///
    /// Idempotent: registering an already-registered observer is a no-op, so
    /// each notification is delivered at most once per observer. Returns
    /// whether the observer was newly added.
    pub fn register(&self, observer: &Arc<C>) -> bool {
        let handle = Arc::downgrade(observer);
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        observers.retain(|w| w.strong_count() > 0);
        if observers.iter().any(|w| Weak::ptr_eq(w, &handle)) {
            return false;
        }
        observers.push(handle);
        true
    }

    /// Unregister an observer
    ///
    /// A no-op if the observer was never registered or was already
    /// unregistered. When this returns, no notification is being delivered
    /// to the observer and none will be.
    pub fn unregister(&self, observer: &Arc<C>) {
        self.unregister_weak(&Arc::downgrade(observer));
    }

    fn unregister_weak(&self, handle: &Weak<C>) {
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        observers.retain(|w| w.strong_count() > 0 && !Weak::ptr_eq(w, handle));
    }

    /// Deliver a notification to every live registered observer
    ///
    /// Observers whose owner dropped them without unregistering are skipped.
    /// Delivery order across observers is unspecified.
    pub fn notify<F: Fn(&C)>(&self, deliver: F) {
        let observers = self.observers.read().unwrap_or_else(|e| e.into_inner());
        for handle in observers.iter() {
            if let Some(observer) = handle.upgrade() {
                deliver(&observer);
            }
        }
    }

    /// Number of live registrations
    pub fn len(&self) -> usize {
        let observers = self.observers.read().unwrap_or_else(|e| e.into_inner());
        observers.iter().filter(|w| w.strong_count() > 0).count()
    }

    /// Whether no live observer is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: ?Sized + Send + Sync> Default for CallbackRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped registration guard
///
/// Unregisters the observer when dropped, bounding the observer's active
/// lifetime to the guard's scope. Obtained from
/// [`CallbackRegistry::register_scoped`].
#[must_use = "dropping the guard immediately unregisters the observer"]
pub struct Registration<C: ?Sized + Send + Sync> {
    registry: Arc<CallbackRegistry<C>>,
    handle: Weak<C>,
}

impl<C: ?Sized + Send + Sync> CallbackRegistry<C> {
    /// Register an observer for the lifetime of the returned guard
    pub fn register_scoped(self: &Arc<Self>, observer: &Arc<C>) -> Registration<C> {
        self.register(observer);
        Registration {
            registry: Arc::clone(self),
            handle: Arc::downgrade(observer),
        }
    }
}

impl<C: ?Sized + Send + Sync> Drop for Registration<C> {
    fn drop(&mut self) {
        self.registry.unregister_weak(&self.handle);
    }
}
