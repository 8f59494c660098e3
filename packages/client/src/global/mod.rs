//! Process-wide default configuration.
//!
//! The registry is an injectable value so tests isolate their own instances;
//! [`global`] wires the single process-wide one. Every operation takes the
//! one lock for a full read-modify-write, so a concurrent install can never
//! drop a merge.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::config::RequestConfig;

/// Whether an install merges into or replaces the active default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPolicy {
    /// Merge the new configuration into the active one; options and headers
    /// absent from the new value survive.
    Merge,
    /// Discard the active configuration entirely.
    Override,
}

/// Holder of the active default [`RequestConfig`].
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    active: Mutex<Option<RequestConfig>>,
}

impl ConfigRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<RequestConfig>> {
        // A stored value is always a previously valid configuration, so a
        // poisoned lock is safe to take over.
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The active default, materialized as empty on first touch. Returns a
    /// copy; the stored value is never aliased out.
    #[must_use]
    pub fn get(&self) -> RequestConfig {
        self.lock().get_or_insert_with(RequestConfig::empty).clone()
    }

    /// Install `config` per `policy` and return the previously active value.
    pub fn install(&self, config: RequestConfig, policy: SetPolicy) -> RequestConfig {
        let mut active = self.lock();
        let previous = active.take().unwrap_or_default();
        let next = match policy {
            SetPolicy::Merge => previous.merge(&config),
            SetPolicy::Override => config,
        };
        tracing::debug!(
            ?policy,
            options = next.option_count(),
            headers = next.headers().len(),
            "installed default request configuration"
        );
        *active = Some(next);
        previous
    }

    /// Back to the empty configuration.
    pub fn reset(&self) {
        self.install(RequestConfig::empty(), SetPolicy::Override);
    }

    /// Install `config`, run `body`, then restore the previous default.
    ///
    /// Restoration runs exactly once on every exit path, including an unwind
    /// out of `body`; the result or panic of `body` passes through unchanged.
    pub fn scoped<T>(
        &self,
        config: RequestConfig,
        policy: SetPolicy,
        body: impl FnOnce() -> T,
    ) -> T {
        let previous = self.install(config, policy);
        let _restore = RestoreOnDrop {
            registry: self,
            previous: Some(previous),
        };
        body()
    }
}

/// Drop guard that reinstalls a captured configuration.
struct RestoreOnDrop<'a> {
    registry: &'a ConfigRegistry,
    previous: Option<RequestConfig>,
}

impl Drop for RestoreOnDrop<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.registry.install(previous, SetPolicy::Override);
        }
    }
}

/// The process-wide registry consulted before issuing a request.
pub fn global() -> &'static ConfigRegistry {
    static GLOBAL: Lazy<ConfigRegistry> = Lazy::new(ConfigRegistry::new);
    &GLOBAL
}
