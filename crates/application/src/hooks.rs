//! Ordered pre-request hook chain
//!
//! The default `RequestHookRegistry` implementation, embedded by adapters
//! that have no hook mechanism of their own.

use std::fmt;

use urltpl_domain::RequestConfig;

use crate::ApplicationResult;
use crate::ports::{RequestHook, RequestHookRegistry};

/// Pre-request hooks run in registration order.
pub struct HookChain<T> {
    hooks: Vec<RequestHook<T>>,
}

impl<T> HookChain<T> {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Passes `config` through every hook, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first hook error; later hooks are not run.
    pub fn apply(&self, config: RequestConfig<T>) -> ApplicationResult<RequestConfig<T>> {
        self.hooks.iter().try_fold(config, |config, hook| hook(config))
    }

    /// Returns the number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<T> Default for HookChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestHookRegistry<T> for HookChain<T> {
    fn add_request_hook(&mut self, hook: RequestHook<T>) {
        self.hooks.push(hook);
    }
}

impl<T> fmt::Debug for HookChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
