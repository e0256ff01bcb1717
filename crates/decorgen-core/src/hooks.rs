//! The four interception hooks every forwarding call routes through.
//!
//! Synthesis emits their body-less declarations and the analyzer checks the
//! decorator supplies an implementation for each, so both sides read the
//! names and signatures from here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the synchronous hook methods.
pub const SYNC_HOOK: &str = "Decorate";

/// Name of the asynchronous hook methods.
pub const ASYNC_HOOK: &str = "DecorateAsync";

/// One of the hook signatures (sync/async × void/generic).
///
/// # Examples
///
/// ```
/// use decorgen_core::Hook;
///
/// assert_eq!(Hook::ALL.len(), 4);
/// assert_eq!(Hook::AsyncGeneric.method_name(), "DecorateAsync");
/// assert_eq!(Hook::SyncGeneric.display_signature(), "T Decorate<T>(Func<T> doInner)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
    /// `void Decorate(Action doInner)`
    Sync,
    /// `T Decorate<T>(Func<T> doInner)`
    SyncGeneric,
    /// `Task DecorateAsync(Func<Task> doInner)`
    Async,
    /// `Task<T> DecorateAsync<T>(Func<Task<T>> doInner)`
    AsyncGeneric,
}

impl Hook {
    /// All hooks, in emission order.
    pub const ALL: [Self; 4] = [Self::Sync, Self::SyncGeneric, Self::Async, Self::AsyncGeneric];

    /// Hook method name.
    #[must_use]
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::Sync | Self::SyncGeneric => SYNC_HOOK,
            Self::Async | Self::AsyncGeneric => ASYNC_HOOK,
        }
    }

    /// Number of method type parameters (0 or 1).
    #[must_use]
    pub const fn generic_arity(self) -> usize {
        match self {
            Self::Sync | Self::Async => 0,
            Self::SyncGeneric | Self::AsyncGeneric => 1,
        }
    }

    /// Returns `true` for the awaitable-returning hooks.
    #[must_use]
    pub const fn is_async(self) -> bool {
        matches!(self, Self::Async | Self::AsyncGeneric)
    }

    /// Body-less partial declaration emitted into the generated source.
    #[must_use]
    pub const fn declaration(self) -> &'static str {
        match self {
            Self::Sync => "private partial void Decorate(global::System.Action doInner);",
            Self::SyncGeneric => "private partial T Decorate<T>(global::System.Func<T> doInner);",
            Self::Async => {
                "private partial global::System.Threading.Tasks.Task DecorateAsync(global::System.Func<global::System.Threading.Tasks.Task> doInner);"
            }
            Self::AsyncGeneric => {
                "private partial global::System.Threading.Tasks.Task<T> DecorateAsync<T>(global::System.Func<global::System.Threading.Tasks.Task<T>> doInner);"
            }
        }
    }

    /// Short signature used in diagnostic messages.
    #[must_use]
    pub const fn display_signature(self) -> &'static str {
        match self {
            Self::Sync => "void Decorate(Action doInner)",
            Self::SyncGeneric => "T Decorate<T>(Func<T> doInner)",
            Self::Async => "Task DecorateAsync(Func<Task> doInner)",
            Self::AsyncGeneric => "Task<T> DecorateAsync<T>(Func<Task<T>> doInner)",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_signature())
    }
}

/// Hook name a forwarded member routes through.
///
/// # Examples
///
/// ```
/// use decorgen_core::hooks::hook_for;
///
/// assert_eq!(hook_for(true), "DecorateAsync");
/// assert_eq!(hook_for(false), "Decorate");
/// ```
#[must_use]
pub const fn hook_for(is_awaitable: bool) -> &'static str {
    if is_awaitable { ASYNC_HOOK } else { SYNC_HOOK }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_hooks() {
        let async_hooks: Vec<_> = Hook::ALL.iter().filter(|h| h.is_async()).collect();
        assert_eq!(async_hooks, vec![&Hook::Async, &Hook::AsyncGeneric]);
    }

    #[test]
    fn test_generic_arity_matches_declaration() {
        for hook in Hook::ALL {
            let generic = hook.declaration().contains("<T>(");
            assert_eq!(generic, hook.generic_arity() == 1, "{hook:?}");
        }
    }

    #[test]
    fn test_declarations_are_partial_and_bodyless() {
        for hook in Hook::ALL {
            let decl = hook.declaration();
            assert!(decl.starts_with("private partial "));
            assert!(decl.ends_with(");"));
            assert!(decl.contains(hook.method_name()));
        }
    }
}
