//! Well-known framework types and the awaitable shapes.
//!
//! Awaitability is decided on a return type's original definition
//! (namespace, name and generic arity), never on its rendered text, so
//! `Task<int>` and `Task<string>` are the same shape and a user type
//! named `Task` in another namespace is not awaitable.

use crate::symbols::TypeRef;

const TASKS_NAMESPACE: &str = "System.Threading.Tasks";
const COLLECTIONS_NAMESPACE: &str = "System.Collections.Generic";

/// `System.Int32`
#[must_use]
pub fn int() -> TypeRef {
    TypeRef::named(Some("System"), "Int32")
}

/// `System.String`
#[must_use]
pub fn string() -> TypeRef {
    TypeRef::named(Some("System"), "String")
}

/// `System.Boolean`
#[must_use]
pub fn boolean() -> TypeRef {
    TypeRef::named(Some("System"), "Boolean")
}

/// `System.Object`
#[must_use]
pub fn object() -> TypeRef {
    TypeRef::named(Some("System"), "Object")
}

/// `System.Action`
#[must_use]
pub fn action() -> TypeRef {
    TypeRef::named(Some("System"), "Action")
}

/// `System.Func<result>`
#[must_use]
pub fn func(result: TypeRef) -> TypeRef {
    TypeRef::generic(Some("System"), "Func", vec![result])
}

/// `System.Threading.Tasks.Task`
#[must_use]
pub fn task() -> TypeRef {
    TypeRef::named(Some(TASKS_NAMESPACE), "Task")
}

/// `System.Threading.Tasks.Task<result>`
#[must_use]
pub fn task_of(result: TypeRef) -> TypeRef {
    TypeRef::generic(Some(TASKS_NAMESPACE), "Task", vec![result])
}

/// `System.Threading.Tasks.ValueTask`
#[must_use]
pub fn value_task() -> TypeRef {
    TypeRef::named(Some(TASKS_NAMESPACE), "ValueTask")
}

/// `System.Threading.Tasks.ValueTask<result>`
#[must_use]
pub fn value_task_of(result: TypeRef) -> TypeRef {
    TypeRef::generic(Some(TASKS_NAMESPACE), "ValueTask", vec![result])
}

/// `System.Collections.Generic.IAsyncEnumerable<item>`
#[must_use]
pub fn async_enumerable(item: TypeRef) -> TypeRef {
    TypeRef::generic(Some(COLLECTIONS_NAMESPACE), "IAsyncEnumerable", vec![item])
}

/// The closed set of return types forwarded through the async hook.
///
/// # Examples
///
/// ```
/// use decorgen_introspector::well_known::{self, AwaitableShape};
///
/// let ty = well_known::value_task_of(well_known::int());
/// assert_eq!(AwaitableShape::classify(&ty), Some(AwaitableShape::ValueTaskOfT));
/// assert!(!well_known::is_awaitable(&well_known::string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AwaitableShape {
    /// `Task`
    Task,
    /// `Task<T>`
    TaskOfT,
    /// `ValueTask`
    ValueTask,
    /// `ValueTask<T>`
    ValueTaskOfT,
    /// `IAsyncEnumerable<T>`
    AsyncEnumerable,
}

impl AwaitableShape {
    /// All shapes.
    pub const ALL: [Self; 5] = [
        Self::Task,
        Self::TaskOfT,
        Self::ValueTask,
        Self::ValueTaskOfT,
        Self::AsyncEnumerable,
    ];

    /// Original definition as (namespace, name, arity).
    #[must_use]
    pub const fn definition(self) -> (&'static str, &'static str, usize) {
        match self {
            Self::Task => (TASKS_NAMESPACE, "Task", 0),
            Self::TaskOfT => (TASKS_NAMESPACE, "Task", 1),
            Self::ValueTask => (TASKS_NAMESPACE, "ValueTask", 0),
            Self::ValueTaskOfT => (TASKS_NAMESPACE, "ValueTask", 1),
            Self::AsyncEnumerable => (COLLECTIONS_NAMESPACE, "IAsyncEnumerable", 1),
        }
    }

    /// Classifies a return type. A nullable annotation does not change the shape.
    #[must_use]
    pub fn classify(ty: &TypeRef) -> Option<Self> {
        if let TypeRef::Nullable { underlying } = ty {
            return Self::classify(underlying);
        }
        let named = ty.as_named()?;
        Self::ALL.into_iter().find(|shape| {
            let (namespace, name, arity) = shape.definition();
            named.is_definition(namespace, name, arity)
        })
    }
}

/// Returns `true` if `ty` is one of the awaitable shapes.
#[must_use]
pub fn is_awaitable(ty: &TypeRef) -> bool {
    AwaitableShape::classify(ty).is_some()
}
