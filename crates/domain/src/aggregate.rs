//! The contract shared by every persisted aggregate root.

use std::fmt;

/// An aggregate root with a store-assigned identity.
///
/// `Draft` is the shape staged for insertion before the store has assigned
/// an id; it becomes `Self` once the owning unit of work completes.
pub trait Aggregate: Clone + Send + Sync + 'static {
    /// Identity type, assigned by the store.
    type Id: Copy + Eq + fmt::Display + Send + Sync + 'static;

    /// Not-yet-persisted form of the aggregate.
    type Draft: Send + Sync + 'static;

    /// Human-readable aggregate name, used in not-found messages.
    const NAME: &'static str;

    /// The aggregate's identity.
    fn id(&self) -> Self::Id;
}
