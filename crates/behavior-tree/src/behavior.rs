//! Core behavior trait.
//!
//! Every node in a tree implements [`Behavior`]. The trait is generic over a
//! context type `C`, the blackboard the node reads its inputs from and writes
//! its decision into.

use crate::Status;

/// A tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node once against the given context.
    ///
    /// Guards should only read from `ctx`. Choice nodes record their decision
    /// in `ctx` and return `Success`.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors, so heterogeneous children can
/// live in one `Vec<Box<dyn Behavior<C>>>`.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
