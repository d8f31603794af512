//! Guard nodes.
//!
//! A [`Branch`] is the classic guarded branch: a predicate plus one successor
//! for each outcome. A [`Condition`] is a bare predicate, usually placed at
//! the head of a [`crate::Sequence`].

use crate::{Behavior, Status};

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Evaluates a guard and continues into exactly one of two successors.
///
/// # Semantics
///
/// - `validate(ctx)` is evaluated first and must not mutate the context
/// - if it holds, `on_success` is ticked and its status returned
/// - otherwise `on_failure` is ticked and its status returned
pub struct Branch<C> {
    validate: Predicate<C>,
    on_success: Box<dyn Behavior<C>>,
    on_failure: Box<dyn Behavior<C>>,
}

impl<C> Branch<C> {
    /// Creates a new branch.
    pub fn new(
        validate: impl Fn(&C) -> bool + Send + Sync + 'static,
        on_success: Box<dyn Behavior<C>>,
        on_failure: Box<dyn Behavior<C>>,
    ) -> Self {
        Self {
            validate: Box::new(validate),
            on_success,
            on_failure,
        }
    }

    /// Evaluates only the guard.
    pub fn validate(&self, ctx: &C) -> bool {
        (self.validate)(ctx)
    }
}

impl<C> Behavior<C> for Branch<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if self.validate(ctx) {
            self.on_success.tick(ctx)
        } else {
            self.on_failure.tick(ctx)
        }
    }
}

/// Succeeds iff its predicate holds. Never touches the context.
pub struct Condition<C> {
    predicate: Predicate<C>,
}

impl<C> Condition<C> {
    pub fn new(predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}
