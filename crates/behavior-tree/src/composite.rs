//! Composite nodes.
//!
//! [`Sequence`] (AND) and [`Selector`] (OR) both walk their children in the
//! order they were given and short-circuit. Neither scores nor shuffles, so
//! the child order is the whole priority policy.

use crate::{Behavior, Status};

/// Ticks children left to right until one fails.
///
/// - `Failure` from a child stops the sequence and returns `Failure`
/// - `Success` moves on to the next child
/// - all children succeeding returns `Success`
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Ticks children left to right until one succeeds.
///
/// - `Success` from a child stops the selector and returns `Success`
/// - `Failure` moves on to the next child
/// - all children failing returns `Failure`
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        trail: Vec<&'static str>,
    }

    struct Mark(&'static str, Status);
    impl Behavior<TestContext> for Mark {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.trail.push(self.0);
            self.1
        }
    }

    fn mark(name: &'static str, status: Status) -> Box<dyn Behavior<TestContext>> {
        Box::new(Mark(name, status))
    }

    #[test]
    fn sequence_runs_all_children_on_success() {
        let seq = Sequence::new(vec![
            mark("a", Status::Success),
            mark("b", Status::Success),
        ]);
        let mut ctx = TestContext { trail: Vec::new() };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.trail, vec!["a", "b"]);
    }

    #[test]
    fn sequence_stops_at_first_failure() {
        let seq = Sequence::new(vec![
            mark("a", Status::Success),
            mark("b", Status::Failure),
            mark("c", Status::Success),
        ]);
        let mut ctx = TestContext { trail: Vec::new() };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.trail, vec!["a", "b"]);
    }

    #[test]
    fn selector_picks_first_success_in_order() {
        let sel = Selector::new(vec![
            mark("a", Status::Failure),
            mark("b", Status::Success),
            mark("c", Status::Success),
        ]);
        let mut ctx = TestContext { trail: Vec::new() };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.trail, vec!["a", "b"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new(vec![
            mark("a", Status::Failure),
            mark("b", Status::Failure),
        ]);
        let mut ctx = TestContext { trail: Vec::new() };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.trail, vec!["a", "b"]);
    }
}
