//! Builder helpers for terse tree construction.
//!
//! Instead of `Box::new(Branch::new(...))` everywhere, trees are written as
//! `branch(guard, yes, no)` and `selector(vec![...])`.

use crate::{Behavior, Branch, Condition, Selector, Sequence};

/// Creates a guarded branch node.
#[inline]
pub fn branch<C: 'static>(
    validate: impl Fn(&C) -> bool + Send + Sync + 'static,
    on_success: Box<dyn Behavior<C>>,
    on_failure: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Branch::new(validate, on_success, on_failure))
}

/// Creates a condition node.
#[inline]
pub fn condition<C: 'static>(
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(predicate))
}

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// A condition followed by a choice: the shape of every scheduler candidate.
#[inline]
pub fn guarded<C: 'static>(
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
    choice: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    sequence(vec![condition(predicate), choice])
}

#[cfg(test)]
mod tests {
    use crate::{Behavior, Status, branch, guarded, selector};

    struct Pick(&'static str);
    impl Behavior<Vec<&'static str>> for Pick {
        fn tick(&self, ctx: &mut Vec<&'static str>) -> Status {
            ctx.push(self.0);
            Status::Success
        }
    }

    fn pick(name: &'static str) -> Box<dyn Behavior<Vec<&'static str>>> {
        Box::new(Pick(name))
    }

    #[test]
    fn guarded_candidates_fall_through_to_first_passing_guard() {
        let tree = branch(
            |trail: &Vec<&'static str>| trail.is_empty(),
            selector(vec![
                guarded(|_: &Vec<&'static str>| false, pick("skipped")),
                guarded(|_: &Vec<&'static str>| true, pick("chosen")),
                pick("fallback"),
            ]),
            pick("idle"),
        );

        let mut trail = Vec::new();
        assert_eq!(tree.tick(&mut trail), Status::Success);
        assert_eq!(trail, vec!["chosen"]);

        assert_eq!(tree.tick(&mut trail), Status::Success);
        assert_eq!(trail, vec!["chosen", "idle"]);
    }
}
