//! Status returned by tree nodes.

/// The result of evaluating a node.
///
/// Conditions report whether their predicate held; choice nodes report
/// whether they recorded a decision in the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The guard held, or the node recorded its choice.
    Success,

    /// The guard did not hold, or the node had nothing to record.
    Failure,
}

impl Status {
    /// Maps a boolean guard result onto a status.
    #[inline]
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Status::Success
        } else {
            Status::Failure
        }
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}
