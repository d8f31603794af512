//! Small guarded-branch decision tree evaluated once per tick.
//!
//! The tree answers a single question per evaluation: which unit of work
//! should run next. Nodes never block and never keep state between ticks;
//! everything they need lives in the context `C`.
//!
//! - **No Running state**: a node either passes or fails within the tick
//! - **Fixed order**: composites try children strictly left to right, so the
//!   textual order of the tree is the priority policy
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Guard nodes: [`Branch`], [`Condition`]
//! - Composite nodes: [`Sequence`], [`Selector`]

pub mod behavior;
pub mod branch;
pub mod builder;
pub mod composite;
pub mod status;

pub use behavior::Behavior;
pub use branch::{Branch, Condition};
pub use builder::{branch, condition, guarded, selector, sequence};
pub use composite::{Selector, Sequence};
pub use status::Status;
