//! Run orchestration for the gauntlet decision core.
//!
//! [`RunDriver`] owns one run: it captures an observation, asks the scheduler
//! for an action, executes it (following hand-offs) and publishes status.
//! The loop is blocking and single-threaded; other threads talk to it only
//! through a cloned [`RunHandle`] and the [`StatusBus`].
//!
//! Modules are organized by responsibility:
//! - [`driver`] hosts the tick loop
//! - [`handle`] carries the shared `active` flag
//! - [`status`] fans status events out to subscribers
//! - [`config`] loads runtime settings from the environment
pub mod config;
pub mod driver;
pub mod error;
pub mod handle;
pub mod status;

pub use config::RuntimeConfig;
pub use driver::{RunDriver, TickReport};
pub use error::{Result, RunError};
pub use handle::RunHandle;
pub use status::{StatusBus, StatusEvent};
