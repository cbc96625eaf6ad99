//! Shared HTTP plumbing: application state and the system endpoints.

mod health;
pub mod router;
mod state;

pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
