//! Application layer - Use cases and orchestration
//!
//! Contains the directory loader, search filter, address resolver, and the
//! external action handlers, plus the port definitions they depend on.
//! Screen types tie each use case to a scoped task lifetime.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
