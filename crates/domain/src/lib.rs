//! Domain layer for Vino
//!
//! Contains the hospital directory entities, value objects, and domain errors.
//! This layer has no I/O and defines the ubiquitous language shared by the
//! directory loader, the search filter, and the address resolver.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
