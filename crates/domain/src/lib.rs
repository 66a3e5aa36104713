//! MovieGraph domain types.
//!
//! Plain value holders for the movie catalog. No I/O lives here; the engine crate
//! maps these to and from graph nodes.

pub mod entities;
pub mod error;

pub use entities::{Movie, Person, PersonRole};
pub use error::DomainError;
