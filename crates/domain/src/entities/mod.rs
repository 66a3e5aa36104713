//! Domain entities - Catalog nodes identified by a business key

mod movie;
mod person;

pub use movie::Movie;
pub use person::{Person, PersonRole};
