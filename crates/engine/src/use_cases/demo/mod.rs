//! CRUD walkthrough over the movie catalog.

mod crud_demo;

pub use crud_demo::{CrudDemo, DemoReport};
