//! Use cases - User story orchestration over the repository ports.

pub mod demo;

pub use demo::{CrudDemo, DemoReport};
