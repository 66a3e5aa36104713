//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Database access (the catalog repository)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::MovieRepo;
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::MockMovieRepo;

#[cfg(test)]
pub use testing::MockClockPort;
