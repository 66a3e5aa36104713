//! Repository port trait for catalog access.

use async_trait::async_trait;
use moviegraph_domain::{Movie, Person, PersonRole};

use super::error::RepoError;

// =============================================================================
// Movie Catalog
// =============================================================================

/// Movie/person catalog operations.
///
/// Every method issues exactly one query. Titles and names are the only handles;
/// writes that address a missing key complete with `Ok(())` and change nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    // Movie CRUD

    /// Upsert a movie by title, overwriting year, genre and description.
    async fn create_movie(&self, movie: &Movie) -> Result<(), RepoError>;

    /// `Ok(None)` when no movie has this title.
    async fn get_movie(&self, title: &str) -> Result<Option<Movie>, RepoError>;

    /// All movies, ordered by title ascending.
    async fn get_all_movies(&self) -> Result<Vec<Movie>, RepoError>;

    /// Overwrite the non-key fields of an existing movie. The title in `movie` is
    /// ignored. No-op when `title` does not exist.
    async fn update_movie(&self, title: &str, movie: &Movie) -> Result<(), RepoError>;

    /// Remove the movie and every relationship touching it. No-op when absent.
    async fn delete_movie(&self, title: &str) -> Result<(), RepoError>;

    // Credits

    /// Link an existing person to an existing movie with ACTED_IN.
    /// No edge is created when either node is missing.
    async fn add_actor(&self, movie_title: &str, actor_name: &str) -> Result<(), RepoError>;

    /// Link an existing person to an existing movie with DIRECTED.
    /// No edge is created when either node is missing.
    async fn add_director(&self, movie_title: &str, director_name: &str)
        -> Result<(), RepoError>;

    async fn get_actors_in_movie(&self, movie_title: &str) -> Result<Vec<Person>, RepoError>;
    async fn get_directors_of_movie(&self, movie_title: &str) -> Result<Vec<Person>, RepoError>;
    async fn get_movies_by_actor(&self, actor_name: &str) -> Result<Vec<Movie>, RepoError>;
    async fn get_movies_by_director(&self, director_name: &str)
        -> Result<Vec<Movie>, RepoError>;

    // People

    /// Upsert a person by name and tag the node with `role`.
    async fn save_person(&self, person: &Person, role: PersonRole) -> Result<(), RepoError>;

    /// `Ok(None)` when no person has this name.
    async fn get_person(&self, name: &str) -> Result<Option<Person>, RepoError>;
}
