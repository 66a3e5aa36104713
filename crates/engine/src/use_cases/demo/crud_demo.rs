//! CRUD demo use case - exercises every catalog operation once, in order.

use std::sync::Arc;

use moviegraph_domain::{Movie, Person};

use crate::infrastructure::ports::{ClockPort, MovieRepo, RepoError};

/// What the walkthrough observed at each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub test_title: String,
    /// Read back right after creation
    pub created: Option<Movie>,
    /// Read back after the genre update
    pub updated: Option<Movie>,
    pub all_movies: Vec<Movie>,
    pub matrix_actors: Vec<Person>,
    pub inception_directors: Vec<Person>,
    pub dicaprio_movies: Vec<Movie>,
    pub nolan_movies: Vec<Movie>,
}

pub struct CrudDemo {
    movies: Arc<dyn MovieRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CrudDemo {
    pub fn new(movies: Arc<dyn MovieRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { movies, clock }
    }

    /// Create, read, update, list, traverse credits, then delete a throwaway movie.
    ///
    /// The throwaway title carries the current epoch millis so repeated runs never
    /// collide with each other or with the seed catalog.
    pub async fn execute(&self) -> Result<DemoReport, RepoError> {
        tracing::info!("=== Demonstrating CRUD Operations ===");

        let test_title = format!("TestMovie_{}", self.clock.now().timestamp_millis());
        let mut movie = Movie::new(test_title.as_str())
            .with_year(2014)
            .with_genre("Science Fiction")
            .with_description("A team of explorers travel through a wormhole in space");
        self.movies.create_movie(&movie).await?;

        let created = self.movies.get_movie(&test_title).await?;
        if let Some(found) = &created {
            tracing::info!(title = %found.title, year = ?found.year, "Retrieved movie");
        }

        movie.genre = Some("Adventure".to_string());
        self.movies.update_movie(&test_title, &movie).await?;

        let updated = self.movies.get_movie(&test_title).await?;
        if let Some(found) = &updated {
            tracing::info!(genre = ?found.genre, "Updated movie genre");
        }

        let all_movies = self.movies.get_all_movies().await?;
        tracing::info!("All movies in database:");
        for m in &all_movies {
            tracing::info!("- {} ({:?}) - {:?}", m.title, m.year, m.genre);
        }

        let matrix_actors = self.movies.get_actors_in_movie("The Matrix").await?;
        tracing::info!("Actors in The Matrix:");
        for actor in &matrix_actors {
            tracing::info!("- {} (Born: {:?})", actor.name, actor.birth_year);
        }

        let inception_directors = self.movies.get_directors_of_movie("Inception").await?;
        tracing::info!("Directors of Inception:");
        for director in &inception_directors {
            tracing::info!("- {} ({:?})", director.name, director.nationality);
        }

        let dicaprio_movies = self.movies.get_movies_by_actor("Leonardo DiCaprio").await?;
        tracing::info!("Movies by Leonardo DiCaprio:");
        for m in &dicaprio_movies {
            tracing::info!("- {} ({:?})", m.title, m.year);
        }

        let nolan_movies = self
            .movies
            .get_movies_by_director("Christopher Nolan")
            .await?;
        tracing::info!("Movies directed by Christopher Nolan:");
        for m in &nolan_movies {
            tracing::info!("- {} ({:?})", m.title, m.year);
        }

        self.movies.delete_movie(&test_title).await?;
        tracing::info!(title = %test_title, "Test movie deleted");

        Ok(DemoReport {
            test_title,
            created,
            updated,
            all_movies,
            matrix_actors,
            inception_directors,
            dicaprio_movies,
            nolan_movies,
        })
    }
}
