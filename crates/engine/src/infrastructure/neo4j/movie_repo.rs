//! Neo4j movie repository implementation.
//!
//! One parameterized statement per operation. Writes that address a missing title
//! or name match nothing and therefore change nothing.

use std::sync::Arc;

use async_trait::async_trait;
use moviegraph_domain::{Movie, Person, PersonRole};

use super::connector::{optional, Neo4jConnector};
use super::helpers::{row_to_movie, row_to_person, MovieRecord};
use super::query_helpers::{collect_rows, get_first_row};
use crate::infrastructure::ports::{MovieRepo, RepoError};

pub(crate) const MERGE_MOVIE: &str = "MERGE (m:Movie {title: $title})
    SET m.year = $year, m.genre = $genre, m.description = $description";

pub(crate) const MERGE_PERSON: &str = "MERGE (p:Person {name: $name})
    SET p.birthYear = $birthYear, p.nationality = $nationality, p.role = $role";

pub(crate) const MERGE_ACTED_IN: &str = "MATCH (m:Movie {title: $movieTitle}), (p:Person {name: $personName})
    MERGE (p)-[:ACTED_IN]->(m)";

pub(crate) const MERGE_DIRECTED: &str = "MATCH (m:Movie {title: $movieTitle}), (p:Person {name: $personName})
    MERGE (p)-[:DIRECTED]->(m)";

const GET_MOVIE: &str = "MATCH (m:Movie {title: $title})
    RETURN m.year AS year, m.genre AS genre, m.description AS description";

const GET_ALL_MOVIES: &str = "MATCH (m:Movie)
    RETURN m.title AS title, m.year AS year, m.genre AS genre, m.description AS description
    ORDER BY m.title";

const UPDATE_MOVIE: &str = "MATCH (m:Movie {title: $title})
    SET m.year = $year, m.genre = $genre, m.description = $description";

const DELETE_MOVIE: &str = "MATCH (m:Movie {title: $title})
    DETACH DELETE m";

const ACTORS_IN_MOVIE: &str = "MATCH (p:Person)-[:ACTED_IN]->(m:Movie {title: $movieTitle})
    RETURN p.name AS name, p.birthYear AS birthYear, p.nationality AS nationality";

const DIRECTORS_OF_MOVIE: &str = "MATCH (p:Person)-[:DIRECTED]->(m:Movie {title: $movieTitle})
    RETURN p.name AS name, p.birthYear AS birthYear, p.nationality AS nationality";

const MOVIES_BY_ACTOR: &str = "MATCH (p:Person {name: $personName})-[:ACTED_IN]->(m:Movie)
    RETURN m.title AS title, m.year AS year, m.genre AS genre, m.description AS description";

const MOVIES_BY_DIRECTOR: &str = "MATCH (p:Person {name: $personName})-[:DIRECTED]->(m:Movie)
    RETURN m.title AS title, m.year AS year, m.genre AS genre, m.description AS description";

const GET_PERSON: &str = "MATCH (p:Person {name: $name})
    RETURN p.name AS name, p.birthYear AS birthYear, p.nationality AS nationality";

pub struct Neo4jMovieRepo {
    connector: Arc<Neo4jConnector>,
}

impl Neo4jMovieRepo {
    pub fn new(connector: Arc<Neo4jConnector>) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl MovieRepo for Neo4jMovieRepo {
    async fn create_movie(&self, movie: &Movie) -> Result<(), RepoError> {
        self.connector
            .execute_write(
                MERGE_MOVIE,
                vec![
                    ("title", movie.title.clone().into()),
                    ("year", optional(movie.year.map(i64::from))),
                    ("genre", optional(movie.genre.clone())),
                    ("description", optional(movie.description.clone())),
                ],
            )
            .await?;

        tracing::info!(title = %movie.title, "Movie created");
        Ok(())
    }

    async fn get_movie(&self, title: &str) -> Result<Option<Movie>, RepoError> {
        get_first_row(
            &self.connector,
            GET_MOVIE,
            vec![("title", title.into())],
            |row| MovieRecord::fields_from_row(&row)?.into_movie(Some(title)),
        )
        .await
    }

    async fn get_all_movies(&self) -> Result<Vec<Movie>, RepoError> {
        collect_rows(&self.connector, GET_ALL_MOVIES, Vec::new(), row_to_movie).await
    }

    async fn update_movie(&self, title: &str, movie: &Movie) -> Result<(), RepoError> {
        self.connector
            .execute_write(
                UPDATE_MOVIE,
                vec![
                    ("title", title.into()),
                    ("year", optional(movie.year.map(i64::from))),
                    ("genre", optional(movie.genre.clone())),
                    ("description", optional(movie.description.clone())),
                ],
            )
            .await?;

        tracing::info!(title, "Movie updated");
        Ok(())
    }

    /// Uses DETACH DELETE to remove all relationships.
    async fn delete_movie(&self, title: &str) -> Result<(), RepoError> {
        self.connector
            .execute_write(DELETE_MOVIE, vec![("title", title.into())])
            .await?;

        tracing::info!(title, "Movie deleted");
        Ok(())
    }

    async fn add_actor(&self, movie_title: &str, actor_name: &str) -> Result<(), RepoError> {
        self.connector
            .execute_write(
                MERGE_ACTED_IN,
                vec![
                    ("movieTitle", movie_title.into()),
                    ("personName", actor_name.into()),
                ],
            )
            .await?;

        tracing::info!(actor = actor_name, movie = movie_title, "Actor added to movie");
        Ok(())
    }

    async fn add_director(
        &self,
        movie_title: &str,
        director_name: &str,
    ) -> Result<(), RepoError> {
        self.connector
            .execute_write(
                MERGE_DIRECTED,
                vec![
                    ("movieTitle", movie_title.into()),
                    ("personName", director_name.into()),
                ],
            )
            .await?;

        tracing::info!(director = director_name, movie = movie_title, "Director added to movie");
        Ok(())
    }

    async fn get_actors_in_movie(&self, movie_title: &str) -> Result<Vec<Person>, RepoError> {
        collect_rows(
            &self.connector,
            ACTORS_IN_MOVIE,
            vec![("movieTitle", movie_title.into())],
            row_to_person,
        )
        .await
    }

    async fn get_directors_of_movie(&self, movie_title: &str) -> Result<Vec<Person>, RepoError> {
        collect_rows(
            &self.connector,
            DIRECTORS_OF_MOVIE,
            vec![("movieTitle", movie_title.into())],
            row_to_person,
        )
        .await
    }

    async fn get_movies_by_actor(&self, actor_name: &str) -> Result<Vec<Movie>, RepoError> {
        collect_rows(
            &self.connector,
            MOVIES_BY_ACTOR,
            vec![("personName", actor_name.into())],
            row_to_movie,
        )
        .await
    }

    async fn get_movies_by_director(&self, director_name: &str) -> Result<Vec<Movie>, RepoError> {
        collect_rows(
            &self.connector,
            MOVIES_BY_DIRECTOR,
            vec![("personName", director_name.into())],
            row_to_movie,
        )
        .await
    }

    async fn save_person(&self, person: &Person, role: PersonRole) -> Result<(), RepoError> {
        self.connector
            .execute_write(
                MERGE_PERSON,
                vec![
                    ("name", person.name.clone().into()),
                    ("birthYear", optional(person.birth_year.map(i64::from))),
                    ("nationality", optional(person.nationality.clone())),
                    ("role", role.as_str().into()),
                ],
            )
            .await?;

        tracing::info!(name = %person.name, %role, "Person saved");
        Ok(())
    }

    async fn get_person(&self, name: &str) -> Result<Option<Person>, RepoError> {
        get_first_row(
            &self.connector,
            GET_PERSON,
            vec![("name", name.into())],
            row_to_person,
        )
        .await
    }
}
