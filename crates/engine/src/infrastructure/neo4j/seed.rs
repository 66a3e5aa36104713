//! Fixed sample catalog written by the initializer.

use moviegraph_domain::{Movie, Person, PersonRole};

use super::connector::{optional, Neo4jConnector};
use super::movie_repo::{MERGE_ACTED_IN, MERGE_DIRECTED, MERGE_MOVIE, MERGE_PERSON};
use crate::infrastructure::ports::RepoError;

/// (title, year, genre, description)
pub const SEED_MOVIES: [(&str, i32, &str, &str); 5] = [
    (
        "The Matrix",
        1999,
        "Science Fiction",
        "A computer hacker learns about the true nature of reality",
    ),
    (
        "Inception",
        2010,
        "Science Fiction",
        "A thief who steals corporate secrets through dream-sharing technology",
    ),
    (
        "The Shawshank Redemption",
        1994,
        "Drama",
        "Two imprisoned men bond over years, finding redemption",
    ),
    (
        "Pulp Fiction",
        1994,
        "Crime",
        "The lives of two mob hitmen intertwine with multiple storylines",
    ),
    (
        "The Dark Knight",
        2008,
        "Action",
        "Batman faces the Joker in a battle for Gotham's soul",
    ),
];

/// (name, birth year, nationality)
pub const SEED_ACTORS: [(&str, i32, &str); 7] = [
    ("Keanu Reeves", 1964, "Canadian"),
    ("Leonardo DiCaprio", 1974, "American"),
    ("Tim Robbins", 1958, "American"),
    ("Morgan Freeman", 1937, "American"),
    ("John Travolta", 1954, "American"),
    ("Christian Bale", 1974, "British"),
    ("Heath Ledger", 1979, "Australian"),
];

pub const SEED_DIRECTORS: [(&str, i32, &str); 5] = [
    ("Lana Wachowski", 1965, "American"),
    ("Lilly Wachowski", 1967, "American"),
    ("Christopher Nolan", 1970, "British"),
    ("Frank Darabont", 1959, "American"),
    ("Quentin Tarantino", 1963, "American"),
];

/// (person name, movie title)
pub const SEED_ACTED_IN: [(&str, &str); 7] = [
    ("Keanu Reeves", "The Matrix"),
    ("Leonardo DiCaprio", "Inception"),
    ("Leonardo DiCaprio", "The Shawshank Redemption"),
    ("Morgan Freeman", "The Shawshank Redemption"),
    ("John Travolta", "Pulp Fiction"),
    ("Christian Bale", "The Dark Knight"),
    ("Heath Ledger", "The Dark Knight"),
];

pub const SEED_DIRECTED: [(&str, &str); 6] = [
    ("Lana Wachowski", "The Matrix"),
    ("Lilly Wachowski", "The Matrix"),
    ("Christopher Nolan", "Inception"),
    ("Christopher Nolan", "The Dark Knight"),
    ("Frank Darabont", "The Shawshank Redemption"),
    ("Quentin Tarantino", "Pulp Fiction"),
];

pub fn seed_movies() -> Vec<Movie> {
    SEED_MOVIES
        .iter()
        .map(|&(title, year, genre, description)| {
            Movie::new(title)
                .with_year(year)
                .with_genre(genre)
                .with_description(description)
        })
        .collect()
}

fn tagged(people: &[(&str, i32, &str)], role: PersonRole) -> Vec<(Person, PersonRole)> {
    people
        .iter()
        .map(|&(name, birth_year, nationality)| {
            (
                Person::new(name)
                    .with_birth_year(birth_year)
                    .with_nationality(nationality),
                role,
            )
        })
        .collect()
}

/// Actors then directors, each with the role tag written to the node.
pub fn seed_people() -> Vec<(Person, PersonRole)> {
    let mut people = tagged(&SEED_ACTORS, PersonRole::Actor);
    people.extend(tagged(&SEED_DIRECTORS, PersonRole::Director));
    people
}

/// Merge the sample catalog. Every write is merge-by-key, so re-running is safe.
pub async fn seed_catalog(connector: &Neo4jConnector) -> Result<(), RepoError> {
    for movie in seed_movies() {
        connector
            .execute_write(
                MERGE_MOVIE,
                vec![
                    ("title", movie.title.into()),
                    ("year", optional(movie.year.map(i64::from))),
                    ("genre", optional(movie.genre)),
                    ("description", optional(movie.description)),
                ],
            )
            .await?;
    }

    for (person, role) in seed_people() {
        connector
            .execute_write(
                MERGE_PERSON,
                vec![
                    ("name", person.name.into()),
                    ("birthYear", optional(person.birth_year.map(i64::from))),
                    ("nationality", optional(person.nationality)),
                    ("role", role.as_str().into()),
                ],
            )
            .await?;
    }

    for (statement, edges) in [
        (MERGE_ACTED_IN, &SEED_ACTED_IN[..]),
        (MERGE_DIRECTED, &SEED_DIRECTED[..]),
    ] {
        for &(person_name, movie_title) in edges {
            connector
                .execute_write(
                    statement,
                    vec![
                        ("movieTitle", movie_title.into()),
                        ("personName", person_name.into()),
                    ],
                )
                .await?;
        }
    }

    tracing::info!(
        movies = SEED_MOVIES.len(),
        people = SEED_ACTORS.len() + SEED_DIRECTORS.len(),
        acted_in = SEED_ACTED_IN.len(),
        directed = SEED_DIRECTED.len(),
        "Sample data inserted"
    );
    Ok(())
}
