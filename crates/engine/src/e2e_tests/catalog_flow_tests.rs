//! Startup flow: initialize, run the demo, shut down.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use super::Neo4jTestHarness;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::neo4j::InitOutcome;
use crate::infrastructure::ports::RepoError;
use crate::App;

fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.timestamp_millis_opt(1_700_000_000_000)
            .single()
            .expect("valid timestamp"),
    ))
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn test_startup_flow_on_empty_database() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    let app = App::new(harness.connector(), fixed_clock());

    let outcome = app
        .initializer
        .initialize_database()
        .await
        .expect("initialize");
    assert_eq!(outcome, InitOutcome::Initialized);

    let report = app.use_cases.demo.execute().await.expect("demo");

    assert_eq!(report.test_title, "TestMovie_1700000000000");
    let created = report.created.expect("created movie read back");
    assert_eq!(created.genre.as_deref(), Some("Science Fiction"));
    let updated = report.updated.expect("updated movie read back");
    assert_eq!(updated.genre.as_deref(), Some("Adventure"));
    assert_eq!(updated.year, Some(2014));

    let titles: Vec<&str> = report.all_movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles.len(), 6);
    assert!(titles.contains(&"TestMovie_1700000000000"));

    let actor_names: Vec<&str> = report.matrix_actors.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(actor_names, vec!["Keanu Reeves"]);

    let director_names: Vec<&str> = report
        .inception_directors
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(director_names, vec!["Christopher Nolan"]);

    assert_eq!(report.dicaprio_movies.len(), 2);
    assert_eq!(report.nolan_movies.len(), 2);

    // The demo deletes its own movie on the way out.
    let leftover = app
        .repositories
        .movie
        .get_movie("TestMovie_1700000000000")
        .await
        .expect("lookup");
    assert!(leftover.is_none());

    app.shutdown().await;
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn test_second_startup_skips_initialization() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");

    let first = App::new(harness.connector(), fixed_clock());
    assert_eq!(
        first.initializer.initialize_database().await.expect("init"),
        InitOutcome::Initialized
    );
    first.shutdown().await;

    let second = App::new(harness.connector(), fixed_clock());
    assert_eq!(
        second.initializer.initialize_database().await.expect("init"),
        InitOutcome::Skipped
    );

    let movies = second
        .repositories
        .movie
        .get_all_movies()
        .await
        .expect("list");
    assert_eq!(movies.len(), 5);
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn test_queries_after_shutdown_report_closed_connection() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    let app = App::new(harness.connector(), fixed_clock());
    let repo = Arc::clone(&app.repositories.movie);
    let connector = Arc::clone(app.connector());

    app.shutdown().await;

    assert!(connector.is_closed().await);
    let err = repo.get_all_movies().await.expect_err("closed connector");
    assert!(matches!(err, RepoError::ConnectionClosed));
}
