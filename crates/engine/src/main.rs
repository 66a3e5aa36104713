//! MovieGraph Engine - Demo entry point.
//!
//! Loads configuration, initializes an empty database with the sample catalog,
//! walks through every CRUD operation, then closes the connection. Any failure is
//! logged and the process exits normally.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviegraph_engine::infrastructure::config::Neo4jConfig;
use moviegraph_engine::App;

#[tokio::main]
async fn main() {
    // Load environment from repo root before reading NEO4J_* overrides.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviegraph_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MovieGraph Engine");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Error in MovieGraph application");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Neo4jConfig::load()?;
    tracing::info!("Connecting to Neo4j at {}", config.uri());

    let app = App::connect(&config).await?;

    let result = async {
        app.initializer.initialize_database().await?;
        let report = app.use_cases.demo.execute().await?;
        tracing::info!(
            movies = report.all_movies.len(),
            test_title = %report.test_title,
            "CRUD demo finished"
        );
        anyhow::Ok(())
    }
    .await;

    app.shutdown().await;
    result
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
