//! Athenaeum - Library Catalog Web Application
//!
//! A server-rendered Rust web application for managing a small library
//! catalog.

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use athenaeum::{config::AppConfig, pages, repository::Repository, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("athenaeum={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Athenaeum v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        store: Arc::new(Repository::new(pool)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        // Home
        .route("/", get(pages::index))
        // Authors
        .route("/authors", get(pages::authors::list))
        .route(
            "/author/create",
            get(pages::authors::create_get).post(pages::authors::create_post),
        )
        .route("/author/:id", get(pages::authors::detail))
        .route(
            "/author/:id/update",
            get(pages::authors::update_get).post(pages::authors::update_post),
        )
        .route(
            "/author/:id/delete",
            get(pages::authors::delete_get).post(pages::authors::delete_post),
        )
        // Genres
        .route("/genres", get(pages::genres::list))
        .route(
            "/genre/create",
            get(pages::genres::create_get).post(pages::genres::create_post),
        )
        .route("/genre/:id", get(pages::genres::detail))
        .route(
            "/genre/:id/update",
            get(pages::genres::update_get).post(pages::genres::update_post),
        )
        .route(
            "/genre/:id/delete",
            get(pages::genres::delete_get).post(pages::genres::delete_post),
        )
        // Books
        .route("/books", get(pages::books::list))
        .route(
            "/book/create",
            get(pages::books::create_get).post(pages::books::create_post),
        )
        .route("/book/:id", get(pages::books::detail))
        .route(
            "/book/:id/update",
            get(pages::books::update_get).post(pages::books::update_post),
        )
        .route(
            "/book/:id/delete",
            get(pages::books::delete_get).post(pages::books::delete_post),
        )
        // Book instances
        .route("/bookinstances", get(pages::book_instances::list))
        .route(
            "/bookinstance/create",
            get(pages::book_instances::create_get).post(pages::book_instances::create_post),
        )
        .route("/bookinstance/:id", get(pages::book_instances::detail))
        .route(
            "/bookinstance/:id/update",
            get(pages::book_instances::update_get).post(pages::book_instances::update_post),
        )
        .route(
            "/bookinstance/:id/delete",
            get(pages::book_instances::delete_get).post(pages::book_instances::delete_post),
        )
        .with_state(state);

    Router::new()
        .route("/", get(pages::home))
        .nest("/catalog", catalog)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
