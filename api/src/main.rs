//! Credit Risk API Server
//!
//! Read-only HTTP access to the credit-risk dataset: loan applications,
//! branches, applicant situations and contributions.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{http::Method, routing::get, Router};
use sea_orm::{ConnectOptions, Database};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;



use app::{AnalyticsService, QueryService};
use config::Config;
use domain::entities::{ApplicationRecord, Branch, Contribution, FamilySituation, ProfessionalSituation};
use domain::ports::Repositories;
use handlers::views::{
    ApplicationRecordView, BranchView, ContributionView, FamilySituationView,
    ProfessionalSituationView,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<QueryService>,
    pub analytics_service: Arc<AnalyticsService>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            query_service: Arc::new(QueryService::new(repositories.clone())),
            analytics_service: Arc::new(AnalyticsService::new(repositories)),
        }
    }
}

/// Build the router with every route, CORS and request tracing.
///
/// Rate limiting needs the peer address, so it is layered on in `main`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Loan applications
        .route("/demandes", get(handlers::list_applications))
        .route("/demandes/:id", get(handlers::get_application))
        // Branches
        .route(
            "/agences",
            get(handlers::list_entities::<Branch, BranchView>),
        )
        .route(
            "/agences/:id",
            get(handlers::get_entity::<Branch, BranchView>),
        )
        // Applicants
        .route(
            "/situations_pro",
            get(handlers::list_entities::<ProfessionalSituation, ProfessionalSituationView>),
        )
        .route(
            "/situations_pro/:client_id",
            get(handlers::get_entity::<ProfessionalSituation, ProfessionalSituationView>),
        )
        .route(
            "/situations_famille",
            get(handlers::list_entities::<FamilySituation, FamilySituationView>),
        )
        .route(
            "/situations_famille/:client_id",
            get(handlers::get_entity::<FamilySituation, FamilySituationView>),
        )
        // Contributions
        .route(
            "/apports",
            get(handlers::list_entities::<Contribution, ContributionView>),
        )
        .route(
            "/apports/:application_id",
            get(handlers::get_entity::<Contribution, ContributionView>),
        )
        // Denormalized records
        .route(
            "/all_demandes",
            get(handlers::list_entities::<ApplicationRecord, ApplicationRecordView>),
        )
        .route(
            "/all_demandes/",
            get(handlers::list_entities::<ApplicationRecord, ApplicationRecordView>),
        )
        .route(
            "/all_demandes/:id",
            get(handlers::get_entity::<ApplicationRecord, ApplicationRecordView>),
        )
        .route("/analytics", get(handlers::get_analytics))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,credit_risk_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Credit Risk API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.init_schema {
        adapters::postgres::create_schema(&db)
            .await
            .context("Failed to create schema")?;
        tracing::info!("Schema initialized");
    }

    let state = AppState::new(adapters::postgres::repositories(db));

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    let app = router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
