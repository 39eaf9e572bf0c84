use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;

use config::Config;
use features::{categories, contestants, events, judges, public, reports, scoring};
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        public::handlers::health,
        public::handlers::list_events,
        public::handlers::get_active_event,
        public::handlers::get_event_results,
        events::handlers::list_events,
        events::handlers::get_event,
        events::handlers::create_event,
        events::handlers::update_event,
        events::handlers::activate_event,
        events::handlers::delete_event,
        contestants::handlers::list_contestants,
        contestants::handlers::get_contestant,
        contestants::handlers::create_contestant,
        contestants::handlers::update_contestant,
        contestants::handlers::delete_contestant,
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::create_category,
        categories::handlers::update_category,
        categories::handlers::delete_category,
        judges::handlers::list_judges,
        judges::handlers::get_judge,
        judges::handlers::create_judge,
        judges::handlers::update_judge,
        judges::handlers::delete_judge,
        reports::handlers::get_event_report,
        scoring::handlers::get_judge_event,
        scoring::handlers::get_contestant,
        scoring::handlers::submit_scores,
    ),
    components(
        schemas(
            public::handlers::HealthResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventSummary,
            storage::dto::contestant::CreateContestantRequest,
            storage::dto::contestant::UpdateContestantRequest,
            storage::dto::contestant::NumberedContestant,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::judge::CreateJudgeRequest,
            storage::dto::judge::UpdateJudgeRequest,
            storage::dto::judge::JudgeResponse,
            storage::dto::judge::AnonymousJudge,
            storage::dto::score::SubmitScoresRequest,
            storage::dto::score::ScoreEntry,
            storage::dto::score::JudgeEventResponse,
            storage::dto::score::JudgeContestantResponse,
            storage::dto::ranking::RankedEntry,
            storage::dto::report::EventStatistics,
            storage::dto::report::EventResultsResponse,
            storage::dto::report::ReportRanking,
            storage::dto::report::JudgeScoreCell,
            storage::dto::report::CategoryBreakdown,
            storage::dto::report::ContestantBreakdown,
            storage::dto::report::EventReport,
            storage::models::Event,
            storage::models::Contestant,
            storage::models::Category,
            storage::models::Judge,
            storage::models::Score,
        )
    ),
    tags(
        (name = "public", description = "Public results endpoints"),
        (name = "admin", description = "Event administration, API key required"),
        (name = "judge", description = "Judge scoring, judge access key required"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting pageant tabulation API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database_host());
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, admin endpoints will reject every request");
    }

    let app = routes::router(db, api_keys);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
