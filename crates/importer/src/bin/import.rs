use clap::Parser;
use importer::canonical::{
    models::CanonicalFormat, transformer::CanonicalTransformer, validator::CanonicalValidator,
};
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pageant-import")]
#[command(about = "Imports a pageant event roster from canonical JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Canonical JSON file describing the event
    file: PathBuf,

    /// Only validate the file, do not touch the database
    #[arg(long)]
    validate_only: bool,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("import={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Loading canonical JSON from: {}", cli.file.display());

    let json_content = tokio::fs::read_to_string(&cli.file).await?;
    let canonical: CanonicalFormat = serde_json::from_str(&json_content)?;

    tracing::info!(
        "Loaded event: {} (v{})",
        canonical.event.name,
        canonical.format_version
    );

    tracing::info!("Validating canonical format...");
    let validation_report = CanonicalValidator::validate(&canonical)?;
    validation_report.log_warnings();
    tracing::info!("Validation successful");

    if cli.validate_only {
        return Ok(());
    }

    let database_url = cli
        .database_url
        .ok_or("DATABASE_URL is required unless --validate-only is given")?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    storage::Database::from(pool.clone()).run_migrations().await?;

    let transformer = CanonicalTransformer::new(&pool);
    let summary = transformer.import_to_database(canonical).await?;

    tracing::info!(
        "Import completed: event {} with {} categories, {} contestants, {} judges{}",
        summary.event.event_id,
        summary.categories,
        summary.contestants,
        summary.judges,
        if summary.event.is_active { " (active)" } else { "" }
    );

    Ok(())
}
