//! Seeds the LangLeague vocabulary dataset.
//!
//! Run with:
//! ```
//! cargo run -p vocab-seed --bin seed
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vocab_seed::RULE_WIDTH;
use vocab_seed::config::{DatabaseConfig, redact_url};
use vocab_seed::dataset::Dataset;
use vocab_seed::db::{SeedError, SeedReport, Seeder};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    println!("Seeding LangLeague vocabulary data...");
    println!("{}", "-".repeat(RULE_WIDTH));

    let database_url = DatabaseConfig::resolve_url();
    tracing::info!("Connecting to database at {}", redact_url(&database_url));

    match run(&database_url).await {
        Ok(report) => {
            println!("{report}");
            println!();
            println!("✓ Seed completed successfully!");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{e}");
            println!("{}", e.banner());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(database_url: &str) -> Result<SeedReport, SeedError> {
    let seeder = Seeder::connect(database_url).await?;
    tracing::info!("Connected to database");
    seeder.seed(&Dataset::langleague()).await
}
