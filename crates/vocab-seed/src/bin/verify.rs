//! Prints row counts and samples from the seeded tables using the database
//! client inside the MySQL container.
//!
//! Run with:
//! ```
//! MYSQL_CONTAINER=langleague-mysql cargo run -p vocab-seed --bin verify
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vocab_seed::RULE_WIDTH;
use vocab_seed::config::ClientConfig;
use vocab_seed::verify::{DockerClient, Verifier};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = ClientConfig::from_env();
    println!("Verifying LangLeague vocabulary data in {}...", config.container);
    println!("{}", "-".repeat(RULE_WIDTH));

    let report = Verifier::new(DockerClient::new(config)).run().await;

    if report.is_success() {
        println!("✓ Verification completed successfully!");
        Ok(ExitCode::SUCCESS)
    } else {
        let failed = report.failed();
        println!("✗ Verification finished with {failed} failed queries");
        Ok(ExitCode::FAILURE)
    }
}
