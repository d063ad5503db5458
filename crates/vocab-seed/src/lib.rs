//! Seeding and verification of the LangLeague vocabulary dataset.
//!
//! This crate inserts a fixed set of books, chapters and words into the
//! application's MySQL schema and checks the result through the database
//! client running in the MySQL container.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vocab_seed::prelude::*;
//!
//! let seeder = Seeder::connect(&DatabaseConfig::resolve_url()).await?;
//! let report = seeder.seed(&Dataset::langleague()).await?;
//! println!("{report}");
//!
//! let verifier = Verifier::new(DockerClient::new(ClientConfig::from_env()));
//! let results = verifier.run().await;
//! assert!(results.is_success());
//! ```

pub mod config;
pub mod dataset;
pub mod db;
pub mod models;
pub mod verify;

/// Width of the `-----` rule printed under the binaries' headers.
pub const RULE_WIDTH: usize = 50;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ClientConfig, DatabaseConfig};
    pub use crate::dataset::{Dataset, DatasetError};
    pub use crate::db::{SeedError, SeedReport, Seeder, TableCounts};
    pub use crate::models::{Book, Chapter, ProficiencyLevel, Word};
    pub use crate::verify::{
        DockerClient, QueryOutput, QueryRunner, VerificationReport, Verifier, VerifyError,
    };
}
