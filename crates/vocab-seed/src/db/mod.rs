//! Database integration for seeding the vocabulary dataset.
//!
//! The [`Seeder`] inserts a [`Dataset`](crate::dataset::Dataset) inside a
//! single transaction and reports the resulting table counts.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder, TableCounts};
pub use seeder::{INSERT_BOOK, INSERT_CHAPTER, INSERT_WORD};
