//! Row types for the `book`, `chapter` and `word` tables.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Proficiency level a book is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    /// Returns the value stored in the `level` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "BEGINNER",
            ProficiencyLevel::Intermediate => "INTERMEDIATE",
            ProficiencyLevel::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown proficiency level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for ProficiencyLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BEGINNER" => Ok(ProficiencyLevel::Beginner),
            "INTERMEDIATE" => Ok(ProficiencyLevel::Intermediate),
            "ADVANCED" => Ok(ProficiencyLevel::Advanced),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// A vocabulary course unit.
///
/// Audit columns (`created_at`, `updated_at`, `created_by`) and the
/// publication flag are filled in by the insert statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book<'a> {
    pub id: i64,
    pub title: &'a str,
    pub author: &'a str,
    pub description: &'a str,
    pub level: ProficiencyLevel,
    pub thumbnail_url: &'a str,
}

/// An ordered subdivision of a [`Book`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chapter<'a> {
    pub id: i64,
    pub book_id: i64,
    pub chapter_number: i32,
    pub title: &'a str,
    pub content: &'a str,
    pub order_index: i32,
    pub is_published: bool,
}

/// A single vocabulary entry belonging to a [`Chapter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word<'a> {
    pub id: i64,
    pub text: &'a str,
    pub meaning: &'a str,
    pub pronunciation: &'a str,
    /// Free-form category tag ("Noun", "Greeting", ...).
    pub part_of_speech: &'a str,
    pub image_url: Option<&'a str>,
    pub chapter_id: i64,
    pub order_index: i32,
}
