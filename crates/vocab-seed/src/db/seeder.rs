//! Transactional insert-if-absent seeding.

use std::fmt;

use serde::Serialize;
use sqlx::mysql::{MySqlConnection, MySqlPool, MySqlPoolOptions};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::dataset::{Dataset, DatasetError};
use crate::models::{Book, Chapter, Word};

/// Existing ids are left untouched; any other failure aborts the batch.
pub const INSERT_BOOK: &str = r#"
    INSERT INTO book (id, title, author, description, level, thumbnail_url, created_at, created_by, updated_at, is_published)
    VALUES (?, ?, ?, ?, ?, ?, NOW(), 'system', NOW(), TRUE)
    ON DUPLICATE KEY UPDATE id = id
"#;

pub const INSERT_CHAPTER: &str = r#"
    INSERT INTO chapter (id, book_id, chapter_number, title, content, order_index, is_published, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, NOW())
    ON DUPLICATE KEY UPDATE id = id
"#;

pub const INSERT_WORD: &str = r#"
    INSERT INTO word (id, text, meaning, pronunciation, part_of_speech, image_url, chapter_id, order_index, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, NOW())
    ON DUPLICATE KEY UPDATE id = id
"#;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Error connecting to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
    /// The batch was committed, but the row counts that follow failed.
    #[error("Data committed, but counting rows failed: {0}")]
    Count(#[source] sqlx::Error),
}

impl SeedError {
    /// Whether the seeded rows were committed before the error occurred.
    pub fn is_committed(&self) -> bool {
        matches!(self, SeedError::Count(_))
    }

    /// One-line console summary of what happened to the batch.
    pub fn banner(&self) -> &'static str {
        match self {
            SeedError::Connect(_) => "✗ Failed to connect to database",
            SeedError::Dataset(_) => "✗ Seed failed, dataset is invalid; nothing was written",
            SeedError::Database(_) => "✗ Seed failed, no records were committed",
            SeedError::Count(_) => "✗ Seed committed, but the row counts could not be read",
        }
    }
}

/// Row counts for the three seeded tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub books: i64,
    pub chapters: i64,
    pub words: i64,
}

impl TableCounts {
    /// Number of records per table in `dataset`.
    pub fn of(dataset: &Dataset<'_>) -> Self {
        Self {
            books: dataset.books.len() as i64,
            chapters: dataset.chapters.len() as i64,
            words: dataset.words.len() as i64,
        }
    }

    pub fn total(&self) -> i64 {
        self.books + self.chapters + self.words
    }

    /// Per-table difference, floored at zero.
    pub fn since(&self, earlier: &TableCounts) -> TableCounts {
        TableCounts {
            books: (self.books - earlier.books).max(0),
            chapters: (self.chapters - earlier.chapters).max(0),
            words: (self.words - earlier.words).max(0),
        }
    }
}

/// Outcome of a successful seed run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    /// Records submitted per table.
    pub processed: TableCounts,
    /// Rows that did not exist before this run.
    pub new_rows: TableCounts,
    /// Table counts after commit.
    pub totals: TableCounts,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✓ Inserted {} books ({} new)",
            self.processed.books, self.new_rows.books
        )?;
        writeln!(
            f,
            "✓ Inserted {} chapters ({} new)",
            self.processed.chapters, self.new_rows.chapters
        )?;
        writeln!(
            f,
            "✓ Inserted {} vocabulary words ({} new)",
            self.processed.words, self.new_rows.words
        )?;
        writeln!(f)?;
        writeln!(f, "✓ Data verification:")?;
        writeln!(f, "  Books: {}", self.totals.books)?;
        writeln!(f, "  Chapters: {}", self.totals.chapters)?;
        writeln!(f, "  Vocabulary Words: {}", self.totals.words)?;
        writeln!(f)?;
        write!(f, "Total: {} records", self.totals.total())
    }
}

/// Inserts the vocabulary dataset into the `book`, `chapter` and `word` tables.
pub struct Seeder {
    pool: MySqlPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Opens a single-connection pool to `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, SeedError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .map_err(SeedError::Connect)?;
        Ok(Self::new(pool))
    }

    /// Seeds `dataset` in one transaction, books first, then chapters, then
    /// words.
    ///
    /// Rows whose primary key already exists are skipped. If any insert
    /// fails the whole batch is rolled back and the error returned.
    pub async fn seed(&self, dataset: &Dataset<'_>) -> Result<SeedReport, SeedError> {
        dataset.validate()?;

        let mut tx = self.pool.begin().await?;
        let before = count_tables(&mut tx).await?;

        if let Err(e) = insert_dataset(&mut tx, dataset).await {
            warn!("Insert failed, rolling back: {}", e);
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            return Err(e.into());
        }

        tx.commit().await?;
        info!("Committed {} records", dataset.total());

        let totals = self.fetch_counts().await.map_err(SeedError::Count)?;
        Ok(SeedReport {
            processed: TableCounts::of(dataset),
            new_rows: totals.since(&before),
            totals,
        })
    }

    /// Counts the rows currently in each table.
    pub async fn count_rows(&self) -> Result<TableCounts, SeedError> {
        Ok(self.fetch_counts().await?)
    }

    async fn fetch_counts(&self) -> Result<TableCounts, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        count_tables(&mut conn).await
    }
}

async fn insert_dataset(
    conn: &mut MySqlConnection,
    dataset: &Dataset<'_>,
) -> Result<(), sqlx::Error> {
    info!("Seeding {} books...", dataset.books.len());
    for book in dataset.books {
        insert_book(conn, book).await?;
    }

    info!("Seeding {} chapters...", dataset.chapters.len());
    for chapter in dataset.chapters {
        insert_chapter(conn, chapter).await?;
    }

    info!("Seeding {} words...", dataset.words.len());
    for word in dataset.words {
        insert_word(conn, word).await?;
    }

    Ok(())
}

async fn insert_book(conn: &mut MySqlConnection, book: &Book<'_>) -> Result<(), sqlx::Error> {
    let result = sqlx::query(INSERT_BOOK)
        .bind(book.id)
        .bind(book.title)
        .bind(book.author)
        .bind(book.description)
        .bind(book.level.as_str())
        .bind(book.thumbnail_url)
        .execute(&mut *conn)
        .await?;

    debug!(id = book.id, rows = result.rows_affected(), "book");
    Ok(())
}

async fn insert_chapter(
    conn: &mut MySqlConnection,
    chapter: &Chapter<'_>,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query(INSERT_CHAPTER)
        .bind(chapter.id)
        .bind(chapter.book_id)
        .bind(chapter.chapter_number)
        .bind(chapter.title)
        .bind(chapter.content)
        .bind(chapter.order_index)
        .bind(chapter.is_published)
        .execute(&mut *conn)
        .await?;

    debug!(id = chapter.id, rows = result.rows_affected(), "chapter");
    Ok(())
}

async fn insert_word(conn: &mut MySqlConnection, word: &Word<'_>) -> Result<(), sqlx::Error> {
    let result = sqlx::query(INSERT_WORD)
        .bind(word.id)
        .bind(word.text)
        .bind(word.meaning)
        .bind(word.pronunciation)
        .bind(word.part_of_speech)
        .bind(word.image_url)
        .bind(word.chapter_id)
        .bind(word.order_index)
        .execute(&mut *conn)
        .await?;

    debug!(id = word.id, rows = result.rows_affected(), "word");
    Ok(())
}

async fn count_tables(conn: &mut MySqlConnection) -> Result<TableCounts, sqlx::Error> {
    let books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
        .fetch_one(&mut *conn)
        .await?;
    let chapters: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chapter")
        .fetch_one(&mut *conn)
        .await?;
    let words: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM word")
        .fetch_one(&mut *conn)
        .await?;

    Ok(TableCounts {
        books,
        chapters,
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn test_placeholders_match_bound_fields() {
        assert_eq!(placeholders(INSERT_BOOK), 6);
        assert_eq!(placeholders(INSERT_CHAPTER), 7);
        assert_eq!(placeholders(INSERT_WORD), 8);
    }

    #[test]
    fn test_inserts_skip_existing_keys() {
        for (sql, table) in [
            (INSERT_BOOK, "INTO book "),
            (INSERT_CHAPTER, "INTO chapter "),
            (INSERT_WORD, "INTO word "),
        ] {
            assert!(sql.contains(table), "{sql}");
            assert!(sql.contains("ON DUPLICATE KEY UPDATE id = id"), "{sql}");
        }
    }

    #[test]
    fn test_book_audit_columns() {
        assert!(INSERT_BOOK.contains("'system'"));
        assert_eq!(INSERT_BOOK.matches("NOW()").count(), 2);
    }

    #[test]
    fn test_counts_of_langleague() {
        let counts = TableCounts::of(&Dataset::langleague());
        assert_eq!(
            counts,
            TableCounts {
                books: 2,
                chapters: 4,
                words: 40
            }
        );
        assert_eq!(counts.total(), 46);
    }

    #[test]
    fn test_since_floors_at_zero() {
        let before = TableCounts {
            books: 2,
            chapters: 4,
            words: 45,
        };
        let after = TableCounts {
            books: 2,
            chapters: 5,
            words: 40,
        };
        assert_eq!(
            after.since(&before),
            TableCounts {
                books: 0,
                chapters: 1,
                words: 0
            }
        );
    }

    #[test]
    fn test_report_display() {
        let counts = TableCounts::of(&Dataset::langleague());
        let report = SeedReport {
            processed: counts,
            new_rows: counts,
            totals: counts,
        };
        let text = report.to_string();

        assert!(text.contains("✓ Inserted 2 books (2 new)"));
        assert!(text.contains("✓ Inserted 40 vocabulary words (40 new)"));
        assert!(text.contains("  Chapters: 4"));
        assert!(text.ends_with("Total: 46 records"));
    }

    #[test]
    fn test_count_failure_after_commit_is_not_reported_as_rollback() {
        let err = SeedError::Count(sqlx::Error::PoolTimedOut);
        assert!(err.is_committed());
        assert!(!err.banner().contains("no records were committed"));
        assert!(err.banner().contains("committed"));
        assert!(err.to_string().starts_with("Data committed"));
    }

    #[test]
    fn test_failures_before_commit() {
        let insert = SeedError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(insert, SeedError::Database(_)));
        assert!(!insert.is_committed());
        assert_eq!(insert.banner(), "✗ Seed failed, no records were committed");

        let connect = SeedError::Connect(sqlx::Error::PoolTimedOut);
        assert!(!connect.is_committed());
        assert_eq!(connect.banner(), "✗ Failed to connect to database");

        let invalid = SeedError::from(DatasetError::DuplicateId { table: "book", id: 1 });
        assert!(!invalid.is_committed());
        assert!(invalid.banner().contains("nothing was written"));
    }
}
