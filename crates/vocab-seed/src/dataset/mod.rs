//! Static seed data.
//!
//! A [`Dataset`] is a borrowed view over books, chapters and words. The fixed
//! LangLeague course is available through [`Dataset::langleague`]; other
//! datasets can be assembled with [`Dataset::new`].

pub mod langleague;

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Book, Chapter, Word};

pub use langleague::{BOOKS, CHAPTERS, WORDS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Duplicate {table} id {id}")]
    DuplicateId { table: &'static str, id: i64 },
    #[error("Chapter {chapter_id} references unknown book {book_id}")]
    UnknownBook { chapter_id: i64, book_id: i64 },
    #[error("Word {word_id} references unknown chapter {chapter_id}")]
    UnknownChapter { word_id: i64, chapter_id: i64 },
}

/// Records to seed, in dependency order.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    pub books: &'a [Book<'a>],
    pub chapters: &'a [Chapter<'a>],
    pub words: &'a [Word<'a>],
}

impl<'a> Dataset<'a> {
    pub fn new(books: &'a [Book<'a>], chapters: &'a [Chapter<'a>], words: &'a [Word<'a>]) -> Self {
        Self {
            books,
            chapters,
            words,
        }
    }

    /// The fixed LangLeague course.
    pub fn langleague() -> Dataset<'static> {
        Dataset::new(BOOKS, CHAPTERS, WORDS)
    }

    /// Total number of records across all three tables.
    pub fn total(&self) -> usize {
        self.books.len() + self.chapters.len() + self.words.len()
    }

    /// Checks that ids are unique per table and that every child row
    /// references a parent present in this dataset.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let book_ids = unique_ids("book", self.books.iter().map(|b| b.id))?;
        let chapter_ids = unique_ids("chapter", self.chapters.iter().map(|c| c.id))?;
        unique_ids("word", self.words.iter().map(|w| w.id))?;

        if let Some(chapter) = self
            .chapters
            .iter()
            .find(|c| !book_ids.contains(&c.book_id))
        {
            return Err(DatasetError::UnknownBook {
                chapter_id: chapter.id,
                book_id: chapter.book_id,
            });
        }

        if let Some(word) = self
            .words
            .iter()
            .find(|w| !chapter_ids.contains(&w.chapter_id))
        {
            return Err(DatasetError::UnknownChapter {
                word_id: word.id,
                chapter_id: word.chapter_id,
            });
        }

        Ok(())
    }
}

fn unique_ids(
    table: &'static str,
    ids: impl Iterator<Item = i64>,
) -> Result<HashSet<i64>, DatasetError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId { table, id });
        }
    }
    Ok(seen)
}
