//! Read-only verification through an external database client.
//!
//! The [`Verifier`] sends a fixed list of `SELECT` statements to a
//! [`QueryRunner`] and prints whatever the client wrote to stdout. Queries
//! that fail (non-zero exit, spawn error, timeout) are reported but do not
//! stop the remaining queries.

mod client;

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use client::DockerClient;

/// A labelled query run by the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationQuery {
    pub label: &'static str,
    pub sql: &'static str,
}

pub const VERIFICATION_QUERIES: &[VerificationQuery] = &[
    VerificationQuery {
        label: "Books",
        sql: "SELECT COUNT(*) AS books FROM book",
    },
    VerificationQuery {
        label: "Chapters",
        sql: "SELECT COUNT(*) AS chapters FROM chapter",
    },
    VerificationQuery {
        label: "Words",
        sql: "SELECT COUNT(*) AS words FROM word",
    },
    VerificationQuery {
        label: "Sample books",
        sql: "SELECT id, title, author, level FROM book ORDER BY id",
    },
    VerificationQuery {
        label: "Sample words",
        sql: "SELECT id, text, meaning, chapter_id FROM word ORDER BY id LIMIT 10",
    },
];

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Failed to start database client: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("Query timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("Refusing to run non-SELECT statement: {0}")]
    NotReadOnly(String),
}

/// Captured output of one client invocation.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
    /// Stdout parsed as JSON, or `None` if it is not valid JSON.
    pub parsed: Option<Value>,
}

impl QueryOutput {
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        let parsed = serde_json::from_str(stdout.trim()).ok();
        Self {
            stdout,
            stderr,
            exit_code,
            parsed,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs one SQL statement through a database client.
pub trait QueryRunner: Send + Sync {
    fn run(
        &self,
        sql: &str,
    ) -> impl std::future::Future<Output = Result<QueryOutput, VerifyError>> + Send;
}

/// Returns true if `sql` is a single `SELECT` statement.
///
/// The check is conservative: literals are not parsed, so a `SELECT` with a
/// `;` inside a quoted string is rejected as well.
pub fn is_read_only(sql: &str) -> bool {
    let trimmed = sql.trim().trim_end_matches(';');
    trimmed
        .get(..6)
        .is_some_and(|head| head.eq_ignore_ascii_case("select"))
        && !trimmed.contains(';')
}

/// Result of a single verification query.
#[derive(Debug)]
pub struct QueryReport {
    pub query: VerificationQuery,
    pub outcome: Result<QueryOutput, VerifyError>,
}

impl QueryReport {
    pub fn succeeded(&self) -> bool {
        matches!(&self.outcome, Ok(output) if output.succeeded())
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.query.label)?;
        match &self.outcome {
            Ok(output) => {
                write!(f, "{}", output.stdout)?;
                if !output.succeeded() {
                    writeln!(f, "✗ client exited with code {}", output.exit_code)?;
                    write!(f, "{}", output.stderr)?;
                }
                Ok(())
            }
            Err(e) => writeln!(f, "✗ {}", e),
        }
    }
}

/// All query results of one verification pass.
#[derive(Debug, Default)]
pub struct VerificationReport {
    pub queries: Vec<QueryReport>,
}

impl VerificationReport {
    pub fn failed(&self) -> usize {
        self.queries.iter().filter(|q| !q.succeeded()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs the verification queries against a [`QueryRunner`].
pub struct Verifier<R> {
    runner: R,
    queries: &'static [VerificationQuery],
}

impl<R: QueryRunner> Verifier<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            queries: VERIFICATION_QUERIES,
        }
    }

    /// Replaces the query list.
    pub fn with_queries(mut self, queries: &'static [VerificationQuery]) -> Self {
        self.queries = queries;
        self
    }

    /// Runs every query in order, printing each result as it completes.
    pub async fn run(&self) -> VerificationReport {
        let mut report = VerificationReport::default();

        for query in self.queries {
            let result = self.run_query(query).await;
            println!("{}", result);
            report.queries.push(result);
        }

        info!(
            "Ran {} queries, {} failed",
            report.queries.len(),
            report.failed()
        );
        report
    }

    async fn run_query(&self, query: &VerificationQuery) -> QueryReport {
        let outcome = if is_read_only(query.sql) {
            debug!(sql = query.sql, "running verification query");
            self.runner.run(query.sql).await
        } else {
            Err(VerifyError::NotReadOnly(query.sql.to_string()))
        };

        match &outcome {
            Ok(output) if output.succeeded() => {
                if let Some(parsed) = &output.parsed {
                    debug!(label = query.label, result = %parsed, "parsed client output");
                }
            }
            Ok(output) => warn!(
                label = query.label,
                exit_code = output.exit_code,
                "client reported failure"
            ),
            Err(e) => warn!(label = query.label, "query failed: {}", e),
        }

        QueryReport {
            query: *query,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Replays canned outputs and records the statements it was given.
    struct ScriptedRunner {
        calls: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl ScriptedRunner {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(table: &'static str) -> Self {
            Self {
                fail_on: Some(table),
                ..Self::new()
            }
        }
    }

    impl QueryRunner for ScriptedRunner {
        async fn run(&self, sql: &str) -> Result<QueryOutput, VerifyError> {
            self.calls.lock().unwrap().push(sql.to_string());
            match self.fail_on {
                Some(table) if sql.contains(table) => Ok(QueryOutput::new(
                    String::new(),
                    format!("ERROR: Table '{table}' doesn't exist\n"),
                    1,
                )),
                _ => Ok(QueryOutput::new("[{\"n\": 1}]\n".to_string(), String::new(), 0)),
            }
        }
    }

    #[test]
    fn test_fixed_queries_are_read_only() {
        assert_eq!(VERIFICATION_QUERIES.len(), 5);
        assert!(VERIFICATION_QUERIES.iter().all(|q| is_read_only(q.sql)));
        assert_eq!(
            VERIFICATION_QUERIES
                .iter()
                .filter(|q| q.sql.contains("COUNT(*)"))
                .count(),
            3
        );
    }

    #[test]
    fn test_is_read_only() {
        assert!(is_read_only("select * from word"));
        assert!(is_read_only("  SELECT 1;"));
        assert!(!is_read_only("DELETE FROM word"));
        assert!(!is_read_only("SELECT 1; DROP TABLE word"));
        assert!(!is_read_only("SEL"));
        // Literals are not parsed, so an embedded `;` is refused too.
        assert!(!is_read_only("SELECT id FROM word WHERE text = 'a;b'"));
    }

    #[test]
    fn test_query_output_parses_json() {
        let output = QueryOutput::new("{\"books\": 2}".to_string(), String::new(), 0);
        assert!(output.succeeded());
        assert_eq!(output.parsed.unwrap()["books"], 2);

        let output = QueryOutput::new("books\n2\n".to_string(), String::new(), 0);
        assert!(output.parsed.is_none());
    }

    #[tokio::test]
    async fn test_runs_all_queries_in_order() {
        let verifier = Verifier::new(ScriptedRunner::new());
        let report = verifier.run().await;

        assert!(report.is_success());
        let calls = verifier.runner.calls.lock().unwrap().clone();
        let expected: Vec<String> = VERIFICATION_QUERIES
            .iter()
            .map(|q| q.sql.to_string())
            .collect();
        assert_eq!(calls, expected);
    }

    #[tokio::test]
    async fn test_failed_exit_status_is_reported() {
        let verifier = Verifier::new(ScriptedRunner::failing_on("chapter"));
        let report = verifier.run().await;

        assert_eq!(report.queries.len(), 5);
        assert_eq!(report.failed(), 1);
        assert!(!report.queries[1].succeeded());

        let text = report.queries[1].to_string();
        assert!(text.starts_with("Chapters:"));
        assert!(text.contains("exited with code 1"));
        assert!(text.contains("doesn't exist"));
    }

    #[tokio::test]
    async fn test_non_select_is_never_sent() {
        const QUERIES: &[VerificationQuery] = &[VerificationQuery {
            label: "Wipe",
            sql: "DELETE FROM word",
        }];
        let verifier = Verifier::new(ScriptedRunner::new()).with_queries(QUERIES);
        let report = verifier.run().await;

        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.queries[0].outcome,
            Err(VerifyError::NotReadOnly(_))
        ));
        assert!(verifier.runner.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = VerifyError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Query timed out after 30s");
    }
}
