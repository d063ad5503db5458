//! Database client running inside the MySQL container.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::{QueryOutput, QueryRunner, VerifyError};
use crate::config::ClientConfig;

/// Runs queries with `docker exec <container> mysqlsh ...`.
pub struct DockerClient {
    config: ClientConfig,
}

impl DockerClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn command(&self, sql: &str) -> Command {
        let mut cmd = Command::new(&self.config.runtime);
        cmd.args(self.config.command_args(sql))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A timed-out client is killed when its future is dropped.
            .kill_on_drop(true);
        cmd
    }
}

impl QueryRunner for DockerClient {
    async fn run(&self, sql: &str) -> Result<QueryOutput, VerifyError> {
        debug!(
            runtime = %self.config.runtime,
            container = %self.config.container,
            "invoking database client"
        );

        let output = tokio::time::timeout(self.config.timeout, self.command(sql).output())
            .await
            .map_err(|_| VerifyError::Timeout(self.config.timeout))??;

        Ok(QueryOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.code().unwrap_or(-1),
        ))
    }
}
