//! Connection settings for the seeder and the verifier.

use std::env;
use std::time::Duration;

/// Environment variable that overrides the seeder's connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable that overrides the verifier's container name.
pub const CONTAINER_VAR: &str = "MYSQL_CONTAINER";

/// MySQL connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: "123456".to_string(),
            database: "langleague".to_string(),
            port: 3306,
        }
    }
}

impl DatabaseConfig {
    /// Renders a `mysql://` connection URL.
    pub fn url(&self) -> String {
        format!(
            "mysql://{user}:{password}@{host}:{port}/{database}",
            user = self.user,
            password = self.password,
            host = self.host,
            port = self.port,
            database = self.database
        )
    }

    /// Resolves the seeder's connection URL: `DATABASE_URL` if set, otherwise
    /// the fixed defaults.
    pub fn resolve_url() -> String {
        env::var(DATABASE_URL_VAR).unwrap_or_else(|_| Self::default().url())
    }
}

/// Masks the password in a connection URL, for logging.
pub fn redact_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    let rest = &url[scheme_end..];
    let Some(at) = rest.rfind('@') else {
        return url.to_string();
    };
    match rest[..at].find(':') {
        Some(colon) => format!("{}{}:***{}", &url[..scheme_end], &rest[..colon], &rest[at..]),
        None => url.to_string(),
    }
}

/// How the verifier reaches the database client inside the container.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Container runtime binary.
    pub runtime: String,
    /// Name of the running MySQL container.
    pub container: String,
    /// Client binary executed inside the container.
    pub client: String,
    /// Credentials passed to the client's `--uri` flag.
    pub database: DatabaseConfig,
    /// Maximum time a single query may run before the client is killed.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            container: "langleague-mysql".to_string(),
            client: "mysqlsh".to_string(),
            database: DatabaseConfig::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the container name taken from `MYSQL_CONTAINER` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(container) = env::var(CONTAINER_VAR)
            .ok()
            .filter(|c| !c.trim().is_empty())
        {
            config.container = container;
        }
        config
    }

    /// Arguments passed to the runtime binary to run `query`.
    ///
    /// The client runs inside the container, so it always connects to
    /// `localhost` regardless of the configured host.
    pub fn command_args(&self, query: &str) -> Vec<String> {
        let db = &self.database;
        vec![
            "exec".to_string(),
            self.container.clone(),
            self.client.clone(),
            "--uri".to_string(),
            format!(
                "{}:{}@localhost:{}/{}",
                db.user, db.password, db.port, db.database
            ),
            "--sql".to_string(),
            "--json=pretty".to_string(),
            "-e".to_string(),
            query.to_string(),
        ]
    }
}
