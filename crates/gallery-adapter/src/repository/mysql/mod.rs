//! MySQL backend
//!
//! Bootstrap sequence, in order:
//!
//! 1. open a lazy pool (no I/O yet)
//! 2. probe the server until it answers ([`readiness`])
//! 3. create missing tables when migration is enabled ([`schema`])
//!
//! The pool belongs to [`MySqlBackend`], which the composition root owns and
//! closes once at shutdown. Repositories hold cheap handles to it and never
//! close it themselves.

pub mod item;
pub mod museum;
pub mod readiness;
pub mod schema;

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};
use thiserror::Error;
use tracing::{info, warn};

pub use item::MySqlItemRepository;
pub use museum::MySqlMuseumRepository;
pub use readiness::{wait_until_ready, NotReady, ReadinessPolicy};
pub use schema::{ensure_schema, TableDefinition, SCHEMA};

/// Default maximum connections for the pool
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors that stop the MySQL backend from being selected
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The server never answered within the readiness deadline
    #[error("mysql not ready after {waited:?} ({attempts} attempts)")]
    ConnectionTimeout {
        waited: Duration,
        attempts: u32,
        #[source]
        last_error: Option<sqlx::Error>,
    },

    /// A schema statement failed; the schema may be partially created
    #[error("schema: creating table `{table}` failed")]
    Schema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl From<NotReady<sqlx::Error>> for BootstrapError {
    fn from(err: NotReady<sqlx::Error>) -> Self {
        BootstrapError::ConnectionTimeout {
            waited: err.waited,
            attempts: err.attempts,
            last_error: err.last_error,
        }
    }
}

/// Connection parameters
#[derive(Clone)]
pub struct MySqlSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Create missing tables during bootstrap
    pub migrate: bool,
    pub max_connections: u32,
}

impl MySqlSettings {
    /// Build connect options.
    ///
    /// sqlx pins the session `time_zone` to `+00:00`, so `TIMESTAMP` columns
    /// decode straight into `DateTime<Utc>`.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .charset("utf8mb4")
    }
}

impl Default for MySqlSettings {
    fn default() -> Self {
        Self {
            host: "app-mysql".to_string(),
            port: 3306,
            user: "appuser".to_string(),
            password: "apppass".to_string(),
            database: "appdb".to_string(),
            migrate: true,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl fmt::Debug for MySqlSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("migrate", &self.migrate)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// A ready MySQL backend: reachable server, schema in place
#[derive(Debug)]
pub struct MySqlBackend {
    pool: MySqlPool,
}

impl MySqlBackend {
    /// Run the bootstrap sequence.
    ///
    /// # Errors
    ///
    /// `ConnectionTimeout` when the server does not answer within
    /// `policy.deadline`; `Schema` when a table cannot be created.
    pub async fn connect(
        settings: &MySqlSettings,
        policy: &ReadinessPolicy,
    ) -> Result<Self, BootstrapError> {
        let options = settings.connect_options();
        let pool = MySqlPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_lazy_with(options.clone());

        let probe_options = &options;
        let attempts = wait_until_ready(policy, move || ping(probe_options)).await?;
        info!(
            host = %settings.host,
            port = settings.port,
            database = %settings.database,
            attempts,
            "mysql is reachable"
        );

        if settings.migrate {
            if let Err(err) = ensure_schema(&pool).await {
                warn!(error = %err, "schema bootstrap failed; closing pool");
                pool.close().await;
                return Err(err);
            }
            info!(tables = SCHEMA.len(), "schema ensured");
        }

        Ok(Self { pool })
    }

    pub fn item_repository(&self) -> MySqlItemRepository {
        MySqlItemRepository::new(self.pool.clone())
    }

    pub fn museum_repository(&self) -> MySqlMuseumRepository {
        MySqlMuseumRepository::new(self.pool.clone())
    }

    /// Close the shared pool. Consumes the backend so it happens once.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// One round trip on a fresh connection, so the caller sees the real
/// connect error rather than a pool timeout
async fn ping(options: &MySqlConnectOptions) -> Result<(), sqlx::Error> {
    let mut conn = MySqlConnection::connect_with(options).await?;
    conn.ping().await?;
    conn.close().await
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn debug_output_hides_password() {
        let settings = MySqlSettings {
            password: "hunter2".to_string(),
            ..Default::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("app-mysql"));
    }

    #[test]
    fn timeout_wraps_last_error() {
        let err = BootstrapError::from(NotReady {
            waited: Duration::from_secs(30),
            attempts: 31,
            last_error: Some(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        });

        assert!(matches!(err, BootstrapError::ConnectionTimeout { attempts: 31, .. }));
        assert!(err.to_string().starts_with("mysql not ready after 30s"));
        assert!(err.source().unwrap().to_string().contains("connection refused"));
    }

    #[tokio::test(start_paused = true)]
    async fn unreachable_server_times_out() {
        let settings = MySqlSettings {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..Default::default()
        };
        let policy = ReadinessPolicy {
            interval: Duration::from_secs(1),
            deadline: Duration::from_secs(3),
        };

        let err = MySqlBackend::connect(&settings, &policy).await.unwrap_err();
        assert!(matches!(err, BootstrapError::ConnectionTimeout { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn schema_bootstrap_is_idempotent() {
        let settings = test_support::settings_from_env();
        let backend = MySqlBackend::connect(&settings, &ReadinessPolicy::default())
            .await
            .expect("bootstrap failed");

        ensure_schema(&backend.pool).await.expect("second run failed");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT CAST(table_name AS CHAR) FROM information_schema.tables \
             WHERE table_schema = DATABASE() ORDER BY table_name",
        )
        .fetch_all(&backend.pool)
        .await
        .expect("query failed");
        for def in SCHEMA {
            assert!(tables.iter().any(|(t,)| t == def.table), "{} missing", def.table);
        }

        backend.close().await;
    }
}
