//! Idempotent schema bootstrap
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so the whole list runs on
//! each startup. Order matters: referenced tables come first.

use sqlx::MySqlPool;
use tracing::debug;

use super::BootstrapError;

/// One table and the statement that creates it
#[derive(Debug, Clone, Copy)]
pub struct TableDefinition {
    pub table: &'static str,
    pub ddl: &'static str,
}

pub const SCHEMA: &[TableDefinition] = &[
    TableDefinition {
        table: "items",
        ddl: r#"
            CREATE TABLE IF NOT EXISTS items (
                id BIGINT PRIMARY KEY AUTO_INCREMENT,
                name VARCHAR(100) NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
        "#,
    },
    TableDefinition {
        table: "users",
        ddl: r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGINT PRIMARY KEY AUTO_INCREMENT,
                name VARCHAR(100) NOT NULL,
                email VARCHAR(255) UNIQUE NOT NULL,
                pass_hash VARCHAR(255) NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                INDEX idx_email (email)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
        "#,
    },
    TableDefinition {
        table: "museums",
        ddl: r#"
            CREATE TABLE IF NOT EXISTS museums (
                id BIGINT PRIMARY KEY AUTO_INCREMENT,
                user_id BIGINT NOT NULL,
                name VARCHAR(200) NOT NULL,
                description TEXT,
                visibility ENUM('public', 'private') NOT NULL DEFAULT 'private',
                image_url VARCHAR(500),
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
                INDEX idx_user_id (user_id),
                INDEX idx_visibility (visibility)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
        "#,
    },
    TableDefinition {
        table: "museums_to_arts",
        ddl: r#"
            CREATE TABLE IF NOT EXISTS museums_to_arts (
                id BIGINT PRIMARY KEY AUTO_INCREMENT,
                museum_id BIGINT NOT NULL,
                object_id BIGINT NOT NULL,
                description TEXT,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (museum_id) REFERENCES museums(id) ON DELETE CASCADE,
                UNIQUE KEY uk_museum_object (museum_id, object_id),
                INDEX idx_museum_id (museum_id),
                INDEX idx_object_id (object_id)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
        "#,
    },
    TableDefinition {
        table: "users_to_arts",
        ddl: r#"
            CREATE TABLE IF NOT EXISTS users_to_arts (
                id BIGINT PRIMARY KEY AUTO_INCREMENT,
                user_id BIGINT NOT NULL,
                object_id BIGINT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
                UNIQUE KEY uk_user_object (user_id, object_id),
                INDEX idx_user_id (user_id),
                INDEX idx_object_id (object_id),
                INDEX idx_created_at (created_at)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
        "#,
    },
];

/// Create any missing table, in order. Stops at the first failure.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), BootstrapError> {
    for def in SCHEMA {
        debug!(table = def.table, "ensuring table");
        sqlx::raw_sql(def.ddl)
            .execute(pool)
            .await
            .map_err(|source| BootstrapError::Schema {
                table: def.table,
                source,
            })?;
    }
    Ok(())
}
