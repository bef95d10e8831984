//! Process configuration
//!
//! Flags override environment variables; defaults suit docker-compose.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser};
use gallery_adapter::MySqlSettings;

const DEFAULT_DB_PORT: u16 = 3306;

#[derive(Clone, Parser)]
#[command(name = "gallery")]
#[command(about = "Gallery - museums and items over MySQL, with an in-memory fallback")]
#[command(version)]
pub struct AppConfig {
    /// Deployment environment (development, production, test)
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub env: String,

    #[command(flatten)]
    pub database: DatabaseConfig,
}

#[derive(Clone, Args)]
pub struct DatabaseConfig {
    /// Use MySQL; otherwise serve from memory
    #[arg(
        long = "db-enabled",
        env = "DB_ENABLED",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub enabled: bool,

    #[arg(long = "db-host", env = "DB_HOST", default_value = "app-mysql")]
    pub host: String,

    /// 0 selects the default port
    #[arg(long = "db-port", env = "DB_PORT", default_value_t = DEFAULT_DB_PORT)]
    pub port: u16,

    #[arg(long = "db-user", env = "DB_USER", default_value = "appuser")]
    pub user: String,

    #[arg(
        long = "db-password",
        env = "DB_PASSWORD",
        default_value = "apppass",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    #[arg(long = "db-name", env = "DB_NAME", default_value = "appdb")]
    pub name: String,

    /// Create missing tables at startup
    #[arg(
        long = "db-migrate",
        env = "DB_MIGRATE",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub migrate: bool,
}

impl From<&DatabaseConfig> for MySqlSettings {
    fn from(config: &DatabaseConfig) -> Self {
        MySqlSettings {
            host: config.host.clone(),
            port: if config.port == 0 {
                DEFAULT_DB_PORT
            } else {
                config.port
            },
            user: config.user.clone(),
            password: config.password.clone(),
            database: config.name.clone(),
            migrate: config.migrate,
            ..MySqlSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_mysql_settings() {
        let config = AppConfig::try_parse_from([
            "gallery",
            "--env",
            "test",
            "--db-host",
            "db.internal",
            "--db-port",
            "0",
            "--db-name",
            "museums",
            "--db-migrate",
            "off",
        ])
        .unwrap();

        assert_eq!(config.env, "test");
        let settings = MySqlSettings::from(&config.database);
        assert_eq!(settings.host, "db.internal");
        assert_eq!(settings.port, 3306);
        assert_eq!(settings.database, "museums");
        assert!(!settings.migrate);
    }

    #[test]
    fn backend_can_be_disabled() {
        let config = AppConfig::try_parse_from(["gallery", "--db-enabled", "false"]).unwrap();
        assert!(!config.database.enabled);

        let config = AppConfig::try_parse_from(["gallery", "--db-enabled", "TRUE"]).unwrap();
        assert!(config.database.enabled);

        let config =
            AppConfig::try_parse_from(["gallery", "--db-enabled=0", "--db-migrate", "yes"])
                .unwrap();
        assert!(!config.database.enabled);
        assert!(config.database.migrate);
    }
}
