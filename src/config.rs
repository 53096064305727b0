use anyhow::Context;
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_pass: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            db_host: std::env::var("DB_HOST").context("DB_HOST must be set")?,
            db_name: std::env::var("DB_NAME").context("DB_NAME must be set")?,
            db_user: std::env::var("DB_USER").context("DB_USER must be set")?,
            db_pass: std::env::var("DB_PASS").context("DB_PASS must be set")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    /// Connect options for one dedicated connection to the configured database.
    pub fn pg_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in ["DB_HOST", "DB_NAME", "DB_USER", "DB_PASS", "HOST", "PORT"] {
            std::env::remove_var(key);
        }
    }

    fn set_required() {
        std::env::set_var("DB_HOST", "localhost");
        std::env::set_var("DB_NAME", "catalog");
        std::env::set_var("DB_USER", "app");
        std::env::set_var("DB_PASS", "secret");
    }

    #[test]
    fn from_env_reads_required_and_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_name, "catalog");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn from_env_fails_without_db_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();
        std::env::remove_var("DB_NAME");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("DB_NAME"));
    }

    #[test]
    fn from_env_rejects_bad_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
