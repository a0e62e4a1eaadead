use crate::domain::calendar::DEFAULT_CYCLE_LENGTH_DAYS;
use crate::error::{AppError, AppResult};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub database_min_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub database_connection_timeout: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,

    #[serde(default = "default_cycle_length_days")]
    pub cycle_length_days: u32,
    #[serde(default = "default_recompute_completed")]
    pub recompute_completed_on_generate: bool,

    #[serde(default = "default_status_refresh_interval")]
    pub status_refresh_interval_secs: u64,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Clone, Debug)]
pub struct CalendarConfig {
    pub cycle_length_days: u32,
    pub recompute_completed_on_generate: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            cycle_length_days: default_cycle_length_days(),
            recompute_completed_on_generate: default_recompute_completed(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WorkerConfig {
    pub status_refresh_interval_secs: u64,
}

fn default_max_connections() -> u32 {
    20
}
fn default_min_connections() -> u32 {
    1
}
fn default_connection_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_cycle_length_days() -> u32 {
    DEFAULT_CYCLE_LENGTH_DAYS
}
fn default_recompute_completed() -> bool {
    true
}
fn default_status_refresh_interval() -> u64 {
    3600
} // 1 hour

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.database_max_connections == 0 {
            return Err(AppError::Config(
                "DATABASE_MAX_CONNECTIONS must be > 0".to_string(),
            ));
        }

        if self.database_min_connections > self.database_max_connections {
            return Err(AppError::Config(
                "DATABASE_MIN_CONNECTIONS cannot be greater than DATABASE_MAX_CONNECTIONS"
                    .to_string(),
            ));
        }

        if self.cycle_length_days == 0 {
            return Err(AppError::Config("CYCLE_LENGTH_DAYS must be > 0".to_string()));
        }

        if self.status_refresh_interval_secs == 0 {
            return Err(AppError::Config(
                "STATUS_REFRESH_INTERVAL_SECS must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            min_connections: self.database_min_connections,
            connection_timeout: self.database_connection_timeout,
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }

    pub fn calendar(&self) -> CalendarConfig {
        CalendarConfig {
            cycle_length_days: self.cycle_length_days,
            recompute_completed_on_generate: self.recompute_completed_on_generate,
        }
    }

    pub fn worker(&self) -> WorkerConfig {
        WorkerConfig {
            status_refresh_interval_secs: self.status_refresh_interval_secs,
        }
    }
}
