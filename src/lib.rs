pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod schema;
pub mod services;
pub mod store;
pub mod validation;

use crate::config::Config;
use tracing::Level;

pub fn init_tracing(config: &Config) {
    let logging = config.logging();
    let level = logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt().with_max_level(level).json().init();
        }
        _ => {
            tracing_subscriber::fmt().with_max_level(level).init();
        }
    }
}
