use std::collections::HashMap;
use std::env;

use dotenv::dotenv;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_VAT_RATE_IDR;
use crate::core::splitter::SplitConfig;

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub default_vat_rate_idr: Decimal,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            default_vat_rate_idr: env::var("DEFAULT_VAT_RATE_IDR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_VAT_RATE_IDR),
        }
    }

    /// Splitter defaults derived from the environment; handed to the core
    /// explicitly so it never reads ambient state itself.
    pub fn split_config(&self) -> SplitConfig {
        let mut default_vat_rates = HashMap::new();
        default_vat_rates.insert("IDR".to_string(), self.default_vat_rate_idr);
        SplitConfig { default_vat_rates }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
