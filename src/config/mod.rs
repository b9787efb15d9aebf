//! Configuration module for the UMKM forecast service.
//!
//! Configuration is loaded from environment variables (optionally seeded from
//! a `.env` file by the binaries), organized by concern: Server and Database.

mod database_config;
mod server_config;

pub use database_config::{DatabaseEnvConfig, MEMORY_URL};
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub database: DatabaseEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server =
            ServerEnvConfig::from_lookup(&lookup).context("Failed to load server config")?;
        let database = DatabaseEnvConfig::from_lookup(&lookup);

        Ok(Self { server, database })
    }
}
