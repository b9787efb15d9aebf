//! Storage configuration parsing from environment variables.

pub const DEFAULT_DATABASE_NAME: &str = "umkm";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// `DATABASE_URL` value selecting the in-process store
pub const MEMORY_URL: &str = "memory";

/// Database environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseEnvConfig {
    /// `None` runs the service without storage
    pub url: Option<String>,
    pub name: String,
    pub max_connections: u32,
}

impl Default for DatabaseEnvConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: DEFAULT_DATABASE_NAME.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            name: lookup("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }

    pub fn is_memory(&self) -> bool {
        self.url.as_deref() == Some(MEMORY_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseEnvConfig::from_lookup(|_| None);
        assert_eq!(config, DatabaseEnvConfig::default());
        assert!(!config.is_memory());
    }

    #[test]
    fn test_blank_url_means_no_storage() {
        let config = DatabaseEnvConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("  ".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("lots".to_string()),
            _ => None,
        });
        assert!(config.url.is_none());
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_memory_url() {
        let config = DatabaseEnvConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("memory".to_string()),
            _ => None,
        });
        assert!(config.is_memory());
    }
}
