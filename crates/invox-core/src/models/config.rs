//! Configuration structures for the ingestion pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the invox pipeline.
///
/// Passed explicitly to the recorder and the entry point; there is no
/// process-wide configuration state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoxConfig {
    /// Database connection configuration.
    pub database: DatabaseConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// PostgreSQL connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL.
    pub url: String,

    /// Maximum pool connections.
    pub max_connections: u32,

    /// Seconds to wait when acquiring a connection from the pool.
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/invoice_db".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 10,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted text length to consider the PDF usable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

impl InvoxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Apply environment overrides. `DATABASE_URL` wins over the file value.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = InvoxConfig::default();
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.pdf.min_text_length, 50);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: InvoxConfig =
            serde_json::from_str(r#"{"database": {"url": "postgres://db/x"}}"#).unwrap();
        assert_eq!(config.database.url, "postgres://db/x");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.pdf.min_text_length, 50);
    }

    #[test]
    fn test_json_round_trip() {
        let config = InvoxConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: InvoxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.database.url, config.database.url);
        assert_eq!(back.database.acquire_timeout_secs, config.database.acquire_timeout_secs);
    }
}
