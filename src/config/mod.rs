//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Prefix for the group routes (e.g., "/api/v2"); empty mounts at the root
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_path: "/api/v2".to_string(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Default page sizes for list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Default `limit` for `GET /groups`
    pub group_limit: usize,

    /// Default `limit` for `GET /groups/{id}/members`
    pub member_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            group_limit: 10,
            member_limit: 15,
        }
    }
}

/// Demo data generated at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of groups to create; 0 disables seeding
    pub groups: usize,

    /// Upper bound of members per generated group
    pub max_members: usize,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub pagination: PaginationConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message,
            },
            other => other,
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_path = &self.server.base_path;
        if !base_path.is_empty() && (!base_path.starts_with('/') || base_path.ends_with('/')) {
            return Err(ConfigError::InvalidValue {
                field: "server.base_path".to_string(),
                value: base_path.clone(),
                message: "must start with '/' and must not end with '/'".to_string(),
            });
        }

        for (field, value) in [
            ("pagination.group_limit", self.pagination.group_limit),
            ("pagination.member_limit", self.pagination.member_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }

        if self.seed.groups > 0 && self.seed.max_members == 0 {
            return Err(ConfigError::InvalidValue {
                field: "seed.max_members".to_string(),
                value: "0".to_string(),
                message: "must be at least 1 when seeding groups".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.address(), "127.0.0.1:8080");
        assert_eq!(config.server.base_path, "/api/v2");
        assert_eq!(config.pagination.group_limit, 10);
        assert_eq!(config.pagination.member_limit, 15);
        assert_eq!(config.seed.groups, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
server:
  port: 9000
pagination:
  member_limit: 20
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.pagination.group_limit, 10);
        assert_eq!(config.pagination.member_limit, 20);
    }

    #[test]
    fn test_invalid_base_path() {
        let err = AppConfig::from_yaml_str("server:\n  base_path: api/\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.base_path"));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = AppConfig::from_yaml_str("pagination:\n  group_limit: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rollcall.yaml");
        std::fs::write(&path, "seed:\n  groups: 5\n  max_members: 3\n").unwrap();

        let config = AppConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.seed.groups, 5);
        assert_eq!(config.seed.max_members, 3);

        let missing = AppConfig::from_yaml_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "server: [unclosed").unwrap();

        let err = AppConfig::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { file: Some(_), .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = AppConfig::from_yaml_str("server: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { file: None, .. }));
    }
}
