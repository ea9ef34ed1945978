//! Server host for transport-agnostic API exposure
//!
//! The host is the single source of truth for application state: the
//! validated configuration and the group service every handler talks to.

use crate::config::AppConfig;
use crate::core::service::GroupService;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::new(AppConfig::default(), Arc::new(InMemoryGroupService::new()))?;
/// let app = RestExposure::build_router(Arc::new(host))?;
/// ```
#[derive(Clone)]
pub struct ServerHost {
    /// Validated application configuration
    pub config: Arc<AppConfig>,

    /// Store behind the group and member routes
    pub service: Arc<dyn GroupService>,
}

impl ServerHost {
    /// Build a host, validating the configuration first
    pub fn new(config: AppConfig, service: Arc<dyn GroupService>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            service,
        })
    }

    /// Prefix under which the group routes are mounted
    pub fn base_path(&self) -> &str {
        &self.config.server.base_path
    }

    /// Default page size for group listings
    pub fn group_limit(&self) -> usize {
        self.config.pagination.group_limit
    }

    /// Default page size for member listings
    pub fn member_limit(&self) -> usize {
        self.config.pagination.member_limit
    }
}
