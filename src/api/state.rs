//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::ProvinceCatalog;
use crate::infra::Database;
use crate::services::{AuthService, CampaignService, Services, ServiceContainer, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Campaign registration service
    pub campaign_service: Arc<dyn CampaignService>,
    /// Province reference dataset (read-only, process-wide)
    pub provinces: Arc<ProvinceCatalog>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let provinces = Arc::new(ProvinceCatalog::new());
        let container = Services::from_connection(
            database.get_connection(),
            provinces.clone(),
            config,
        );

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            campaign_service: container.campaign(),
            provinces,
            database,
        }
    }
}
