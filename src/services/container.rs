//! Service Container - Centralized service access.
//!
//! Wires the concrete services to the shared Unit of Work so the rest of
//! the application only sees the service traits.

use std::sync::Arc;

use super::{AuthService, Authenticator, CampaignManager, CampaignService, UserManager, UserService};
use crate::config::Config;
use crate::domain::ProvinceCatalog;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get campaign service
    fn campaign(&self) -> Arc<dyn CampaignService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    campaign_service: Arc<dyn CampaignService>,
}

impl Services {
    /// Create service container from a database connection, the shared
    /// province catalog and the application config.
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        provinces: Arc<ProvinceCatalog>,
        config: Config,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            campaign_service: Arc::new(CampaignManager::new(uow, provinces)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn campaign(&self) -> Arc<dyn CampaignService> {
        self.campaign_service.clone()
    }
}
