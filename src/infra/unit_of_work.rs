//! Unit of Work - centralized repository access.
//!
//! Every write in this application is a single-row insert, so there is no
//! cross-repository transaction machinery here; the unit of work only
//! centralizes repository construction and hands out shared instances.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    RegistrationRepository, RegistrationStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get campaign registration repository
    fn registrations(&self) -> Arc<dyn RegistrationRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    registration_repo: Arc<RegistrationStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            registration_repo: Arc::new(RegistrationStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn registrations(&self) -> Arc<dyn RegistrationRepository> {
        self.registration_repo.clone()
    }
}
