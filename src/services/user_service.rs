//! User service - Handles user-related business logic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Resolve a username to its user record
    async fn get_by_username(&self, username: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using the Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.uow
            .users()
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }
}
