//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Create a new user.
    ///
    /// The username unique index makes this atomic: of two concurrent
    /// inserts for the same username exactly one succeeds, the other
    /// surfaces as a conflict.
    async fn create(&self, username: String, email: String, password_hash: String)
        -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Username"),
                _ => AppError::from(e),
            }
        })?;

        Ok(User::from(model))
    }
}
