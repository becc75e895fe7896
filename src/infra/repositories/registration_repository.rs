//! Campaign registration repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::registration::{self, ActiveModel, Entity as RegistrationEntity};
use crate::domain::Registration;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Registration repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persist a new registration owned by `owner_id`.
    ///
    /// Re-registration is cumulative: the same owner may register any
    /// number of provinces, so there is no uniqueness check here.
    async fn create(
        &self,
        full_name: String,
        id_card_number: String,
        target_province: String,
        owner_id: Uuid,
    ) -> AppResult<Registration>;

    /// List registrations belonging to a user, oldest first
    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Registration>>;
}

/// Concrete implementation of RegistrationRepository
pub struct RegistrationStore {
    db: DatabaseConnection,
}

impl RegistrationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationStore {
    async fn create(
        &self,
        full_name: String,
        id_card_number: String,
        target_province: String,
        owner_id: Uuid,
    ) -> AppResult<Registration> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(full_name),
            id_card_number: Set(id_card_number),
            target_province: Set(target_province),
            owner_id: Set(owner_id),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Registration::from(model))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Registration>> {
        use sea_orm::QueryOrder;

        let models = RegistrationEntity::find()
            .filter(registration::Column::OwnerId.eq(owner_id))
            .order_by_asc(registration::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Registration::from).collect())
    }
}
