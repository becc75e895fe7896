//! Campaign registration service.
//!
//! Validates a registration against the province catalog, persists it
//! linked to the authenticated user, and composes the response with the
//! full tax-reduction context.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ID_CARD_PATTERN;
use crate::domain::{ProvinceCatalog, ProvinceCategory, ProvinceTaxInfo, Registration};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Outcome of a successful campaign registration.
#[derive(Debug)]
pub struct RegistrationResult {
    /// The persisted registration row
    pub registration: Registration,
    /// Every province in the campaign with its tax reduction
    pub tax_deductions: Vec<ProvinceTaxInfo>,
    /// Secondary-category provinces only (the enhanced incentive)
    pub highlight: Vec<ProvinceTaxInfo>,
}

/// Campaign service trait for dependency injection.
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Register the authenticated user for travel to a province.
    async fn register(
        &self,
        username: &str,
        full_name: String,
        id_card_number: String,
        target_province: String,
    ) -> AppResult<RegistrationResult>;
}

/// Concrete implementation of CampaignService using the Unit of Work.
pub struct CampaignManager<U: UnitOfWork> {
    uow: Arc<U>,
    provinces: Arc<ProvinceCatalog>,
}

impl<U: UnitOfWork> CampaignManager<U> {
    /// Create new campaign service instance
    pub fn new(uow: Arc<U>, provinces: Arc<ProvinceCatalog>) -> Self {
        Self { uow, provinces }
    }
}

#[async_trait]
impl<U: UnitOfWork> CampaignService for CampaignManager<U> {
    async fn register(
        &self,
        username: &str,
        full_name: String,
        id_card_number: String,
        target_province: String,
    ) -> AppResult<RegistrationResult> {
        // The HTTP boundary already validated the shape; the invariant is
        // re-asserted here so no caller can bypass it.
        if !ID_CARD_PATTERN.is_match(&id_card_number) {
            return Err(AppError::validation(
                "id_card_number must be exactly 13 digits",
            ));
        }

        // Registrations accept canonical province names only. The
        // alias/index fallback of the read endpoint does not apply here.
        if !self.provinces.contains(&target_province) {
            return Err(AppError::not_found("Province"));
        }

        let owner = self
            .uow
            .users()
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let registration = self
            .uow
            .registrations()
            .create(full_name, id_card_number, target_province, owner.id)
            .await?;

        tracing::info!(
            username = %owner.username,
            province = %registration.target_province,
            "campaign registration created"
        );

        let tax_deductions = self
            .provinces
            .iter()
            .map(|(name, info)| ProvinceTaxInfo::new(name, info))
            .collect();

        let highlight = self
            .provinces
            .iter()
            .filter(|(_, info)| info.category == ProvinceCategory::Secondary)
            .map(|(name, info)| ProvinceTaxInfo::new(name, info))
            .collect();

        Ok(RegistrationResult {
            registration,
            tax_deductions,
            highlight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::User;
    use crate::infra::repositories::{MockRegistrationRepository, MockUserRepository};
    use crate::infra::{RegistrationRepository, UserRepository};

    struct TestUnitOfWork {
        user_repo: Arc<MockUserRepository>,
        registration_repo: Arc<MockRegistrationRepository>,
    }

    impl TestUnitOfWork {
        fn new(user_repo: MockUserRepository, registration_repo: MockRegistrationRepository) -> Self {
            Self {
                user_repo: Arc::new(user_repo),
                registration_repo: Arc::new(registration_repo),
            }
        }
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.user_repo.clone()
        }

        fn registrations(&self) -> Arc<dyn RegistrationRepository> {
            self.registration_repo.clone()
        }
    }

    fn test_user(username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
        }
    }

    fn service_with(
        user_repo: MockUserRepository,
        registration_repo: MockRegistrationRepository,
    ) -> CampaignManager<TestUnitOfWork> {
        CampaignManager::new(
            Arc::new(TestUnitOfWork::new(user_repo, registration_repo)),
            Arc::new(ProvinceCatalog::new()),
        )
    }

    #[tokio::test]
    async fn register_persists_and_composes_result() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(|username| Ok(Some(test_user(username))));

        let mut registration_repo = MockRegistrationRepository::new();
        registration_repo.expect_create().returning(
            |full_name, id_card_number, target_province, owner_id| {
                Ok(Registration {
                    id: Uuid::new_v4(),
                    full_name,
                    id_card_number,
                    target_province,
                    owner_id,
                    created_at: Utc::now(),
                })
            },
        );

        let service = service_with(user_repo, registration_repo);
        let result = service
            .register(
                "alice",
                "Alice Smith".to_string(),
                "1234567890123".to_string(),
                "น่าน".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(result.registration.target_province, "น่าน");
        assert_eq!(result.tax_deductions.len(), 9);
        assert_eq!(result.highlight.len(), 5);
        assert!(result
            .highlight
            .iter()
            .all(|entry| entry.province_type == ProvinceCategory::Secondary));
        assert!(result
            .highlight
            .iter()
            .any(|entry| entry.province_name == "น่าน"));
    }

    #[tokio::test]
    async fn register_rejects_malformed_id_card() {
        let service = service_with(
            MockUserRepository::new(),
            MockRegistrationRepository::new(),
        );

        let result = service
            .register(
                "alice",
                "Alice Smith".to_string(),
                "12345".to_string(),
                "น่าน".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn register_rejects_unknown_province() {
        let service = service_with(
            MockUserRepository::new(),
            MockRegistrationRepository::new(),
        );

        let result = service
            .register(
                "alice",
                "Alice Smith".to_string(),
                "1234567890123".to_string(),
                "atlantis".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn register_rejects_alias_and_index_keys() {
        // Aliases and indices resolve on the read endpoint, but a
        // registration must name the canonical province.
        let catalog = ProvinceCatalog::new();
        assert!(catalog.resolve("nan").is_some());
        assert!(catalog.resolve("1").is_some());

        for key in ["nan", "1"] {
            let service = service_with(
                MockUserRepository::new(),
                MockRegistrationRepository::new(),
            );
            let result = service
                .register(
                    "alice",
                    "Alice Smith".to_string(),
                    "1234567890123".to_string(),
                    key.to_string(),
                )
                .await;

            assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn register_rejects_unresolvable_identity() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_username().returning(|_| Ok(None));

        let service = service_with(user_repo, MockRegistrationRepository::new());
        let result = service
            .register(
                "ghost",
                "Ghost User".to_string(),
                "1234567890123".to_string(),
                "น่าน".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }
}
