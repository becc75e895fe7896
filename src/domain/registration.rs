//! Campaign registration domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Campaign registration domain entity.
///
/// Registrations are immutable once created. A user may hold any number of
/// them; each references its owning user by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub full_name: String,
    pub id_card_number: String,
    pub target_province: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Registration response (the persisted fields echoed to the client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationInfo {
    /// Unique registration identifier
    #[schema(example = "7f2c1a4e-9d3b-4f6a-8c5e-012345678901")]
    pub id: Uuid,
    /// Registrant full name
    #[schema(example = "Somchai Jaidee")]
    pub full_name: String,
    /// 13-digit national id card number
    #[schema(example = "1234567890123")]
    pub id_card_number: String,
    /// Canonical province name the registrant will travel to
    #[schema(example = "น่าน")]
    pub target_province: String,
    /// Owning user id
    pub owner_id: Uuid,
}

impl From<Registration> for RegistrationInfo {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id,
            full_name: registration.full_name,
            id_card_number: registration.id_card_number,
            target_province: registration.target_province,
            owner_id: registration.owner_id,
        }
    }
}
