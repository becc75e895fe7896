//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and reach the repositories through the
//! Unit of Work.

mod auth_service;
mod campaign_service;
mod container;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use campaign_service::{CampaignManager, CampaignService, RegistrationResult};
pub use user_service::{UserManager, UserService};
