//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod registration_repository;
mod user_repository;

pub use registration_repository::{RegistrationRepository, RegistrationStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for unit tests
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
