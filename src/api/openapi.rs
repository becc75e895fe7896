//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{campaign_handler, user_handler};
use crate::domain::{ProvinceCategory, ProvinceTaxInfo, RegistrationInfo, UserResponse};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Travel Campaign API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel Campaign API",
        version = "0.1.0",
        description = "Travel incentive campaign signups and per-province tax-reduction lookups",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::register_user,
        user_handler::login,
        user_handler::me,
        // Campaign endpoints
        campaign_handler::list_provinces,
        campaign_handler::get_province,
        campaign_handler::register_for_campaign,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            ProvinceCategory,
            ProvinceTaxInfo,
            RegistrationInfo,
            TokenResponse,
            // Request/response types
            user_handler::RegisterUserRequest,
            user_handler::LoginForm,
            campaign_handler::CampaignRegisterRequest,
            campaign_handler::CampaignRegisterResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User registration and login"),
        (name = "Campaign", description = "Province lookups and campaign registration")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /users/token"))
                        .build(),
                ),
            );
        }
    }
}
