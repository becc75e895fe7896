//! Campaign handlers: province lookups and registration.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::config::ID_CARD_PATTERN;
use crate::domain::{ProvinceTaxInfo, RegistrationInfo};
use crate::errors::{AppError, AppResult};
use crate::services::RegistrationResult;

/// Campaign registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CampaignRegisterRequest {
    /// Registrant full name
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "Somchai Jaidee")]
    pub full_name: String,
    /// 13-digit national id card number
    #[validate(regex(
        path = *ID_CARD_PATTERN,
        message = "id_card_number must be exactly 13 digits"
    ))]
    #[schema(example = "1234567890123")]
    pub id_card_number: String,
    /// Canonical name of the province to travel to
    #[schema(example = "น่าน")]
    pub target_province: String,
}

/// Campaign registration response
#[derive(Debug, Serialize, ToSchema)]
pub struct CampaignRegisterResponse {
    /// The persisted registration
    pub registration_info: RegistrationInfo,
    /// Tax reductions for every campaign province
    pub tax_deductions: Vec<ProvinceTaxInfo>,
    /// Secondary-category provinces (enhanced incentive)
    pub highlight: Vec<ProvinceTaxInfo>,
}

impl From<RegistrationResult> for CampaignRegisterResponse {
    fn from(result: RegistrationResult) -> Self {
        Self {
            registration_info: RegistrationInfo::from(result.registration),
            tax_deductions: result.tax_deductions,
            highlight: result.highlight,
        }
    }
}

/// Create campaign routes; `/register` sits behind the auth middleware
pub fn campaign_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/register", post(register_for_campaign))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/provinces", get(list_provinces))
        .route("/provinces/:key", get(get_province))
        .merge(protected)
}

/// List all campaign provinces with their tax reductions
#[utoipa::path(
    get,
    path = "/campaign/provinces",
    tag = "Campaign",
    responses(
        (status = 200, description = "All campaign provinces", body = Vec<ProvinceTaxInfo>)
    )
)]
pub async fn list_provinces(State(state): State<AppState>) -> Json<Vec<ProvinceTaxInfo>> {
    let provinces = state
        .provinces
        .iter()
        .map(|(name, info)| ProvinceTaxInfo::new(name, info))
        .collect();

    Json(provinces)
}

/// Look up a single province by canonical name, alias or index
#[utoipa::path(
    get,
    path = "/campaign/provinces/{key}",
    tag = "Campaign",
    params(
        ("key" = String, Path, description = "Canonical name, romanized alias or position")
    ),
    responses(
        (status = 200, description = "Province entry", body = ProvinceTaxInfo),
        (status = 404, description = "Province not found")
    )
)]
pub async fn get_province(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ProvinceTaxInfo>> {
    let (name, info) = state
        .provinces
        .resolve(&key)
        .ok_or_else(|| AppError::not_found("Province"))?;

    Ok(Json(ProvinceTaxInfo::new(name, info)))
}

/// Register the authenticated user for the campaign
#[utoipa::path(
    post,
    path = "/campaign/register",
    tag = "Campaign",
    security(("bearer_auth" = [])),
    request_body = CampaignRegisterRequest,
    responses(
        (status = 201, description = "Registration created", body = CampaignRegisterResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Province not found")
    )
)]
pub async fn register_for_campaign(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CampaignRegisterRequest>,
) -> AppResult<(StatusCode, Json<CampaignRegisterResponse>)> {
    let result = state
        .campaign_service
        .register(
            &current_user.username,
            payload.full_name,
            payload.id_card_number,
            payload.target_province,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CampaignRegisterResponse::from(result)),
    ))
}
