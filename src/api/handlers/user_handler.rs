//! User handlers: signup, login and profile.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    /// Login name (unique)
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "pw123456", min_length = 8)]
    pub password: String,
}

/// Login form (OAuth2 password style)
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    /// Login name
    #[schema(example = "alice")]
    pub username: String,
    /// User password
    #[schema(example = "pw123456")]
    pub password: String,
}

/// Create user routes; `/me` sits behind the auth middleware
pub fn user_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(register_user))
        .route("/token", post(login))
        .merge(protected)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error or username already registered")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth_service
        .register(payload.username, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Login with username and password, receiving a bearer token
#[utoipa::path(
    post,
    path = "/users/token",
    tag = "Users",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(form.username, form.password)
        .await?;

    Ok(Json(token))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn me(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    // The token proves identity but not existence; re-resolve the subject
    let user = state
        .user_service
        .get_by_username(&current_user.username)
        .await?;

    Ok(Json(UserResponse::from(user)))
}
