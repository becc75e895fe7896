//! Authentication service - Handles signup, login and token verification.
//!
//! Tokens are stateless HS256 JWTs carrying the username as subject.
//! Validation proves the token only; callers re-resolve the subject
//! against the credential store before trusting it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{Config, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "bearer")
    #[schema(example = "bearer")]
    pub token_type: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, email: String, password: String)
        -> AppResult<User>;

    /// Login and return a bearer token bound to the username
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a JWT and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a signed JWT for a subject, expiring `ttl_minutes` from now.
fn generate_token(subject: &str, secret: &[u8], ttl_minutes: i64) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(ttl_minutes);

    let claims = Claims {
        sub: subject.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
    })
}

/// Decode and verify a JWT (signature and expiry).
fn decode_token(token: &str, secret: &[u8]) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Hash verified against when the username does not exist, so unknown
/// usernames cost the same as wrong passwords.
static DUMMY_PASSWORD_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("timing-equalizer-placeholder")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Concrete implementation of AuthService using the Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        // Friendly duplicate check; the unique index in the store is the
        // authoritative (atomic) one.
        if self
            .uow
            .users()
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.uow.users().create(username, email, password_hash).await?;

        tracing::info!(username = %user.username, "user registered");
        Ok(user)
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.uow.users().find_by_username(&username).await?;

        // Verify against a dummy hash when the user is missing, to avoid
        // a timing side channel that enumerates usernames.
        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (DUMMY_PASSWORD_HASH.as_str(), false),
        };

        let password_valid = Password::from_hash(password_hash.to_string()).verify(&password);

        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        generate_token(
            &username,
            self.config.jwt_secret_bytes(),
            self.config.token_ttl_minutes,
        )
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        decode_token(token, self.config.jwt_secret_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    #[test]
    fn token_round_trip_preserves_subject() {
        let token = generate_token("alice", SECRET, 30).unwrap();
        assert_eq!(token.token_type, "bearer");

        let claims = decode_token(&token.access_token, SECRET).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Expiry two minutes in the past, beyond the default 60s leeway
        let token = generate_token("alice", SECRET, -2).unwrap();

        let result = decode_token(&token.access_token, SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn token_within_ttl_still_validates() {
        let token = generate_token("alice", SECRET, 1).unwrap();
        assert!(decode_token(&token.access_token, SECRET).is_ok());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_token("alice", SECRET, 30).unwrap();

        let result = decode_token(&token.access_token, b"another-secret-key-of-enough-length");
        assert!(result.is_err());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = generate_token("alice", SECRET, 30).unwrap();
        let mut tampered = token.access_token;
        tampered.pop();

        assert!(decode_token(&tampered, SECRET).is_err());
    }
}
