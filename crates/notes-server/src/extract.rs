//! User identity extraction from the session token.
//!
//! The notes service does not authenticate users itself; the session
//! provider issues an HS256 JWT whose `sub` claim is the user's id. This
//! extractor validates the token and hands every handler the owning
//! `UserId` as an explicit value, so no handler reads ambient session
//! state.

use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{Algorithm, DecodingKey, TokenData, Validation};
use notes_core::UserId;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Session token claims.
#[derive(Debug, Deserialize)]
pub struct Claims {
    /// Subject — the user id as a UUID string.
    pub sub: String,
    /// Issuer.
    #[serde(default)]
    pub iss: Option<String>,
}

/// Extracts the authenticated UserId from a JWT Bearer token or the
/// X-User-Id header (dev fallback).
///
/// Priority:
/// 1. `Authorization: Bearer <jwt>` — validates the signature and expiry,
///    parses the `sub` claim as the UserId.
/// 2. `X-User-Id` header — only if `allow_dev_identity` is true in config.
/// 3. Otherwise returns `Unauthorized`.
///
/// A syntactically invalid user id is rejected here with a 400, before
/// any handler runs a query with it.
#[derive(Debug, Clone, Copy)]
pub struct UserIdentity(pub UserId);

impl FromRequestParts<AppState> for UserIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let config = state.config();

        // Try JWT Bearer token first
        if let Some(auth_header) = parts.headers.get("Authorization") {
            let auth_str = auth_header.to_str().map_err(|_| {
                ApiError::Unauthorized("Authorization header contains invalid characters".into())
            })?;

            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return extract_from_jwt(token.trim(), config);
            }
        }

        // Fall back to X-User-Id header (dev mode only)
        if config.allow_dev_identity {
            return extract_from_dev_header(parts);
        }

        Err(ApiError::Unauthorized(
            "Missing Authorization: Bearer <jwt> header".into(),
        ))
    }
}

/// Validate the JWT and extract the UserId from its claims.
fn extract_from_jwt(
    token: &str,
    config: &crate::config::ServerConfig,
) -> Result<UserIdentity, ApiError> {
    if config.jwt_secret.is_empty() {
        return Err(ApiError::Internal(
            "JWT_SECRET not configured on server".into(),
        ));
    }

    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data: TokenData<Claims> =
        jsonwebtoken::decode(token, &key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "Session token validation failed");
            ApiError::Unauthorized(format!("Invalid token: {}", e))
        })?;

    let user_id = parse_user_id(&token_data.claims.sub)?;
    Ok(UserIdentity(user_id))
}

/// Extract the UserId from the X-User-Id header (dev mode fallback).
fn extract_from_dev_header(parts: &Parts) -> Result<UserIdentity, ApiError> {
    let Some(header_value) = parts.headers.get("X-User-Id") else {
        return Err(ApiError::Unauthorized(
            "Missing X-User-Id header (dev mode)".into(),
        ));
    };

    let id_str = header_value.to_str().map_err(|_| {
        ApiError::BadRequest("X-User-Id header contains invalid characters".to_string())
    })?;

    let user_id = parse_user_id(id_str)?;
    tracing::debug!(user_id = %user_id, "Using dev identity from X-User-Id header");
    Ok(UserIdentity(user_id))
}

/// Parse a UUID string into a UserId, rejecting malformed input.
fn parse_user_id(s: &str) -> Result<UserId, ApiError> {
    s.parse::<UserId>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid user id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::EncodingKey;
    use uuid::Uuid;

    const TEST_SECRET: &str = "test-secret-for-unit-tests";

    fn test_config(secret: &str, allow_dev: bool) -> crate::config::ServerConfig {
        crate::config::ServerConfig {
            database_url: String::new(),
            port: 3000,
            log_level: "info".into(),
            cors_allowed_origins: "*".into(),
            jwt_secret: secret.to_string(),
            allow_dev_identity: allow_dev,
        }
    }

    fn create_test_token(sub: &str, secret: &str) -> String {
        let key = EncodingKey::from_secret(secret.as_bytes());
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = serde_json::json!({
            "sub": sub,
            "iss": "notes-session",
            "exp": now + 3600,
            "iat": now,
        });
        let header = jsonwebtoken::Header::new(Algorithm::HS256);
        jsonwebtoken::encode(&header, &claims, &key).unwrap()
    }

    #[test]
    fn test_parse_user_id_valid() {
        let id = Uuid::new_v4().to_string();
        assert!(parse_user_id(&id).is_ok());
    }

    #[test]
    fn test_parse_user_id_malformed_is_bad_request() {
        let err = parse_user_id("definitely-not-a-uuid").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_extract_from_jwt_valid_token() {
        let user = Uuid::new_v4();
        let token = create_test_token(&user.to_string(), TEST_SECRET);
        let config = test_config(TEST_SECRET, false);

        let identity = extract_from_jwt(&token, &config).unwrap();
        assert_eq!(*identity.0.as_uuid(), user);
    }

    #[test]
    fn test_extract_from_jwt_wrong_secret() {
        let token = create_test_token(&Uuid::new_v4().to_string(), "other-secret");
        let config = test_config(TEST_SECRET, false);

        let err = extract_from_jwt(&token, &config).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_extract_from_jwt_malformed_sub() {
        let token = create_test_token("attacker-id", TEST_SECRET);
        let config = test_config(TEST_SECRET, false);

        let err = extract_from_jwt(&token, &config).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_extract_from_jwt_no_secret_configured() {
        let config = test_config("", false);
        let result = extract_from_jwt("some.token.here", &config);
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
