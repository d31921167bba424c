use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{AError, AResult, AppState};

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Privilege level carried by a user record and by every issued token.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Standard,
    Admin,
}

/// Claim set embedded in every access token. Trusted verbatim once the
/// signature and expiry check pass; the role reflects the user record as it
/// was at login time, not as it is now.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username of the authenticated caller
    pub role: Role,
    pub exp: i64, // expiry as a unix timestamp
}

#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, token_ttl: Duration) -> Self {
        AuthConfig {
            secret: secret.into(),
            token_ttl,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let secret = std::env::var("SECRET_KEY")
            .map_err(|_| anyhow::Error::msg("SECRET_KEY environment variable not set"))?;

        let ttl_minutes = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);

        Ok(AuthConfig::new(secret, Duration::minutes(ttl_minutes)))
    }

    pub fn issue_token(&self, username: &str, role: Role) -> AResult<String> {
        let claims = Claims {
            sub: username.to_owned(),
            role,
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    pub fn verify_token(&self, token: &str) -> AResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; the default 60s leeway would keep expired tokens alive.
        validation.leeway = 0;

        match decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Err(AError::TokenExpired),
                _ => Err(AError::TokenInvalid),
            },
        }
    }
}

// Handlers take `Claims` as an argument to require a verified caller;
// requests without a valid bearer token are rejected before the handler runs.
#[axum::async_trait]
impl FromRequestParts<AppState> for Claims {
    type Rejection = AError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AError::TokenInvalid)?;

        let token = header.strip_prefix("Bearer ").ok_or(AError::TokenInvalid)?;

        state.auth.verify_token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::new("test-secret", Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let config = test_config();

        let token = config.issue_token("alice", Role::Standard).unwrap();
        let claims = config.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, Role::Standard);

        let token = config.issue_token("bob", Role::Admin).unwrap();
        let claims = config.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "bob");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let other = AuthConfig::new("other-secret", Duration::minutes(30));

        // A token minted under another secret must fail the signature check,
        // even if its claims grant admin.
        let forged = other.issue_token("mallory", Role::Admin).unwrap();
        assert!(matches!(
            config.verify_token(&forged),
            Err(AError::TokenInvalid)
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = test_config();
        let token = config.issue_token("alice", Role::Standard).unwrap();

        // Rewrite the payload segment; the signature no longer matches.
        let mut parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        let other = AuthConfig::new("test-secret", Duration::minutes(30))
            .issue_token("alice", Role::Admin)
            .unwrap();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let tampered = parts.join(".");

        assert!(matches!(
            config.verify_token(&tampered),
            Err(AError::TokenInvalid)
        ));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let config = test_config();
        assert!(matches!(
            config.verify_token("not-a-token"),
            Err(AError::TokenInvalid)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = AuthConfig::new("test-secret", Duration::minutes(-5));

        let token = config.issue_token("alice", Role::Standard).unwrap();
        assert!(matches!(
            config.verify_token(&token),
            Err(AError::TokenExpired)
        ));
    }

    #[test]
    fn test_token_valid_until_ttl() {
        let config = AuthConfig::new("test-secret", Duration::seconds(60));

        let token = config.issue_token("alice", Role::Standard).unwrap();
        assert!(config.verify_token(&token).is_ok());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"standard\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }
}
