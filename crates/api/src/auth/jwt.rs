//! Access-token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. They are not
//! persisted: verification is a pure function of the signing key, the token
//! and the current time.

use std::fmt;

use chrono::Utc;
use filmlib_core::roles::Role;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The account's role.
    pub role: Role,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Signing key and token lifetime.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Lifetime of tokens issued at sign-in.
    pub token_ttl: chrono::Duration,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("cannot sign token")]
    CannotSign(#[source] jsonwebtoken::errors::Error),

    /// Bad signature, wrong algorithm, malformed payload, or expired.
    #[error("cannot parse token")]
    CannotParse,
}

/// Issue a token for `role` valid for `ttl` from now.
pub fn issue_token(
    role: Role,
    ttl: chrono::Duration,
    config: &JwtConfig,
) -> Result<String, TokenError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        role,
        iat: now,
        exp: now + ttl.num_seconds(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(TokenError::CannotSign)
}

/// Issue a token for `role` with the configured lifetime.
pub fn issue_access_token(role: Role, config: &JwtConfig) -> Result<String, TokenError> {
    issue_token(role, config.token_ttl, config)
}

/// Verify a token and return the role it carries.
///
/// Only HS256 is accepted. There is no leeway: a token is rejected at or
/// after its `exp` second.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Role, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
        TokenError::CannotParse
    })?;

    if data.claims.exp <= Utc::now().timestamp() {
        tracing::debug!(exp = data.claims.exp, "Token rejected: expired");
        return Err(TokenError::CannotParse);
    }

    Ok(data.claims.role)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_ttl: chrono::Duration::minutes(15),
        }
    }

    fn sign_raw<T: Serialize>(claims: &T, alg: Algorithm, secret: &str) -> String {
        encode(
            &Header::new(alg),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    #[test]
    fn test_issue_and_verify() {
        let config = test_config();
        for role in [Role::Admin, Role::User] {
            let token = issue_access_token(role, &config).expect("token issuance should succeed");
            assert_eq!(verify_token(&token, &config).unwrap(), role);
        }
    }

    #[test]
    fn test_claims_shape() {
        let config = test_config();
        let token = issue_access_token(Role::User, &config).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let claims = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(config.secret.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(claims["role"], "user");
        let iat = claims["iat"].as_i64().unwrap();
        let exp = claims["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 15 * 60);
    }

    #[test]
    fn test_zero_ttl_is_already_expired() {
        let config = test_config();
        let token = issue_token(Role::Admin, chrono::Duration::zero(), &config).unwrap();
        assert_matches!(verify_token(&token, &config), Err(TokenError::CannotParse));
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            role: Role::User,
            iat: now - 600,
            exp: now - 1,
        };
        let token = sign_raw(&claims, Algorithm::HS256, &config.secret);

        assert!(verify_token(&token, &config).is_err(), "expired token must fail");
    }

    #[test]
    fn test_tampering_any_byte_fails() {
        let config = test_config();
        let token = issue_access_token(Role::User, &config).unwrap();

        for i in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            // 'A' and 'Q' differ in the high bits of a base64 sextet, so the
            // substitution always changes the decoded bytes.
            bytes[i] = if bytes[i] == b'A' { b'Q' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            assert!(
                verify_token(&tampered, &config).is_err(),
                "tampering byte {i} must invalidate the token"
            );
        }
    }

    #[test]
    fn test_different_secret_fails() {
        let token = issue_access_token(Role::Admin, &test_config()).unwrap();
        let other = JwtConfig {
            secret: "secret-bravo".to_string(),
            ..test_config()
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_other_hmac_algorithm_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            role: Role::Admin,
            iat: now,
            exp: now + 600,
        };
        let token = sign_raw(&claims, Algorithm::HS512, &config.secret);

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_unknown_role_claim_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = serde_json::json!({ "role": "root", "iat": now, "exp": now + 600 });
        let token = sign_raw(&claims, Algorithm::HS256, &config.secret);

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let config = test_config();
        for token in ["", "not-a-token", "a.b.c"] {
            assert!(verify_token(token, &config).is_err(), "{token:?}");
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains("test-secret"));
    }
}
