//! JWT validation.
//!
//! Tokens are issued by an external identity provider; this service only
//! validates them. The shared secret comes from the `JWT_SECRET`
//! environment variable.

use jsonwebtoken::{decode, DecodingKey, Validation};
use recap_core::types::OwnerId;
use serde::{Deserialize, Serialize};

/// Claims carried by each access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the owner's id.
    pub sub: OwnerId,
    /// Expiry time (unix seconds).
    pub exp: i64,
    /// Issued-at time (unix seconds).
    pub iat: i64,
}

/// JWT validation settings.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret shared with the identity provider.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT settings from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        Self { secret }
    }
}

/// Decode and validate a token, returning its claims.
///
/// Checks the HMAC signature and the `exp` claim.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use jsonwebtoken::errors::ErrorKind;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        }
    }

    fn mint(sub: OwnerId, exp_offset_secs: i64, secret: &str) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub,
            exp: now + exp_offset_secs,
            iat: now,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_roundtrips_subject() {
        let config = test_config();
        let owner = Uuid::new_v4();
        let token = mint(owner, 3600, &config.secret);

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, owner);
    }

    #[test]
    fn expired_token_rejected() {
        let config = test_config();
        let token = mint(Uuid::new_v4(), -3600, &config.secret);

        let err = validate_token(&token, &config).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::ExpiredSignature);
    }

    #[test]
    fn wrong_secret_rejected() {
        let config = test_config();
        let token = mint(Uuid::new_v4(), 3600, "a-completely-different-secret");

        let err = validate_token(&token, &config).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::InvalidSignature);
    }

    #[test]
    fn garbage_token_rejected() {
        let config = test_config();

        assert!(validate_token("not.a.jwt", &config).is_err());
    }
}
