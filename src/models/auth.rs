//! Bearer token claims

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by tokens from the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// Username
    pub sub: String,
    #[serde(default)]
    pub authorities: Vec<String>,
    pub exp: i64,
}

impl UserClaims {
    /// Sign claims (HS256)
    #[cfg(test)]
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Verify signature and expiry, then return the claims
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

/// Authentication status of the caller
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorities: Option<Vec<String>>,
}

impl From<Option<UserClaims>> for AuthStatus {
    fn from(claims: Option<UserClaims>) -> Self {
        match claims {
            Some(claims) => AuthStatus {
                authenticated: true,
                username: Some(claims.sub),
                authorities: Some(claims.authorities),
            },
            None => AuthStatus {
                authenticated: false,
                username: None,
                authorities: None,
            },
        }
    }
}
