/// Authentication service - JWT and password handling
use crate::error::{Result, ServerError};
use chorus_core::UserId;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issues and verifies the access/refresh token pair and handles
/// password hashing
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time
    pub exp: i64,
    /// Issued at
    pub iat: i64,
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl AuthService {
    pub fn new(secret: &str, access_ttl_hours: u64, refresh_ttl_days: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_ttl: Duration::hours(access_ttl_hours as i64),
            refresh_token_ttl: Duration::days(refresh_ttl_days as i64),
        }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Issue an access token
    pub fn issue_access_token(&self, user_id: &UserId) -> Result<String> {
        self.issue_token(user_id, TokenType::Access, self.access_token_ttl)
    }

    /// Issue a refresh token
    pub fn issue_refresh_token(&self, user_id: &UserId) -> Result<String> {
        self.issue_token(user_id, TokenType::Refresh, self.refresh_token_ttl)
    }

    /// Verify an access token and extract the principal
    pub fn verify_access_token(&self, token: &str) -> Result<UserId> {
        let claims = self.verify_token(token)?;
        if claims.token_type != TokenType::Access {
            return Err(ServerError::Auth("Invalid token type".to_string()));
        }
        Ok(UserId::new(claims.sub))
    }

    /// Verify a refresh token and extract the principal
    pub fn verify_refresh_token(&self, token: &str) -> Result<UserId> {
        let claims = self.verify_token(token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(ServerError::Auth("Invalid token type".to_string()));
        }
        Ok(UserId::new(claims.sub))
    }

    fn verify_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn issue_token(
        &self,
        user_id: &UserId,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String> {
        let now = Utc::now();

        let claims = Claims {
            sub: user_id.as_str().to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(ServerError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hashing_round_trip() {
        let auth = AuthService::new("secret", 24, 30);

        let hash = auth.hash_password("my_secure_password").unwrap();
        assert!(auth.verify_password("my_secure_password", &hash).unwrap());
        assert!(!auth.verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn token_issue_and_verify() {
        let auth = AuthService::new("secret", 24, 30);
        let user_id = UserId::new("user-123");

        let access = auth.issue_access_token(&user_id).unwrap();
        assert_eq!(auth.verify_access_token(&access).unwrap(), user_id);

        let refresh = auth.issue_refresh_token(&user_id).unwrap();
        assert_eq!(auth.verify_refresh_token(&refresh).unwrap(), user_id);
    }

    #[test]
    fn token_types_do_not_cross() {
        let auth = AuthService::new("secret", 24, 30);
        let user_id = UserId::new("user-123");

        let access = auth.issue_access_token(&user_id).unwrap();
        assert!(auth.verify_refresh_token(&access).is_err());

        let refresh = auth.issue_refresh_token(&user_id).unwrap();
        assert!(auth.verify_access_token(&refresh).is_err());
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let auth = AuthService::new("secret", 24, 30);
        assert!(auth.verify_access_token("not-a-token").is_err());

        // Signed with a different secret
        let other = AuthService::new("other-secret", 24, 30);
        let token = other.issue_access_token(&UserId::new("user-123")).unwrap();
        assert!(auth.verify_access_token(&token).is_err());
    }
}
