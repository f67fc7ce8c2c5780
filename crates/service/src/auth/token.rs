use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct TokenConfig {
    pub jwt_secret: String,
    pub ttl_hours: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Account email
    pub sub: String,
    pub uid: Uuid,
    pub roles: Vec<String>,
    pub exp: usize,
}

pub fn issue(cfg: &TokenConfig, uid: Uuid, email: &str, roles: Vec<String>) -> Result<String, ServiceError> {
    let exp = (Utc::now() + Duration::hours(cfg.ttl_hours)).timestamp() as usize;
    let claims = Claims { sub: email.to_string(), uid, roles, exp };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()))
        .map_err(|e| ServiceError::Unauthorized(format!("token encode failed: {e}")))
}

/// Decode and check signature and expiry.
pub fn verify(cfg: &TokenConfig, token: &str) -> Result<Claims, ServiceError> {
    decode::<Claims>(token, &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()), &Validation::new(Algorithm::HS256))
        .map(|data| data.claims)
        .map_err(|e| ServiceError::Unauthorized(format!("invalid token: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(secret: &str) -> TokenConfig { TokenConfig { jwt_secret: secret.into(), ttl_hours: 1 } }

    #[test]
    fn issue_then_verify() {
        let uid = Uuid::new_v4();
        let t = issue(&cfg("k"), uid, "a@b.c", vec!["admin".into()]).unwrap();
        let c = verify(&cfg("k"), &t).unwrap();
        assert_eq!(c.uid, uid);
        assert_eq!(c.sub, "a@b.c");
        assert_eq!(c.roles, vec!["admin"]);
    }

    #[test]
    fn wrong_secret_rejected() {
        let t = issue(&cfg("k1"), Uuid::new_v4(), "a@b.c", vec![]).unwrap();
        assert!(matches!(verify(&cfg("k2"), &t), Err(ServiceError::Unauthorized(_))));
    }

    #[test]
    fn expired_token_rejected() {
        let expired = TokenConfig { jwt_secret: "k".into(), ttl_hours: -2 };
        let t = issue(&expired, Uuid::new_v4(), "a@b.c", vec![]).unwrap();
        assert!(verify(&cfg("k"), &t).is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(verify(&cfg("k"), "not.a.jwt").is_err());
    }
}
