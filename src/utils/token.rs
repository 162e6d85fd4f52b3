use crate::types::error::AppError;
use crate::types::token::{Claims, IssuedToken};
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Sign a fresh access token for `user_id`. Expiry is issued-at plus the TTL;
/// the jti is what logout later revokes.
pub fn issue(user_id: Uuid, secret: &str, ttl_minutes: i64) -> Result<IssuedToken, AppError> {
    let now = Utc::now().timestamp();
    let expires_in = ttl_minutes * 60;
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + expires_in,
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))?;

    Ok(IssuedToken { token, expires_in })
}

/// Check signature and expiry. Expiry is strict, no leeway.
pub fn verify(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    match decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => Err(AppError::TokenExpired),
            _ => Err(AppError::TokenInvalid),
        },
    }
}

/// Revoked token ids, kept until the token would have died on its own anyway.
/// Logout inserts here; the actor extractor consults it. In-process only.
#[derive(Default)]
pub struct Denylist {
    revoked: Mutex<HashMap<String, i64>>,
}

impl Denylist {
    pub fn revoke(&self, jti: &str, exp: i64) {
        let mut revoked = self.revoked.lock().unwrap();
        let now = Utc::now().timestamp();
        revoked.retain(|_, token_exp| *token_exp > now);
        revoked.insert(jti.to_string(), exp);
    }

    pub fn is_revoked(&self, jti: &str) -> bool {
        self.revoked.lock().unwrap().contains_key(jti)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let issued = issue(user_id, SECRET, 60).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let claims = verify(&issued.token, SECRET).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let issued = issue(Uuid::new_v4(), SECRET, 60).unwrap();
        let err = verify(&issued.token, "some-other-secret").unwrap_err();
        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn garbage_is_invalid() {
        let err = verify("definitely.not.a-jwt", SECRET).unwrap_err();
        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn past_expiry_is_expired() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: now - 7200,
            exp: now - 3600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verify(&token, SECRET).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn denylist_revokes_and_prunes() {
        let denylist = Denylist::default();
        let now = Utc::now().timestamp();

        denylist.revoke("live-token", now + 3600);
        assert!(denylist.is_revoked("live-token"));
        assert!(!denylist.is_revoked("never-seen"));

        // a long-dead entry gets swept by the next revoke
        denylist.revoke("dead-token", now - 10);
        denylist.revoke("another", now + 3600);
        assert!(!denylist.is_revoked("dead-token"));
        assert!(denylist.is_revoked("live-token"));
    }
}
