use serde::{Deserialize, Serialize};

/// Scheme tag echoed in every auth envelope.
pub const TOKEN_TYPE: &str = "bearer";

/// Signed into every access token. `sub` is the user id, `jti` is what the
/// denylist keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// What `issue` hands back: the encoded token plus its lifetime in seconds,
/// which login/refresh echo as `expires_in`.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}
