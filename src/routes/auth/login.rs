use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, FieldErrors};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TOKEN_TYPE;
use crate::types::user::{ExpiringTokenGrant, LoginRes, RLogin, UserPublic};
use crate::utils::{password, token, validate};

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let mut errors = FieldErrors::default();
    let email = validate::email(body.email.as_deref(), &mut errors);
    let pass = validate::required(body.password.as_deref(), "password", &mut errors);

    let (email, pass) = match (email, pass) {
        (Some(e), Some(p)) if errors.is_empty() => (e, p),
        _ => return Err(AppError::Validation(errors)),
    };

    // unknown email and wrong password must be indistinguishable
    let user = match db.find_user_by_email(&email).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    if !password::verify(&pass, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let cfg = config();
    let issued = token::issue(user.id, &cfg.jwt_secret, cfg.token_ttl_minutes)?;

    Ok(ApiResponse::Accepted(LoginRes {
        status: "success".to_string(),
        user: UserPublic::from(&user),
        authorization: ExpiringTokenGrant {
            token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: issued.expires_in,
        },
    }))
}
