use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, FieldErrors};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TOKEN_TYPE;
use crate::types::user::{DBUserCreate, RRegister, RegisterRes, TokenGrant, UserPublic};
use crate::utils::{password, token, validate};

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRegister>,
) -> ApiResult<RegisterRes> {
    let mut errors = FieldErrors::default();
    let name = validate::name(body.name.as_deref(), &mut errors);
    let email = validate::email(body.email.as_deref(), &mut errors);
    let pass = validate::password(body.password.as_deref(), true, &mut errors);

    if let Some(ref email) = email {
        if db.email_taken(email, None).await? {
            errors.push("email", validate::EMAIL_TAKEN);
        }
    }

    let (name, email, pass) = match (name, email, pass) {
        (Some(n), Some(e), Some(p)) if errors.is_empty() => (n, e, p),
        _ => return Err(AppError::Validation(errors)),
    };

    let password_hash = password::hash(&pass)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            name,
            email,
            password_hash,
        })
        .await?;

    let cfg = config();
    let issued = token::issue(user.id, &cfg.jwt_secret, cfg.token_ttl_minutes)?;

    Ok(ApiResponse::Created(RegisterRes {
        status: "success".to_string(),
        message: "User created successfully".to_string(),
        user: UserPublic::from(&user),
        authorisation: TokenGrant {
            token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
        },
    }))
}
