use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, FieldErrors};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserUpdate, MessageRes, RUserUpdate};
use crate::utils::policy::{can, Action};
use crate::utils::webutils::Actor;
use crate::utils::{password, validate};

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    actor: Actor,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<MessageRes> {
    let id = path.into_inner();
    can(Action::Update, actor.id(), id).require()?;

    let mut errors = FieldErrors::default();
    let name = validate::name(body.name.as_deref(), &mut errors);
    let email = validate::email(body.email.as_deref(), &mut errors);
    // absent password means keep the current one
    let pass = validate::password(body.password.as_deref(), false, &mut errors);

    if let Some(ref email) = email {
        if db.email_taken(email, Some(id)).await? {
            errors.push("email", validate::EMAIL_TAKEN);
        }
    }

    let (name, email) = match (name, email) {
        (Some(n), Some(e)) if errors.is_empty() => (n, e),
        _ => return Err(AppError::Validation(errors)),
    };

    let password_hash = match pass {
        Some(p) => Some(
            password::hash(&p)
                .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?,
        ),
        None => None,
    };

    db.update_user(DBUserUpdate {
        id,
        name,
        email,
        password_hash,
    })
    .await?;

    Ok(ApiResponse::Ok(MessageRes {
        status: "success".to_string(),
        message: "User updated successfully".to_string(),
    }))
}
