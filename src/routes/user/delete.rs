use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::MessageRes;
use crate::utils::policy::{can, Action};
use crate::utils::webutils::Actor;

#[delete("/{id}")]
async fn delete_user(
    _req: actix_web::HttpRequest,
    actor: Actor,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<MessageRes> {
    let id = path.into_inner();
    can(Action::Delete, actor.id(), id).require()?;

    // hard delete; a second attempt 404s the same way
    db.delete_user(&id).await?;

    Ok(ApiResponse::Ok(MessageRes {
        status: "success".to_string(),
        message: "User deleted successfully".to_string(),
    }))
}
