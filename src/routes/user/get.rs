use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use crate::utils::policy::{can, Action};
use crate::utils::webutils::Actor;

#[get("/{id}")]
async fn get_user(
    _req: actix_web::HttpRequest,
    actor: Actor,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<UserRes> {
    let id = path.into_inner();

    // absent rows 404 before the ownership question comes up
    let user = db.find_user_by_id(&id).await?;
    can(Action::View, actor.id(), id).require()?;

    Ok(ApiResponse::Ok(UserRes {
        status: "success".to_string(),
        data: user,
    }))
}
