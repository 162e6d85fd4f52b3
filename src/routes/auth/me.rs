use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{MeRes, UserPublic};
use crate::utils::webutils::Actor;

#[get("")]
async fn me(_req: actix_web::HttpRequest, actor: Actor) -> ApiResult<MeRes> {
    Ok(ApiResponse::Ok(MeRes {
        status: "success".to_string(),
        user: UserPublic::from(&actor.user),
    }))
}
