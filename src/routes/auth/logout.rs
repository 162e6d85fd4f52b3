use actix_web::{post, web};

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::MessageRes;
use crate::utils::token::Denylist;
use crate::utils::webutils::Actor;

#[post("")]
async fn logout(
    _req: actix_web::HttpRequest,
    actor: Actor,
    denylist: web::Data<Denylist>,
) -> ApiResult<MessageRes> {
    // dead from here on, even though its expiry hasn't passed
    denylist.revoke(&actor.claims.jti, actor.claims.exp);

    Ok(ApiResponse::Ok(MessageRes {
        status: "success".to_string(),
        message: "Successfully logged out".to_string(),
    }))
}
