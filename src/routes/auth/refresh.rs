use actix_web::post;

use crate::config::config;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TOKEN_TYPE;
use crate::types::user::{ExpiringTokenGrant, LoginRes, UserPublic};
use crate::utils::token;
use crate::utils::webutils::Actor;

// The old token is not revoked here; it runs out its own expiry.
#[post("")]
async fn refresh(_req: actix_web::HttpRequest, actor: Actor) -> ApiResult<LoginRes> {
    let cfg = config();
    let issued = token::issue(actor.id(), &cfg.jwt_secret, cfg.token_ttl_minutes)?;

    Ok(ApiResponse::Ok(LoginRes {
        status: "success".to_string(),
        user: UserPublic::from(&actor.user),
        authorization: ExpiringTokenGrant {
            token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: issued.expires_in,
        },
    }))
}
