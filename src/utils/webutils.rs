use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::token::Claims;
use crate::utils::token::{verify, Denylist};
use entity::user::Model as UserModel;

/// The authenticated caller, resolved once per request: bearer credential
/// verified, denylist consulted, subject row loaded. Handlers that take an
/// `Actor` are authenticated by construction.
pub struct Actor {
    pub user: UserModel,
    pub claims: Claims,
}

impl Actor {
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

impl FromRequest for Actor {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Actor, AppError>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            // no parseable bearer credential at all
            let bearer = BearerAuth::extract(&req)
                .await
                .map_err(|_| AppError::TokenAbsent)?;

            let claims = verify(bearer.token(), &config().jwt_secret)?;

            let denylist = req
                .app_data::<web::Data<Denylist>>()
                .ok_or_else(|| AppError::Internal("denylist not configured".to_string()))?;
            if denylist.is_revoked(&claims.jti) {
                return Err(AppError::TokenInvalid);
            }

            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::TokenInvalid)?;

            let db = req
                .app_data::<web::Data<Arc<PostgresService>>>()
                .ok_or_else(|| AppError::Internal("database not configured".to_string()))?;

            // the subject can have been deleted after the token was signed
            match db.find_user_by_id(&user_id).await {
                Ok(user) => Ok(Actor { user, claims }),
                Err(AppError::NotFound) => Err(AppError::SubjectNotFound),
                Err(e) => Err(e),
            }
        })
    }
}
