use actix_web::{web, App};
use entity::user::Model as UserModel;
use roster_auth::db::postgres_service::PostgresService;
use roster_auth::types::user::DBUserCreate;
use roster_auth::utils::password;
use roster_auth::utils::token::{self, Denylist};
use std::sync::Arc;
use uuid::Uuid;

use super::{TEST_JWT_SECRET, TEST_TTL_MINUTES};

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "secret1";

pub struct TestClient {
    pub db: Arc<PostgresService>,
    denylist: web::Data<Denylist>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            denylist: web::Data::new(Denylist::default()),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(self.denylist.clone())
            .configure(roster_auth::routes::configure_routes)
    }

    /// Seed a user row directly and mint a valid token for it. Password is
    /// always TEST_PASSWORD.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> (UserModel, String) {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password_hash = password::hash(TEST_PASSWORD).expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                name: "Test User".to_string(),
                email,
                password_hash,
            })
            .await
            .expect("Failed to create user");

        let issued = token::issue(user.id, TEST_JWT_SECRET, TEST_TTL_MINUTES)
            .expect("Failed to issue token");

        (user, issued.token)
    }
}
