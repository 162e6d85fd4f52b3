use roster_auth::config::{EnvConfig, CONFIG};
use roster_auth::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";
pub const TEST_TTL_MINUTES: i64 = 60;

/// Handlers read the process-wide config, so install a test one before the
/// first request. Safe to call from every test; only the first call wins.
pub fn init_test_config() {
    CONFIG.get_or_init(|| EnvConfig {
        port: 8080,
        db_url: "unused-in-tests".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_ttl_minutes: TEST_TTL_MINUTES,
    });
}

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        init_test_config();

        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_register() -> Value {
        json!({
            "name": "Test User",
            "email": "test@example.com",
            "password": "secret1"
        })
    }

    pub fn sample_register_with_email(email: &str) -> Value {
        json!({
            "name": "Test User",
            "email": email,
            "password": "secret1"
        })
    }

    pub fn sample_login(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
