use actix_web::{web, App, HttpServer};
use roster_auth::config::{EnvConfig, CONFIG};
use roster_auth::db::postgres_service::PostgresService;
use roster_auth::routes::configure_routes;
use roster_auth::utils::token::Denylist;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    // one denylist per process, shared across workers
    let denylist = web::Data::new(Denylist::default());

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(denylist.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
