use actix_web::web;

pub mod auth;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    cfg.service(web::scope("/register").service(auth::register::register));
    cfg.service(web::scope("/login").service(auth::login::login));
    cfg.service(web::scope("/logout").service(auth::logout::logout));
    cfg.service(web::scope("/me").service(auth::me::me));
    cfg.service(web::scope("/refresh").service(auth::refresh::refresh));

    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::get::get_user)
            .service(user::update::update)
            .service(user::delete::delete_user),
    );
}
