use actix_web::web;

pub mod auth;
pub mod health;
pub mod session;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(auth::register::register)
        .service(auth::login::login)
        .service(auth::logout::logout)
        // Fixed paths before the /sessions/{token} catch-all.
        .service(session::mine::created_sessions)
        .service(session::invited::invited_sessions)
        .service(session::join::join)
        .service(session::list::list)
        .service(session::create::create)
        .service(session::invite::create_invitation)
        .service(session::show::show)
        .service(session::update::update)
        .service(session::delete::delete);
}
