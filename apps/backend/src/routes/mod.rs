use actix_web::web;

pub mod health;

/// Register the service routes: `/` and `/health`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    health::configure_routes(cfg);
}
