use actix_web::web;

pub mod main;

/// Register every route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index);
}
