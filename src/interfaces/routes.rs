use actix_web::web;

use crate::handlers::{json_error::api_not_found, system::health_check};

mod blog;
mod contact;
mod experience;
mod json_error;
mod pages;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health_check)
            .configure(blog::config_routes)
            .configure(projects::config_routes)
            .configure(experience::config_routes)
            .configure(contact::config_routes)
            .default_service(web::to(api_not_found))
    );

    cfg.configure(pages::config_routes);
    cfg.configure(json_error::config_routes);
}
