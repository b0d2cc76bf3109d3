use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(web::resource("").route(web::get().to(projects::get_projects)))
            .service(web::resource("/{slug}").route(web::get().to(projects::get_project_by_slug)))
    );
}
