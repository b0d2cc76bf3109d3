use actix_web::web;

use crate::handlers::experience;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/experience").route(web::get().to(experience::get_experience)));
}
