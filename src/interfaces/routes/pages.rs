use actix_web::web;

use crate::handlers::pages;

/// Server-rendered site. Anything no other route claims gets the HTML
/// not-found page.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(pages::home_page)))
        .service(web::resource("/blog").route(web::get().to(pages::blog_index)))
        .service(web::resource("/blog/{slug}").route(web::get().to(pages::blog_post_page)))
        .service(web::resource("/projects").route(web::get().to(pages::projects_index)))
        .service(web::resource("/projects/{slug}").route(web::get().to(pages::project_page)))
        .service(
            web::resource("/contact")
                .route(web::get().to(pages::contact_page))
                .route(web::post().to(pages::contact_submit))
        )
        .default_service(web::to(pages::not_found));
}
