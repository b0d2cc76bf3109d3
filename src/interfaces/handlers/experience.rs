use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::AppState;

#[instrument(skip(state))]
pub async fn get_experience(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.experience_handler.timeline())
}
