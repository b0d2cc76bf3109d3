use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::category::CategorySelection, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let selection = CategorySelection::from_query(query.get("category").map(String::as_str));
    Ok(HttpResponse::Ok().json(state.project_handler.list_projects(&selection)))
}

#[instrument(skip(state))]
pub async fn get_project_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_slug(&slug)?;
    Ok(HttpResponse::Ok().json(project))
}
