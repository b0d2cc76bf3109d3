use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{entities::category::CategorySelection, errors::AppError, AppState};

const MAX_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    pub category: Option<String>,
    pub limit: Option<u32>,
}

#[instrument(skip(state))]
pub async fn get_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogListQuery>,
) -> Result<impl Responder, AppError> {
    let selection = CategorySelection::from_query(query.category.as_deref());
    let limit = query.limit.map(|l| l.min(MAX_LIMIT));

    let listing = state.blog_handler.list_blog_posts(&selection, limit).await;

    Ok(HttpResponse::Ok().json(listing))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_blog_post_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}
