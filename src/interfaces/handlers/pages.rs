use std::collections::{BTreeMap, HashMap};

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use tera::Context;
use tracing::{instrument, warn};

use crate::{
    constants::{HOME_POSTS_LIMIT, HOME_PROJECTS_LIMIT},
    entities::{category::CategorySelection, contact_me::ContactMeForm},
    errors::{AppError, FieldError},
    AppState,
};

const CONTACT_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];
const CONTACT_INVALID: &str = "Please fill in every field.";
const CONTACT_FAILED: &str = "Your message could not be sent right now. Please try again later.";
const NOT_FOUND_MESSAGE: &str = "The page you are looking for does not exist.";

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn category_param(query: &HashMap<String, String>) -> CategorySelection {
    CategorySelection::from_query(query.get("category").map(String::as_str))
}

/// Detail-page failures become pages, not JSON: a missing slug is the 404
/// page, a failing store the "unavailable" page with the error's status.
fn error_page(state: &AppState, err: AppError, back_href: &str) -> Result<HttpResponse, AppError> {
    let status = err.status_code();
    let mut ctx = state.pages.context();

    match err {
        AppError::NotFound(message) => {
            ctx.insert("message", &message);
            Ok(html(status, state.pages.render("not_found.html", &ctx)?))
        }
        AppError::ContentUnavailable(message) | AppError::UpstreamFailure(message) => {
            ctx.insert("message", &message);
            ctx.insert("back_href", back_href);
            Ok(html(status, state.pages.render("unavailable.html", &ctx)?))
        }
        other => Err(other),
    }
}

#[instrument(skip(state))]
pub async fn home_page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let posts = state.blog_handler.get_recent_blog_posts(HOME_POSTS_LIMIT).await;
    let projects = state.project_handler.featured_projects(HOME_PROJECTS_LIMIT);
    let timeline = state.experience_handler.timeline();

    let mut ctx = state.pages.context();
    ctx.insert("posts", &posts);
    ctx.insert("projects", &projects);
    ctx.insert("timeline", &timeline);

    Ok(html(StatusCode::OK, state.pages.render("home.html", &ctx)?))
}

#[instrument(skip(state))]
pub async fn blog_index(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let listing = state.blog_handler
        .list_blog_posts(&category_param(&query), None)
        .await;

    let mut ctx = state.pages.context();
    ctx.insert("listing", &listing);

    Ok(html(StatusCode::OK, state.pages.render("blog_list.html", &ctx)?))
}

#[instrument(skip(state))]
pub async fn blog_post_page(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match state.blog_handler.get_blog_post_by_slug(&slug).await {
        Ok(post) => {
            let mut ctx = state.pages.context();
            ctx.insert("post", &post);
            Ok(html(StatusCode::OK, state.pages.render("blog_detail.html", &ctx)?))
        }
        Err(e) => error_page(&state, e, "/blog"),
    }
}

#[instrument(skip(state))]
pub async fn projects_index(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let listing = state.project_handler.list_projects(&category_param(&query));

    let mut ctx = state.pages.context();
    ctx.insert("listing", &listing);

    Ok(html(StatusCode::OK, state.pages.render("projects_list.html", &ctx)?))
}

#[instrument(skip(state))]
pub async fn project_page(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match state.project_handler.get_project_by_slug(&slug) {
        Ok(project) => {
            let mut ctx = state.pages.context();
            ctx.insert("project", &project);
            Ok(html(StatusCode::OK, state.pages.render("project_detail.html", &ctx)?))
        }
        Err(e) => error_page(&state, e, "/projects"),
    }
}

// ───── Contact ───────────────────────────────────────────────────────

struct ContactView<'a> {
    form: &'a ContactMeForm,
    errors: &'a [FieldError],
    alert: Option<&'a str>,
    success: Option<&'a str>,
}

fn render_contact(
    state: &AppState,
    status: StatusCode,
    view: ContactView<'_>,
) -> Result<HttpResponse, AppError> {
    let mut errors: BTreeMap<&str, &str> = CONTACT_FIELDS.iter().map(|f| (*f, "")).collect();
    for e in view.errors {
        if let Some(slot) = errors.get_mut(e.field.as_str()) {
            *slot = e.message.as_str();
        }
    }

    let mut ctx: Context = state.pages.context();
    ctx.insert("form", view.form);
    ctx.insert("errors", &errors);
    ctx.insert("alert", &view.alert);
    ctx.insert("success", &view.success);

    Ok(html(status, state.pages.render("contact.html", &ctx)?))
}

#[instrument(skip(state))]
pub async fn contact_page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    render_contact(
        &state,
        StatusCode::OK,
        ContactView { form: &ContactMeForm::default(), errors: &[], alert: None, success: None },
    )
}

/// One submission attempt. On any failure the visitor's input is rendered
/// back; on success the form is cleared.
#[instrument(skip_all)]
pub async fn contact_submit(
    state: web::Data<AppState>,
    form: web::Form<ContactMeForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.contact_handler.submit_contact_message(form.clone()).await {
        Ok(response) => render_contact(
            &state,
            StatusCode::OK,
            ContactView {
                form: &ContactMeForm::default(),
                errors: &[],
                alert: None,
                success: Some(response.message.as_str()),
            },
        ),
        Err(AppError::ValidationError(fields)) => render_contact(
            &state,
            StatusCode::BAD_REQUEST,
            ContactView { form: &form, errors: &fields, alert: Some(CONTACT_INVALID), success: None },
        ),
        Err(e @ (AppError::ContentUnavailable(_) | AppError::UpstreamFailure(_))) => {
            warn!(error = %e, "Contact form submission failed");
            render_contact(
                &state,
                e.status_code(),
                ContactView { form: &form, errors: &[], alert: Some(CONTACT_FAILED), success: None },
            )
        }
        Err(e) => Err(e),
    }
}

pub async fn not_found(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    tracing::debug!(path = %req.path(), "No route matched");
    let mut ctx = state.pages.context();
    ctx.insert("message", NOT_FOUND_MESSAGE);
    Ok(html(StatusCode::NOT_FOUND, state.pages.render("not_found.html", &ctx)?))
}
