use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    web, HttpResponse, ResponseError,
};
use derive_more::Display;
use serde_json::json;

/// Malformed API input is answered in the same `{ "error": ... }` shape as
/// every other API failure.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        RequestShapeError::from(err).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        RequestShapeError::from(err).into()
    }));
}

#[derive(Debug, Display)]
#[display("{message}")]
pub struct RequestShapeError {
    message: String,
}

impl ResponseError for RequestShapeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.message }))
    }
}

impl From<JsonPayloadError> for RequestShapeError {
    fn from(err: JsonPayloadError) -> Self {
        RequestShapeError { message: format!("Invalid JSON body: {}", err) }
    }
}

impl From<QueryPayloadError> for RequestShapeError {
    fn from(err: QueryPayloadError) -> Self {
        RequestShapeError { message: format!("Invalid query string: {}", err) }
    }
}
