use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact_me::ContactMeForm, errors::AppError, AppState};

#[instrument(skip_all)]
pub async fn create_contact_me(
    state: web::Data<AppState>,
    form: web::Json<ContactMeForm>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler
        .submit_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
