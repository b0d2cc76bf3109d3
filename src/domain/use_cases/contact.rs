use chrono::Utc;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    entities::contact_me::{ContactMeForm, ContactMeResponse},
    errors::AppError,
    repositories::contact_me::ContactMeRepository,
};

pub struct ContactMeHandler<R>
where
    R: ContactMeRepository,
{
    pub contact_repo: R,
}

impl<R> ContactMeHandler<R>
where
    R: ContactMeRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactMeHandler { contact_repo }
    }

    /// Validates the form, stamps it and appends it to the store.
    /// One attempt only; a failed submission is reported, not retried.
    pub async fn submit_contact_message(
        &self,
        form: ContactMeForm,
    ) -> Result<ContactMeResponse, AppError> {
        form.validate()?;

        let message = form.into_message(Utc::now());

        if let Err(e) = self.contact_repo.submit_contact_message(&message).await {
            warn!(error = %e, "Contact message was not stored");
            return Err(e.into());
        }

        info!("Contact message stored");
        Ok(ContactMeResponse {
            message: "Thanks for reaching out! I'll get back to you soon.".to_string(),
        })
    }
}
