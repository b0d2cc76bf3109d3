use async_trait::async_trait;

use crate::{
    constants::CONTACT_TABLE,
    entities::contact_me::ContactMeMessage,
    errors::ContentError,
    repositories::rest_repo::RestContentRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMeRepository: Send + Sync {
    async fn submit_contact_message(&self, msg: &ContactMeMessage) -> Result<(), ContentError>;
}

#[async_trait]
impl ContactMeRepository for RestContentRepo {
    async fn submit_contact_message(&self, msg: &ContactMeMessage) -> Result<(), ContentError> {
        self.client()?.insert(CONTACT_TABLE, msg).await
    }
}
