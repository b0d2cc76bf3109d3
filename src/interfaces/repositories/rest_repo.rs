use tracing::{info, warn};

use crate::{errors::ContentError, rest::RestClient, settings::ContentStoreSettings};

/// Repository backed by the hosted REST store. `client` is `None` when the
/// store is not configured, in which case every call reports `Disabled`.
#[derive(Clone, Debug)]
pub struct RestContentRepo {
    pub client: Option<RestClient>,
}

impl RestContentRepo {
    pub fn new(settings: Option<&ContentStoreSettings>) -> Self {
        let client = match settings {
            Some(settings) => match RestClient::new(settings) {
                Ok(client) => {
                    info!(base_url = client.base_url(), "Content store enabled");
                    Some(client)
                }
                Err(e) => {
                    warn!("Content store disabled: {}", e);
                    None
                }
            },
            None => {
                warn!("Content store not configured; blog and contact features are disabled");
                None
            }
        };

        RestContentRepo { client }
    }

    pub fn disabled() -> Self {
        RestContentRepo { client: None }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub(crate) fn client(&self) -> Result<&RestClient, ContentError> {
        self.client.as_ref().ok_or(ContentError::Disabled)
    }
}
