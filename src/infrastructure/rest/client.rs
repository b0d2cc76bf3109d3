use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{errors::ContentError, settings::ContentStoreSettings};

use super::query::RestQuery;

const REST_PREFIX: &str = "/rest/v1";

/// Thin client for the hosted REST data store. Every call is exactly one
/// round-trip: no retries, no caching.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(settings: &ContentStoreSettings) -> Result<Self, ContentError> {
        let mut headers = HeaderMap::new();

        let mut key = HeaderValue::from_str(settings.api_key.as_str())
            .map_err(|_| ContentError::FetchFailed("API key is not a valid header value".into()))?;
        key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", settings.api_key.as_str()))
            .map_err(|_| ContentError::FetchFailed("API key is not a valid header value".into()))?;
        bearer.set_sensitive(true);

        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;

        Ok(RestClient {
            http,
            base_url: settings.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}{}/{}", self.base_url, REST_PREFIX, table)
    }

    /// Reads rows from `table`. The body must be a JSON array of `T`; any
    /// other shape fails closed.
    pub async fn select<T>(&self, table: &str, query: &RestQuery) -> Result<Vec<T>, ContentError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}?{}", self.table_url(table), query.to_query_string());
        debug!(%table, query = %query.to_query_string(), "Fetching rows");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%table, %status, "Content store rejected read");
            return Err(ContentError::FetchFailed(format!("unexpected status {}", status)));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<Vec<T>>(&body).map_err(|e| {
            warn!(%table, error = %e, "Malformed rows from content store");
            ContentError::FetchFailed(format!("malformed response: {}", e))
        })
    }

    /// Appends one row to `table`. Any 2xx status is success; the created
    /// record is not echoed back.
    pub async fn insert<T>(&self, table: &str, row: &T) -> Result<(), ContentError>
    where
        T: Serialize + ?Sized,
    {
        let response = self.http
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(%table, "Content store refused credentials");
                Err(ContentError::FetchFailed("credentials rejected".into()))
            }
            status => {
                warn!(%table, %status, "Content store rejected insert");
                Err(ContentError::FetchFailed(format!("unexpected status {}", status)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use zeroize::Zeroizing;

    fn settings(key: &str) -> ContentStoreSettings {
        ContentStoreSettings {
            base_url: "https://store.example.com".into(),
            api_key: Zeroizing::new(key.into()),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn builds_table_urls_under_rest_prefix() {
        let client = RestClient::new(&settings("anon")).expect("client");
        assert_eq!(client.table_url("blogs"), "https://store.example.com/rest/v1/blogs");
    }

    #[test]
    fn rejects_key_that_cannot_be_a_header() {
        let err = RestClient::new(&settings("bad\nkey")).unwrap_err();
        assert!(matches!(err, ContentError::FetchFailed(_)));
    }
}
