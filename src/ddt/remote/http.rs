use crate::config::Credentials;
use crate::error::{DdtError, Result};
use crate::model::{Downtime, DowntimePatch};
use crate::remote::DowntimesApi;
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::time::Duration;

const API_KEY_HEADER: &str = "DD-API-KEY";
const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Synchronous client for the Datadog v1 downtime endpoints.
///
/// One instance lives for the process lifetime and performs at most two
/// sequential calls per invocation (validate plus one operation).
pub struct DatadogClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl DatadogClient {
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = credentials.base_url();
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Point the client at a different host (testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .header(APP_KEY_HEADER, &self.credentials.app_key)
    }

    /// Turn a non-2xx response into an error carrying the raw body.
    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(DdtError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

impl DowntimesApi for DatadogClient {
    fn validate(&self) -> Result<()> {
        let response = self
            .authed(self.http.get(self.url("/api/v1/validate")))
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    fn get_downtime(&self, id: i64) -> Result<Downtime> {
        let response = self
            .authed(self.http.get(self.url(&format!("/api/v1/downtime/{id}"))))
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn list_downtimes(&self) -> Result<Vec<Downtime>> {
        let response = self
            .authed(self.http.get(self.url("/api/v1/downtime")))
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn create_downtime(&mut self, patch: &DowntimePatch) -> Result<Downtime> {
        let response = self
            .authed(self.http.post(self.url("/api/v1/downtime")))
            .json(patch)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn update_downtime(&mut self, id: i64, patch: &DowntimePatch) -> Result<Downtime> {
        let response = self
            .authed(self.http.put(self.url(&format!("/api/v1/downtime/{id}"))))
            .json(patch)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn cancel_downtime(&mut self, id: i64) -> Result<()> {
        let response = self
            .authed(
                self.http
                    .delete(self.url(&format!("/api/v1/downtime/{id}"))),
            )
            .send()?;
        Self::check(response)?;
        Ok(())
    }
}
