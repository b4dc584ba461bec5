//! Nextcloud export endpoints.
//!
//! Calendars and address books are downloaded through the same `?export`
//! URLs the Nextcloud web UI uses, authenticated with HTTP basic auth.

use anyhow::{Context, Result};
use capsule_core::{Fetcher, TransferError};

/// HTTP [`Fetcher`] talking to Nextcloud's WebDAV export endpoints.
pub struct NextcloudClient {
    http: reqwest::Client,
    scheme: String,
}

impl NextcloudClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("capsule/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            scheme: "https".to_string(),
        })
    }

    /// Use another URL scheme than `https` (plain `http` for local servers).
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    fn calendar_url(&self, host: &str, user: &str, calendar: &str) -> String {
        format!(
            "{}://{}/remote.php/dav/calendars/{}/{}/?export",
            self.scheme, host, user, calendar
        )
    }

    fn contacts_url(&self, host: &str, user: &str) -> String {
        format!(
            "{}://{}/remote.php/dav/addressbooks/users/{}/contacts/?export",
            self.scheme, host, user
        )
    }

    async fn export(&self, url: String, user: &str, password: &str) -> Result<Vec<u8>, TransferError> {
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(user, Some(password))
            .send()
            .await
            .map_err(|e| TransferError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| TransferError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;

        Ok(body.to_vec())
    }
}

impl Fetcher for NextcloudClient {
    async fn fetch_calendar(
        &self,
        host: &str,
        user: &str,
        password: &str,
        calendar: &str,
    ) -> Result<Vec<u8>, TransferError> {
        self.export(self.calendar_url(host, user, calendar), user, password)
            .await
    }

    async fn fetch_contacts(
        &self,
        host: &str,
        user: &str,
        password: &str,
    ) -> Result<Vec<u8>, TransferError> {
        self.export(self.contacts_url(host, user), user, password).await
    }
}
