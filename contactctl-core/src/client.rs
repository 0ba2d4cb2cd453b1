//! Contact source client
//!
//! One unauthenticated GET against the configured endpoint, or a read of a
//! local JSON file with the same shape. No retries.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::config::ContactConfig;
use crate::error::{ContactError, Result};
use crate::model::Contact;

/// Where the contact array comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSource {
    /// REST endpoint returning a JSON array
    Endpoint(String),
    /// Local file holding the same JSON array
    File(PathBuf),
}

impl fmt::Display for ContactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactSource::Endpoint(url) => write!(f, "{url}"),
            ContactSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches the contact list from a [`ContactSource`]
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: Client,
    source: ContactSource,
}

impl ContactClient {
    pub fn new(source: ContactSource, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("contactctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ContactError::http(source.to_string(), err))?;
        Ok(Self { http, source })
    }

    /// Build a client from config; a file path takes precedence over the endpoint
    pub fn from_config(config: &ContactConfig, file: Option<PathBuf>) -> Result<Self> {
        let source = match file {
            Some(path) => ContactSource::File(path),
            None => ContactSource::Endpoint(config.endpoint.clone()),
        };
        Self::new(source, Duration::from_secs(config.timeout_secs))
    }

    pub fn source(&self) -> &ContactSource {
        &self.source
    }

    /// Fetch and decode the full contact list
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn fetch(&self) -> Result<Vec<Contact>> {
        let contacts = match &self.source {
            ContactSource::Endpoint(url) => self.fetch_endpoint(url).await?,
            ContactSource::File(path) => {
                if !path.exists() {
                    return Err(ContactError::path_not_found(path));
                }
                let body = tokio::fs::read_to_string(path).await?;
                parse_contacts(&body, &path.display().to_string())?
            }
        };

        info!(count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    async fn fetch_endpoint(&self, url: &str) -> Result<Vec<Contact>> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| ContactError::http(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactError::status(url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| ContactError::http(url, err))?;
        parse_contacts(&body, url)
    }

    /// Fetch, logging any failure and falling back to an empty list
    pub async fn fetch_or_empty(&self) -> Vec<Contact> {
        match self.fetch().await {
            Ok(contacts) => contacts,
            Err(err) => {
                error!(source = %self.source, error = %err, "Error fetching contacts");
                Vec::new()
            }
        }
    }
}

/// Decode a JSON array of contacts; `context` names the origin for errors
pub fn parse_contacts(body: &str, context: &str) -> Result<Vec<Contact>> {
    serde_json::from_str(body).map_err(|err| ContactError::json(context, err))
}
