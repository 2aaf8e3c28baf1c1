//! # Address Records
//!
//! Client for the external REST backend that owns saved addresses.
//!
//! ## Contract
//! - `GET    {base}/addresses/user/{user_id}`: saved records for a user
//! - `POST   {base}/addresses`: create from a flat payload
//! - `PUT    {base}/addresses/{id}`: replace a saved record
//! - `DELETE {base}/addresses/{id}`: remove a saved record
//!
//! Ids are pushed as single percent-encoded path segments, so an id can never add
//! segments, a query or a fragment to the upstream URL.
//!
//! The caller's session is passed into every call, nothing is cached here.
//! No retries, failures surface to the caller as is.
use anyhow::{Context, bail};
use atlas::{AddressPayload, AddressRecord};
use reqwest::{Client, RequestBuilder, Response, Url};
use tracing::{info, warn};

use crate::error::AppError;

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Auth context of the user a request is made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
}

pub struct RecordsClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl RecordsClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid records URL {base_url}"))?;

        if base_url.cannot_be_a_base() {
            bail!("Records URL {base_url} cannot have a path");
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key,
        })
    }

    pub fn addresses_url(&self) -> Url {
        self.endpoint(&["addresses"])
    }

    pub fn address_url(&self, id: &str) -> Result<Url, AppError> {
        Ok(self.endpoint(&["addresses", check_id(id)?]))
    }

    pub fn user_addresses_url(&self, user_id: &str) -> Result<Url, AppError> {
        Ok(self.endpoint(&["addresses", "user", check_id(user_id)?]))
    }

    pub async fn fetch(&self, session: &Session, user_id: &str) -> Result<Vec<AddressRecord>, AppError> {
        let request = self.client.get(self.user_addresses_url(user_id)?);
        let response = self.send(session, request).await?;

        Ok(response.json().await?)
    }

    pub async fn create(
        &self,
        session: &Session,
        payload: &AddressPayload,
    ) -> Result<AddressRecord, AppError> {
        let request = self.client.post(self.addresses_url()).json(payload);
        let response = self.send(session, request).await?;

        let record: AddressRecord = response.json().await?;
        info!("Created address {}", record.id);

        Ok(record)
    }

    pub async fn update(
        &self,
        session: &Session,
        id: &str,
        payload: &AddressPayload,
    ) -> Result<AddressRecord, AppError> {
        let request = self.client.put(self.address_url(id)?).json(payload);
        let response = self.send(session, request).await?;

        Ok(response.json().await?)
    }

    pub async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError> {
        let request = self.client.delete(self.address_url(id)?);
        self.send(session, request).await?;

        info!("Deleted address {id}");
        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        // `new` rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    async fn send(&self, session: &Session, request: RequestBuilder) -> Result<Response, AppError> {
        let mut request = request.bearer_auth(&session.token);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Address backend returned {status}");
            return Err(AppError::Upstream(status));
        }

        Ok(response)
    }
}

fn check_id(id: &str) -> Result<&str, AppError> {
    if id.is_empty() || id == "." || id == ".." || id.contains('/') {
        return Err(AppError::InvalidId(id.to_string()));
    }

    Ok(id)
}
