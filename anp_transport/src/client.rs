// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use anp_did::DidIdentity;

use crate::auth;
use crate::error::Error;
use crate::error::Result;

/// The default per-request timeout: 10 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A thin JSON-over-HTTP client that signs outbound requests with a DID.
///
/// Requests made with an identity carry a `DIDWba` authorization header;
/// identity-less requests skip signing entirely.
#[derive(Clone, Debug)]
pub struct DidAuthClient {
  client: reqwest::Client,
}

impl DidAuthClient {
  /// Creates a new `DidAuthClient` with the default timeout.
  pub fn new() -> Result<Self> {
    Self::with_timeout(DEFAULT_TIMEOUT)
  }

  /// Creates a new `DidAuthClient` with the given per-request timeout.
  pub fn with_timeout(timeout: Duration) -> Result<Self> {
    let client: reqwest::Client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(Error::HttpClient)?;

    Ok(Self { client })
  }

  /// Performs a GET request, returning the parsed JSON body.
  pub async fn get(&self, url: &str, identity: Option<&DidIdentity>) -> Result<Value> {
    debug!("[DidAuthClient::get] {url}");

    let mut request: reqwest::RequestBuilder = self.client.get(url).header(ACCEPT, "application/json");
    if let Some(identity) = identity {
      request = request.header(AUTHORIZATION, auth::build_authorization(identity)?);
    }

    self.execute(url, request).await
  }

  /// Performs a POST request with a JSON body, returning the parsed JSON
  /// response body.
  pub async fn post(&self, url: &str, body: &Value, identity: Option<&DidIdentity>) -> Result<Value> {
    debug!("[DidAuthClient::post] {url}");

    let mut request: reqwest::RequestBuilder = self
      .client
      .post(url)
      .header(ACCEPT, "application/json")
      .json(body);
    if let Some(identity) = identity {
      request = request.header(AUTHORIZATION, auth::build_authorization(identity)?);
    }

    self.execute(url, request).await
  }

  async fn execute(&self, url: &str, request: reqwest::RequestBuilder) -> Result<Value> {
    let response: reqwest::Response = request.send().await.map_err(|source| Error::Request {
      url: url.to_owned(),
      source,
    })?;

    let status: u16 = response.status().as_u16();
    if !response.status().is_success() {
      return Err(Error::Status {
        url: url.to_owned(),
        status,
      });
    }

    response.json().await.map_err(|source| Error::Body {
      url: url.to_owned(),
      source,
    })
  }
}
