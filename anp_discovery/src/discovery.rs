// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use log::debug;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;

use anp_core::convert::FromJson;
use anp_did::http_scheme;
use anp_did::DidIdentity;
use anp_transport::DidAuthClient;

use crate::error::Error;
use crate::error::Result;

/// The well-known path serving an agent's collection of descriptions.
pub const WELL_KNOWN_PATH: &str = "/.well-known/agent-descriptions";

/// The `@type` of every collection page.
pub const PAGE_TYPE: &str = "CollectionPage";

// Guard against `next` cycles on malicious or broken servers.
const MAX_PAGES: usize = 64;

/// One entry in a discovery collection or search result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentListing {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub did: Option<String>,
  pub url: String,
}

/// One page of the paginated discovery collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
  #[serde(rename = "@type")]
  pub type_: String,
  pub url: String,
  pub items: Vec<AgentListing>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub next: Option<String>,
}

impl CollectionPage {
  fn validate(&self) -> Result<()> {
    if self.type_ != PAGE_TYPE {
      return Err(Error::InvalidPage(format!("unexpected @type `{}`", self.type_)));
    }
    if self.url.is_empty() {
      return Err(Error::InvalidPage("empty url".to_owned()));
    }
    Ok(())
  }
}

/// Discovers agents from well-known collections and search services.
#[derive(Clone, Debug)]
pub struct DiscoveryManager {
  client: DidAuthClient,
}

impl DiscoveryManager {
  /// Creates a new `DiscoveryManager` with a default transport.
  pub fn new() -> Result<Self> {
    Ok(Self {
      client: DidAuthClient::new()?,
    })
  }

  /// Creates a new `DiscoveryManager` on an existing transport.
  pub fn with_client(client: DidAuthClient) -> Self {
    Self { client }
  }

  /// Walks the `/.well-known/agent-descriptions` collection of `domain`,
  /// following `next` links, and returns the flattened listings.
  ///
  /// Listings are de-duplicated by URL across pages.
  pub async fn discover(&self, domain: &str, identity: Option<&DidIdentity>) -> Result<Vec<AgentListing>> {
    validate_domain(domain)?;

    let host: &str = domain.split(':').next().unwrap_or(domain);
    let mut url: String = format!("{}://{domain}{WELL_KNOWN_PATH}", http_scheme(host));

    let mut listings: Vec<AgentListing> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for _ in 0..MAX_PAGES {
      debug!("[DiscoveryManager::discover] page {url}");

      let body: Value = self.client.get(&url, identity).await?;
      let page: CollectionPage =
        CollectionPage::from_json_value(body).map_err(|error| Error::InvalidPage(error.to_string()))?;
      page.validate()?;

      for item in page.items {
        if seen.insert(item.url.clone()) {
          listings.push(item);
        }
      }

      match page.next {
        Some(next) => {
          if !next.starts_with("http://") && !next.starts_with("https://") {
            return Err(Error::InvalidPage(format!("`{next}` is not an absolute URL")));
          }
          url = next;
        }
        None => return Ok(listings),
      }
    }

    Err(Error::PaginationLimit { limit: MAX_PAGES })
  }

  /// Registers an agent description URL with a search service.
  pub async fn register(&self, search_url: &str, description_url: &str, identity: &DidIdentity) -> Result<Value> {
    let body: Value = json!({ "agentDescriptionUrl": description_url });
    Ok(self.client.post(search_url, &body, Some(identity)).await?)
  }

  /// Queries a search service for agents matching `query`.
  ///
  /// Accepts both the `{"items": [...]}` shape and, for backward
  /// compatibility, a bare item array.
  pub async fn search(&self, search_url: &str, query: &str, identity: Option<&DidIdentity>) -> Result<Vec<AgentListing>> {
    let body: Value = self.client.post(search_url, &json!({ "query": query }), identity).await?;

    let items: Value = match body {
      Value::Array(_) => body,
      Value::Object(mut object) => object
        .remove("items")
        .ok_or_else(|| Error::InvalidSearchResponse("missing `items`".to_owned()))?,
      other => {
        return Err(Error::InvalidSearchResponse(format!("unexpected body: {other}")));
      }
    };

    Vec::<AgentListing>::from_json_value(items).map_err(|error| Error::InvalidSearchResponse(error.to_string()))
  }
}

fn validate_domain(domain: &str) -> Result<()> {
  if domain.is_empty() {
    return Err(Error::InvalidDomain("empty domain".to_owned()));
  }
  if domain.contains("://") {
    return Err(Error::InvalidDomain(format!("`{domain}` must not carry a scheme")));
  }
  if domain.chars().any(char::is_whitespace) {
    return Err(Error::InvalidDomain(format!("`{domain}` contains whitespace")));
  }
  Ok(())
}
