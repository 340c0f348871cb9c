// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use log::debug;
use log::trace;
use reqwest::header::ACCEPT;

use anp_core::crypto;

use crate::cache::DocumentCache;
use crate::cache::DEFAULT_CACHE_TTL;
use crate::did::CreateDidOptions;
use crate::did::WbaDid;
use crate::document::DidDocument;
use crate::document::MethodType;
use crate::document::VerificationMethod;
use crate::error::Error;
use crate::error::Result;
use crate::identity::DidIdentity;
use crate::identity::DidSignature;

/// The default per-request timeout for document resolution: 10 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`DidManager`].
#[derive(Clone, Debug)]
pub struct DidManagerConfig {
  /// Time-to-live of cached DID documents.
  pub cache_ttl: Duration,
  /// Per-request HTTP timeout.
  pub timeout: Duration,
}

impl Default for DidManagerConfig {
  fn default() -> Self {
    Self {
      cache_ttl: DEFAULT_CACHE_TTL,
      timeout: DEFAULT_TIMEOUT,
    }
  }
}

/// Per-call resolution options.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveOptions {
  /// Bypass the cache and force a fresh fetch.
  pub no_cache: bool,
}

/// Creates identities, resolves DID documents and verifies DID signatures.
///
/// The manager is cheap to share behind an `Arc`; its cache permits
/// concurrent readers and is the only mutable state.
#[derive(Debug)]
pub struct DidManager {
  cache: DocumentCache,
  client: reqwest::Client,
}

impl DidManager {
  /// Creates a new `DidManager` with the default configuration.
  pub fn new() -> Result<Self> {
    Self::with_config(DidManagerConfig::default())
  }

  /// Creates a new `DidManager` with the given configuration.
  pub fn with_config(config: DidManagerConfig) -> Result<Self> {
    let client: reqwest::Client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(Error::HttpClient)?;

    Ok(Self {
      cache: DocumentCache::new(config.cache_ttl),
      client,
    })
  }

  /// Creates a fresh `did:wba` identity for the given domain.
  ///
  /// Generates an Ed25519 authentication key under the `auth-key` fragment
  /// and an X25519 key-agreement key under `key-agreement`.
  pub async fn create(&self, options: &CreateDidOptions) -> Result<DidIdentity> {
    let did: WbaDid = WbaDid::new(options)?;
    debug!("[DidManager::create] {did}");

    DidIdentity::generate(did)
  }

  /// Resolves the DID document of `did`, consulting the cache first.
  pub async fn resolve(&self, did: &WbaDid) -> Result<DidDocument> {
    self.resolve_with_options(did, ResolveOptions::default()).await
  }

  /// Resolves the DID document of `did` with explicit cache behavior.
  pub async fn resolve_with_options(&self, did: &WbaDid, options: ResolveOptions) -> Result<DidDocument> {
    if !options.no_cache {
      if let Some(document) = self.cache.get(did)? {
        trace!("[DidManager::resolve] cache hit for {did}");
        return Ok(document);
      }
    }

    let url: String = did.document_url();
    debug!("[DidManager::resolve] GET {url}");

    let response: reqwest::Response = self
      .client
      .get(&url)
      .header(ACCEPT, "application/json")
      .send()
      .await
      .map_err(|source| Error::ResolutionRequest { url: url.clone(), source })?;

    let status: u16 = response.status().as_u16();
    if !response.status().is_success() {
      return Err(Error::ResolutionStatus { url, status });
    }

    let document: DidDocument = response
      .json()
      .await
      .map_err(|source| Error::ResolutionParse { url, source })?;
    document.validate(did)?;

    self.cache.insert(did, &document)?;

    Ok(document)
  }

  /// Signs `message` with the authentication key of `identity`.
  pub async fn sign(&self, identity: &DidIdentity, message: &[u8]) -> Result<DidSignature> {
    identity.sign(message)
  }

  /// Verifies a [`DidSignature`] allegedly produced by `did`.
  ///
  /// Resolves the DID document unless one is supplied. Returns `Ok(false)`
  /// for an invalid signature; missing keys and key-agreement method types
  /// are errors.
  pub async fn verify(
    &self,
    did: &WbaDid,
    message: &[u8],
    signature: &DidSignature,
    document: Option<&DidDocument>,
  ) -> Result<bool> {
    let resolved: DidDocument;
    let document: &DidDocument = match document {
      Some(document) => document,
      None => {
        resolved = self.resolve(did).await?;
        &resolved
      }
    };

    let method: &VerificationMethod = document
      .method(&signature.verification_method)
      .ok_or_else(|| Error::KeyNotFound(signature.verification_method.clone()))?;

    if method.type_ == MethodType::X25519KeyAgreementKey2019 {
      return Err(Error::UnsupportedMethodType("X25519KeyAgreementKey2019"));
    }

    Ok(crypto::verify(&method.public_key_jwk, message, &signature.value)?)
  }
}
