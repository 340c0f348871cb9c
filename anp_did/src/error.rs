// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors that may occur when working with `did:wba` identities.

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T, E = Error> = ::core::result::Result<T, E>;

/// This type represents all possible errors that can occur in the crate.
#[derive(Debug, thiserror::Error, strum::IntoStaticStr)]
pub enum Error {
  /// Caused by errors from the [anp_core] crate.
  #[error(transparent)]
  CoreError(#[from] anp_core::Error),
  /// Caused by a string that is not a valid `did:wba` identifier.
  #[error("Invalid DID: {0}")]
  InvalidDid(String),
  /// Caused by an invalid domain, port or path in DID creation options.
  #[error("Invalid domain: {0}")]
  InvalidDomain(String),
  /// Caused by a failure to initialize the HTTP client.
  #[error("Failed to initialize HTTP client")]
  HttpClient(#[source] reqwest::Error),
  /// Caused by a network failure while fetching a DID document.
  #[error("DID resolution failed for {url}")]
  ResolutionRequest {
    url: String,
    source: reqwest::Error,
  },
  /// Caused by a non-success HTTP status while fetching a DID document.
  #[error("DID resolution failed for {url}: HTTP status {status}")]
  ResolutionStatus {
    url: String,
    status: u16,
  },
  /// Caused by a response body that is not a valid DID document.
  #[error("DID resolution failed for {url}: malformed document")]
  ResolutionParse {
    url: String,
    source: reqwest::Error,
  },
  /// Caused by a resolved document that violates a structural invariant.
  #[error("Invalid DID document: {0}")]
  InvalidDocument(String),
  /// Caused by a verification method id that the document does not contain.
  #[error("Key not found: {0}")]
  KeyNotFound(String),
  /// Caused by asking a key-agreement method to verify a signature.
  #[error("Unsupported verification method type: {0}")]
  UnsupportedMethodType(&'static str),
}
