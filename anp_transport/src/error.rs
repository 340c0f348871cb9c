// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors that may occur in the HTTP transport.

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T, E = Error> = ::core::result::Result<T, E>;

/// This type represents all possible errors that can occur in the crate.
#[derive(Debug, thiserror::Error, strum::IntoStaticStr)]
pub enum Error {
  /// Caused by errors from the [anp_core] crate.
  #[error(transparent)]
  CoreError(#[from] anp_core::Error),
  /// Caused by errors from the [anp_did] crate.
  #[error(transparent)]
  DidError(#[from] anp_did::Error),
  /// Caused by a failure to initialize the HTTP client.
  #[error("Failed to initialize HTTP client")]
  HttpClient(#[source] reqwest::Error),
  /// Caused by a network failure while performing a request.
  #[error("Request to {url} failed")]
  Request {
    url: String,
    source: reqwest::Error,
  },
  /// Caused by a non-success HTTP status.
  #[error("Request to {url} failed: HTTP status {status}")]
  Status {
    url: String,
    status: u16,
  },
  /// Caused by a response body that is not valid JSON.
  #[error("Request to {url} returned a malformed body")]
  Body {
    url: String,
    source: reqwest::Error,
  },
  /// Caused by an authorization header that does not follow the `DIDWba`
  /// scheme.
  #[error("Malformed DIDWba authorization header: {0}")]
  MalformedAuthorization(String),
}
