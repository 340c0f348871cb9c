// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors that may occur during agent discovery.

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T, E = Error> = ::core::result::Result<T, E>;

/// This type represents all possible errors that can occur in the crate.
#[derive(Debug, thiserror::Error, strum::IntoStaticStr)]
pub enum Error {
  /// Caused by errors from the [anp_transport] crate.
  #[error(transparent)]
  TransportError(#[from] anp_transport::Error),
  /// Caused by an invalid discovery domain.
  #[error("Invalid domain: {0}")]
  InvalidDomain(String),
  /// Caused by a collection page that violates a structural invariant.
  #[error("Invalid collection page: {0}")]
  InvalidPage(String),
  /// Caused by a pagination walk exceeding the page limit.
  #[error("Pagination exceeded {limit} pages")]
  PaginationLimit {
    limit: usize,
  },
  /// Caused by a search response that is neither an item object nor an
  /// item array.
  #[error("Malformed search response: {0}")]
  InvalidSearchResponse(String),
}
