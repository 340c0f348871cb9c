// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors that may occur when working with agent descriptions.

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
  /// Caused by errors from the [anp_transport] crate.
  #[error(transparent)]
  TransportError(#[from] anp_transport::Error),
  /// Caused by signing a description that carries no DID.
  #[error("Agent description has no DID")]
  MissingDid,
  /// Caused by an empty required string field.
  #[error("Empty required field: {0}")]
  EmptyField(&'static str),
  /// Caused by adding an entry whose URL is already present.
  #[error("Duplicate URL: {0}")]
  DuplicateUrl(String),
  /// Caused by a fetched description that violates a structural invariant.
  #[error("Invalid agent description: {0}")]
  InvalidDescription(String),
}
