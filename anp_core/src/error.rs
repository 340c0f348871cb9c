// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors that may occur when working with the core primitives.

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T, E = Error> = ::core::result::Result<T, E>;

/// This type represents all possible errors that can occur in the crate.
#[derive(Debug, thiserror::Error, strum::IntoStaticStr)]
pub enum Error {
  /// Caused by errors from the [crypto] crate.
  #[error(transparent)]
  CryptoError(#[from] crypto::error::Error),
  /// Caused by a failure to serialize or deserialize JSON.
  #[error(transparent)]
  JsonError(#[from] serde_json::Error),
  /// Caused by invalid base64url input.
  #[error("Invalid Base64: {0}")]
  Base64Error(#[from] base64::DecodeError),
  /// Caused by providing bytes that cannot be used as key material.
  #[error("Invalid Key Material: {0}")]
  InvalidKeyMaterial(&'static str),
  /// Caused by a JWK with missing or inconsistent members.
  #[error("Invalid JWK: {0}")]
  InvalidJwk(&'static str),
  /// Caused by attempting an operation a key type does not support.
  #[error("Invalid Key Type: {0}")]
  InvalidKeyType(&'static str),
  /// Caused by an invalid secp256k1 key or malformed ECDSA input.
  #[error("Invalid Secp256k1 key material")]
  Secp256k1Error,
  /// Caused by requesting more HKDF output than HKDF-SHA256 can produce.
  #[error("HKDF output length out of bounds")]
  HkdfInvalidLength,
  /// Caused by a failure while encrypting with AES-256-GCM.
  #[error("Encryption failed: {0}")]
  EncryptionFailure(crypto::error::Error),
  /// Caused by AEAD decryption of a tampered or mismatched message.
  #[error("Authentication tag verification failed")]
  DecryptionFailure,
  /// Caused by a timestamp that is not valid RFC 3339.
  #[error("Invalid Timestamp: {0}")]
  InvalidTimestamp(#[from] time::error::Parse),
  /// Caused by attempting to read a poisoned shared resource.
  #[error("Shared resource poisoned: read")]
  SharedReadPoisoned,
  /// Caused by attempting to write a poisoned shared resource.
  #[error("Shared resource poisoned: write")]
  SharedWritePoisoned,
}
