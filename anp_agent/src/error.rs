// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors that may occur in the meta-protocol layer.

use crate::codec::ProtocolType;
use crate::negotiation::State;

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
  /// Caused by a frame without a header byte.
  #[error("Malformed frame: empty")]
  EmptyFrame,
  /// Caused by feeding a non-META frame to the negotiation machine.
  #[error("Expected a META frame, received {0:?}")]
  UnexpectedProtocolType(ProtocolType),
  /// Caused by a payload that is not a valid meta-protocol message.
  #[error("Malformed meta message: {0}")]
  Message(String),
  /// Caused by a peer accepting several comma-separated protocols at once.
  #[error("Ambiguous accepted protocol: {0}")]
  AmbiguousAcceptedProtocol(String),
  /// Caused by requesting an encrypted channel before the machine is ready.
  #[error("No encrypted channel available in state {0:?}")]
  ChannelUnavailable(State),
  /// Caused by requesting an encrypted channel without a local identity.
  #[error("No local identity configured")]
  MissingLocalIdentity,
}
