// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Display;
use core::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// The kind of an asymmetric key pair.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyType {
  /// An Ed25519 signing key.
  Ed25519,
  /// An X25519 key-agreement key.
  X25519,
  /// An ECDSA secp256k1 signing key.
  Secp256k1,
}

impl KeyType {
  /// Returns the `KeyType` as a static string slice.
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Ed25519 => "Ed25519",
      Self::X25519 => "X25519",
      Self::Secp256k1 => "Secp256k1",
    }
  }
}

impl Display for KeyType {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}
