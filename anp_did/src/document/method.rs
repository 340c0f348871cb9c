// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Display;
use core::fmt::Formatter;

use anp_core::crypto::Jwk;
use anp_core::crypto::KeyType;
use serde::Deserialize;
use serde::Serialize;

/// The type of a verification method, naming both curve and usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodType {
  Ed25519VerificationKey2020,
  X25519KeyAgreementKey2019,
  EcdsaSecp256k1VerificationKey2019,
}

impl MethodType {
  /// Returns the [`KeyType`] of keys referenced by this method type.
  pub const fn key_type(&self) -> KeyType {
    match self {
      Self::Ed25519VerificationKey2020 => KeyType::Ed25519,
      Self::X25519KeyAgreementKey2019 => KeyType::X25519,
      Self::EcdsaSecp256k1VerificationKey2019 => KeyType::Secp256k1,
    }
  }

  /// Returns the `MethodType` as a static string slice.
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Ed25519VerificationKey2020 => "Ed25519VerificationKey2020",
      Self::X25519KeyAgreementKey2019 => "X25519KeyAgreementKey2019",
      Self::EcdsaSecp256k1VerificationKey2019 => "EcdsaSecp256k1VerificationKey2019",
    }
  }
}

impl Display for MethodType {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A public key embedded in a DID document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
  pub id: String,
  #[serde(rename = "type")]
  pub type_: MethodType,
  pub controller: String,
  pub public_key_jwk: Jwk,
}

impl VerificationMethod {
  /// Returns the fragment part of the method id, if any.
  pub fn fragment(&self) -> Option<&str> {
    self.id.split_once('#').map(|(_, fragment)| fragment)
  }
}
