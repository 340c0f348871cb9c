// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use serde::Serialize;

use anp_core::common::Timestamp;

/// The proof suite attached to signed agent descriptions.
pub const PROOF_TYPE: &str = "Ed25519Signature2020";

/// The proof purpose of every description proof.
pub const PROOF_PURPOSE: &str = "authentication";

/// An integrity proof over an agent description.
///
/// `proofValue` is the unpadded base64url encoding of the raw signature
/// bytes. The proof itself is never part of the canonicalization input
/// that produced the signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
  #[serde(rename = "type")]
  pub type_: String,
  pub created: Timestamp,
  pub verification_method: String,
  pub proof_purpose: String,
  pub challenge: String,
  pub domain: String,
  pub proof_value: String,
}

impl Proof {
  /// Creates an `Ed25519Signature2020` proof with the given bindings.
  pub fn new(verification_method: String, challenge: String, domain: String, proof_value: String) -> Self {
    Self {
      type_: PROOF_TYPE.to_owned(),
      created: Timestamp::now_utc(),
      verification_method,
      proof_purpose: PROOF_PURPOSE.to_owned(),
      challenge,
      domain,
      proof_value,
    }
  }
}
