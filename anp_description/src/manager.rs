// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use anp_core::convert::FromJson;
use anp_core::convert::ToJson;
use anp_core::utils;
use anp_did::DidDocument;
use anp_did::DidIdentity;
use anp_did::DidManager;
use anp_did::DidSignature;
use anp_did::WbaDid;
use anp_transport::DidAuthClient;

use crate::description::AgentDescription;
use crate::error::Error;
use crate::error::Result;
use crate::proof::Proof;
use crate::proof::PROOF_TYPE;

/// Signs, verifies and fetches agent descriptions.
#[derive(Debug)]
pub struct DescriptionManager {
  did_manager: Arc<DidManager>,
  client: DidAuthClient,
}

impl DescriptionManager {
  /// Creates a new `DescriptionManager` on top of the given [`DidManager`].
  pub fn new(did_manager: Arc<DidManager>) -> Result<Self> {
    Ok(Self {
      did_manager,
      client: DidAuthClient::new()?,
    })
  }

  /// Signs `description`, binding the proof to `challenge` and `domain`.
  ///
  /// Any existing proof is discarded; the remaining document is
  /// canonicalized per RFC 8785 and signed with the identity's Ed25519
  /// authentication key. The input description is left untouched.
  pub async fn sign(
    &self,
    description: &AgentDescription,
    identity: &DidIdentity,
    challenge: &str,
    domain: &str,
  ) -> Result<AgentDescription> {
    if description.did.is_none() {
      return Err(Error::MissingDid);
    }

    let mut signed: AgentDescription = description.clone();
    signed.proof = None;

    let payload: Vec<u8> = signable_bytes(&signed)?;
    let signature: DidSignature = self.did_manager.sign(identity, &payload).await?;

    signed.proof = Some(Proof::new(
      signature.verification_method,
      challenge.to_owned(),
      domain.to_owned(),
      utils::encode_b64url(&signature.value),
    ));

    Ok(signed)
  }

  /// Verifies the proof of `description`.
  ///
  /// Returns `Ok(false)` when the proof or DID is missing, the proof type
  /// is unknown, the proof value is not valid base64url, or the signature
  /// does not verify. Resolution and key-lookup failures propagate.
  pub async fn verify(&self, description: &AgentDescription, document: Option<&DidDocument>) -> Result<bool> {
    let (proof, did): (&Proof, &str) = match (&description.proof, &description.did) {
      (Some(proof), Some(did)) => (proof, did.as_str()),
      _ => return Ok(false),
    };
    if proof.type_ != PROOF_TYPE {
      debug!("[DescriptionManager::verify] unknown proof type `{}`", proof.type_);
      return Ok(false);
    }

    let value: Vec<u8> = match utils::decode_b64url(&proof.proof_value) {
      Ok(value) => value,
      Err(_) => return Ok(false),
    };

    let mut unsigned: AgentDescription = description.clone();
    unsigned.proof = None;
    let payload: Vec<u8> = signable_bytes(&unsigned)?;

    let did: WbaDid = WbaDid::parse(did)?;
    let signature: DidSignature = DidSignature {
      value,
      verification_method: proof.verification_method.clone(),
    };

    Ok(self.did_manager.verify(&did, &payload, &signature, document).await?)
  }

  /// Verifies the proof and additionally compares its bound domain.
  pub async fn verify_with_domain(
    &self,
    description: &AgentDescription,
    domain: &str,
    document: Option<&DidDocument>,
  ) -> Result<bool> {
    let bound: bool = description
      .proof
      .as_ref()
      .map(|proof| proof.domain == domain)
      .unwrap_or(false);

    Ok(bound && self.verify(description, document).await?)
  }

  /// Verifies the proof and additionally compares its bound challenge.
  pub async fn verify_with_challenge(
    &self,
    description: &AgentDescription,
    challenge: &str,
    document: Option<&DidDocument>,
  ) -> Result<bool> {
    let bound: bool = description
      .proof
      .as_ref()
      .map(|proof| proof.challenge == challenge)
      .unwrap_or(false);

    Ok(bound && self.verify(description, document).await?)
  }

  /// Fetches an agent description from `url` and validates its structure.
  pub async fn fetch(&self, url: &str) -> Result<AgentDescription> {
    let body: Value = self.client.get(url, None).await?;
    let description: AgentDescription =
      AgentDescription::from_json_value(body).map_err(|error| Error::InvalidDescription(error.to_string()))?;
    description.validate()?;

    Ok(description)
  }
}

// The canonical signature input: the description without its proof.
fn signable_bytes(description: &AgentDescription) -> Result<Vec<u8>> {
  debug_assert!(description.proof.is_none());
  Ok(description.to_jcs()?)
}
