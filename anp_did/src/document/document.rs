// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use serde::Serialize;

use crate::did::WbaDid;
use crate::document::MethodType;
use crate::document::VerificationMethod;
use crate::error::Error;
use crate::error::Result;

/// A resolved DID document.
///
/// `verificationMethod` and `authentication` are required members; a
/// document missing either fails deserialization, which resolution reports
/// as a malformed document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
  #[serde(rename = "@context")]
  pub context: Vec<String>,
  pub id: WbaDid,
  pub verification_method: Vec<VerificationMethod>,
  pub authentication: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub key_agreement: Vec<String>,
}

impl DidDocument {
  /// Checks the structural invariants of a document resolved for `expected`.
  ///
  /// The document id must equal the requested DID and every reference in
  /// `authentication` and `keyAgreement` must name an embedded method.
  pub fn validate(&self, expected: &WbaDid) -> Result<()> {
    if self.id != *expected {
      return Err(Error::InvalidDocument(format!(
        "document id `{}` does not match requested DID `{expected}`",
        self.id
      )));
    }

    for reference in self.authentication.iter().chain(self.key_agreement.iter()) {
      if self.method(reference).is_none() {
        return Err(Error::InvalidDocument(format!(
          "`{reference}` does not resolve to a verification method"
        )));
      }
    }

    Ok(())
  }

  /// Looks up a verification method by full id or bare fragment.
  pub fn method(&self, id: &str) -> Option<&VerificationMethod> {
    self
      .verification_method
      .iter()
      .find(|method| method.id == id || method.fragment() == Some(id))
  }

  /// Returns the method referenced by the first `authentication` entry.
  pub fn authentication_method(&self) -> Result<&VerificationMethod> {
    self
      .authentication
      .first()
      .and_then(|reference| self.method(reference))
      .ok_or_else(|| Error::KeyNotFound("authentication".to_owned()))
  }

  /// Returns the X25519 public key referenced by the first `keyAgreement`
  /// entry, as raw bytes.
  pub fn key_agreement_public(&self) -> Result<Vec<u8>> {
    let method: &VerificationMethod = self
      .key_agreement
      .iter()
      .filter_map(|reference| self.method(reference))
      .find(|method| method.type_ == MethodType::X25519KeyAgreementKey2019)
      .ok_or_else(|| Error::KeyNotFound("keyAgreement".to_owned()))?;

    Ok(method.public_key_jwk.public_key_bytes()?)
  }
}

#[cfg(test)]
mod tests {
  use anp_core::convert::FromJson;

  use crate::did::WbaDid;

  use super::DidDocument;

  fn document_json(id: &str) -> String {
    format!(
      r#"{{
        "@context": ["https://www.w3.org/ns/did/v1"],
        "id": "{id}",
        "verificationMethod": [{{
          "id": "{id}#auth-key",
          "type": "Ed25519VerificationKey2020",
          "controller": "{id}",
          "publicKeyJwk": {{"kty": "OKP", "crv": "Ed25519", "x": "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"}}
        }}],
        "authentication": ["{id}#auth-key"]
      }}"#
    )
  }

  #[test]
  fn test_validate_accepts_consistent_document() {
    let did: WbaDid = WbaDid::parse("did:wba:example.com").unwrap();
    let document: DidDocument = DidDocument::from_json(&document_json("did:wba:example.com")).unwrap();

    assert!(document.validate(&did).is_ok());
    assert!(document.authentication_method().is_ok());
  }

  #[test]
  fn test_validate_rejects_id_mismatch() {
    let did: WbaDid = WbaDid::parse("did:wba:other.com").unwrap();
    let document: DidDocument = DidDocument::from_json(&document_json("did:wba:example.com")).unwrap();

    assert!(document.validate(&did).is_err());
  }

  #[test]
  fn test_validate_rejects_dangling_reference() {
    let did: WbaDid = WbaDid::parse("did:wba:example.com").unwrap();
    let mut document: DidDocument = DidDocument::from_json(&document_json("did:wba:example.com")).unwrap();
    document.authentication.push("did:wba:example.com#missing".to_owned());

    assert!(document.validate(&did).is_err());
  }

  #[test]
  fn test_missing_authentication_member_fails_parse() {
    let json: &str = r#"{
      "@context": ["https://www.w3.org/ns/did/v1"],
      "id": "did:wba:example.com",
      "verificationMethod": []
    }"#;

    assert!(DidDocument::from_json(json).is_err());
  }

  #[test]
  fn test_method_lookup_by_fragment() {
    let document: DidDocument = DidDocument::from_json(&document_json("did:wba:example.com")).unwrap();

    assert!(document.method("auth-key").is_some());
    assert!(document.method("did:wba:example.com#auth-key").is_some());
    assert!(document.method("missing").is_none());
  }
}
