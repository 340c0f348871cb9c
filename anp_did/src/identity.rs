// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use anp_core::crypto;
use anp_core::crypto::KeyPair;
use anp_core::crypto::KeyType;
use anp_core::crypto::PrivateKey;

use crate::did::WbaDid;
use crate::document::DidDocument;
use crate::document::MethodType;
use crate::document::VerificationMethod;
use crate::error::Error;
use crate::error::Result;

/// The fragment of the Ed25519 authentication key of every created identity.
pub const AUTH_KEY_FRAGMENT: &str = "auth-key";

/// The fragment of the X25519 key-agreement key of every created identity.
pub const KEY_AGREEMENT_FRAGMENT: &str = "key-agreement";

const CONTEXT_DID_V1: &str = "https://www.w3.org/ns/did/v1";
const CONTEXT_ED25519_2020: &str = "https://w3id.org/security/suites/ed25519-2020/v1";
const CONTEXT_X25519_2019: &str = "https://w3id.org/security/suites/x25519-2019/v1";

/// A detached signature produced by a [`DidIdentity`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidSignature {
  /// The raw signature bytes.
  pub value: Vec<u8>,
  /// The id of the verification method that can verify `value`.
  pub verification_method: String,
}

/// The private side of a `did:wba` identity.
///
/// Owns the private key material for the lifetime of the value. The type is
/// deliberately not serializable; keys never leave the process that
/// generated them.
#[derive(Debug)]
pub struct DidIdentity {
  did: WbaDid,
  document: DidDocument,
  keys: HashMap<String, KeyPair>,
}

impl DidIdentity {
  /// Generates a fresh identity: an Ed25519 authentication key, an X25519
  /// key-agreement key and the DID document publishing both.
  pub(crate) fn generate(did: WbaDid) -> Result<Self> {
    let auth_keypair: KeyPair = KeyPair::new(KeyType::Ed25519)?;
    let agreement_keypair: KeyPair = KeyPair::new(KeyType::X25519)?;

    let auth_id: String = did.method_id(AUTH_KEY_FRAGMENT);
    let agreement_id: String = did.method_id(KEY_AGREEMENT_FRAGMENT);

    let document: DidDocument = DidDocument {
      context: vec![
        CONTEXT_DID_V1.to_owned(),
        CONTEXT_ED25519_2020.to_owned(),
        CONTEXT_X25519_2019.to_owned(),
      ],
      id: did.clone(),
      verification_method: vec![
        VerificationMethod {
          id: auth_id.clone(),
          type_: MethodType::Ed25519VerificationKey2020,
          controller: did.to_string(),
          public_key_jwk: auth_keypair.public_jwk()?,
        },
        VerificationMethod {
          id: agreement_id.clone(),
          type_: MethodType::X25519KeyAgreementKey2019,
          controller: did.to_string(),
          public_key_jwk: agreement_keypair.public_jwk()?,
        },
      ],
      authentication: vec![auth_id.clone()],
      key_agreement: vec![agreement_id.clone()],
    };

    let mut keys: HashMap<String, KeyPair> = HashMap::new();
    keys.insert(auth_id, auth_keypair);
    keys.insert(agreement_id, agreement_keypair);

    Ok(Self { did, document, keys })
  }

  /// Returns the DID of this identity.
  pub fn did(&self) -> &WbaDid {
    &self.did
  }

  /// Returns the public DID document of this identity.
  pub fn document(&self) -> &DidDocument {
    &self.document
  }

  /// Returns the id of the Ed25519 authentication method.
  pub fn authentication_method_id(&self) -> String {
    self.did.method_id(AUTH_KEY_FRAGMENT)
  }

  /// Returns the id of the X25519 key-agreement method.
  pub fn key_agreement_method_id(&self) -> String {
    self.did.method_id(KEY_AGREEMENT_FRAGMENT)
  }

  /// Signs the given message with the Ed25519 authentication key.
  pub fn sign(&self, message: &[u8]) -> Result<DidSignature> {
    let method_id: String = self.authentication_method_id();
    let keypair: &KeyPair = self
      .keys
      .get(&method_id)
      .ok_or_else(|| Error::KeyNotFound(method_id.clone()))?;

    let value: Vec<u8> = crypto::sign(keypair.type_(), keypair.private().as_slice(), message)?;

    Ok(DidSignature {
      value,
      verification_method: method_id,
    })
  }

  /// Returns the X25519 key-agreement private key for channel setup.
  pub fn x25519_secret(&self) -> Result<&PrivateKey> {
    let method_id: String = self.key_agreement_method_id();
    self
      .keys
      .get(&method_id)
      .map(KeyPair::private)
      .ok_or(Error::KeyNotFound(method_id))
  }
}

#[cfg(test)]
mod tests {
  use crate::did::CreateDidOptions;
  use crate::did::WbaDid;

  use super::DidIdentity;
  use super::DidSignature;

  fn test_identity() -> DidIdentity {
    let did: WbaDid = WbaDid::new(&CreateDidOptions {
      domain: "localhost:9000".to_owned(),
      port: None,
      path: Some("alice".to_owned()),
    })
    .unwrap();

    DidIdentity::generate(did).unwrap()
  }

  #[test]
  fn test_generated_document_is_consistent() {
    let identity: DidIdentity = test_identity();

    assert!(identity.document().validate(identity.did()).is_ok());
    assert_eq!(identity.document().verification_method.len(), 2);
    assert_eq!(identity.document().authentication.len(), 1);
    assert_eq!(identity.document().key_agreement.len(), 1);
  }

  #[test]
  fn test_sign_names_the_auth_method() {
    let identity: DidIdentity = test_identity();
    let signature: DidSignature = identity.sign(b"message").unwrap();

    assert_eq!(signature.value.len(), 64);
    assert_eq!(
      signature.verification_method,
      "did:wba:localhost%3A9000:alice#auth-key"
    );
  }

  #[test]
  fn test_x25519_secret_available() {
    let identity: DidIdentity = test_identity();

    assert_eq!(identity.x25519_secret().unwrap().as_slice().len(), 32);
  }
}
