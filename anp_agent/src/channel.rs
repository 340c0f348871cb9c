// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! The end-to-end encrypted channel between two agents.
//!
//! Both peers derive the same AES-256-GCM key from an X25519 ECDHE shared
//! secret and a 32-byte salt via HKDF-SHA256. Agreement on the salt is the
//! application's responsibility, typically by publishing it alongside the
//! first encrypted frame. The derived key may be used in both directions;
//! every message is sealed under a fresh random IV.

use core::fmt::Debug;
use core::fmt::Formatter;

use zeroize::Zeroize;

use anp_core::crypto;
use anp_core::crypto::EncryptedMessage;
use anp_core::utils;
use anp_did::DidDocument;
use anp_did::DidIdentity;

use crate::error::Result;

/// The length of the key-derivation salt in bytes.
pub const SALT_LENGTH: usize = 32;

/// A bidirectional, tamper-evident encrypted channel.
pub struct EncryptedChannel {
  key: [u8; 32],
}

impl EncryptedChannel {
  /// Derives a channel from raw X25519 key material and a shared salt.
  pub fn new(local_secret: &[u8], remote_public: &[u8], salt: &[u8]) -> Result<Self> {
    let shared: [u8; 32] = crypto::ecdh(local_secret, remote_public)?;
    let key: [u8; 32] = crypto::derive_encryption_key(&shared, salt)?;

    Ok(Self { key })
  }

  /// Derives a channel from a local identity and the peer's DID document,
  /// locating the peer key via its `keyAgreement` section.
  pub fn from_documents(identity: &DidIdentity, remote_document: &DidDocument, salt: &[u8]) -> Result<Self> {
    let remote_public: Vec<u8> = remote_document.key_agreement_public()?;
    Self::new(identity.x25519_secret()?.as_slice(), &remote_public, salt)
  }

  /// Generates a fresh random key-derivation salt.
  pub fn generate_salt() -> Result<[u8; SALT_LENGTH]> {
    Ok(utils::random_bytes()?)
  }

  /// Encrypts a message under a fresh random IV.
  pub fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedMessage> {
    Ok(crypto::aead_encrypt(&self.key, plaintext, &[])?)
  }

  /// Decrypts a message, verifying its authentication tag.
  pub fn decrypt(&self, message: &EncryptedMessage) -> Result<Vec<u8>> {
    Ok(crypto::aead_decrypt(&self.key, message, &[])?)
  }
}

impl Debug for EncryptedChannel {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str("EncryptedChannel")
  }
}

impl Drop for EncryptedChannel {
  fn drop(&mut self) {
    self.key.zeroize();
  }
}
