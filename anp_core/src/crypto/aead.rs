// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use crypto::ciphers::aes::Aes256Gcm;
use crypto::ciphers::traits::Aead;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;

/// The length of an AES-256-GCM key in bytes.
pub const KEY_LENGTH: usize = Aes256Gcm::KEY_LENGTH;

/// The length of an AES-256-GCM IV in bytes.
pub const IV_LENGTH: usize = Aes256Gcm::NONCE_LENGTH;

/// The length of an AES-256-GCM authentication tag in bytes.
pub const TAG_LENGTH: usize = Aes256Gcm::TAG_LENGTH;

/// The output of one authenticated encryption operation.
///
/// Serializes with unpadded base64url fields so applications can carry it
/// inside their own frames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedMessage {
  #[serde(with = "crate::utils::b64")]
  pub ciphertext: Vec<u8>,
  #[serde(with = "crate::utils::b64")]
  pub iv: Vec<u8>,
  #[serde(with = "crate::utils::b64")]
  pub tag: Vec<u8>,
}

/// Encrypts `plaintext` with AES-256-GCM under a fresh random 12-byte IV.
pub fn aead_encrypt(key: &[u8], plaintext: &[u8], associated_data: &[u8]) -> Result<EncryptedMessage> {
  if key.len() != KEY_LENGTH {
    return Err(Error::InvalidKeyMaterial("expected a 32-byte AES-256-GCM key"));
  }

  let nonce = Aes256Gcm::random_nonce().map_err(Error::EncryptionFailure)?;
  let mut ciphertext: Vec<u8> = vec![0; plaintext.len()];
  let mut tag: Vec<u8> = [0; TAG_LENGTH].to_vec();

  Aes256Gcm::try_encrypt(key, &nonce, associated_data, plaintext, &mut ciphertext, &mut tag)
    .map_err(Error::EncryptionFailure)?;

  Ok(EncryptedMessage {
    ciphertext,
    iv: nonce.to_vec(),
    tag,
  })
}

/// Decrypts an [`EncryptedMessage`], verifying its authentication tag.
pub fn aead_decrypt(key: &[u8], message: &EncryptedMessage, associated_data: &[u8]) -> Result<Vec<u8>> {
  if key.len() != KEY_LENGTH {
    return Err(Error::InvalidKeyMaterial("expected a 32-byte AES-256-GCM key"));
  }
  if message.iv.len() != IV_LENGTH || message.tag.len() != TAG_LENGTH {
    return Err(Error::DecryptionFailure);
  }

  let mut plaintext: Vec<u8> = vec![0; message.ciphertext.len()];
  let length: usize = Aes256Gcm::try_decrypt(
    key,
    &message.iv,
    associated_data,
    &mut plaintext,
    &message.ciphertext,
    &message.tag,
  )
  .map_err(|_| Error::DecryptionFailure)?;
  plaintext.truncate(length);

  Ok(plaintext)
}

#[cfg(test)]
mod tests {
  use crate::error::Error;
  use crate::utils;

  use super::aead_decrypt;
  use super::aead_encrypt;
  use super::EncryptedMessage;
  use super::IV_LENGTH;
  use super::TAG_LENGTH;

  #[test]
  fn test_round_trip() {
    let key: [u8; 32] = utils::random_bytes().unwrap();
    let plaintext: &[u8] = b"a confidential payload";

    let encrypted: EncryptedMessage = aead_encrypt(&key, plaintext, &[]).unwrap();

    assert_eq!(encrypted.iv.len(), IV_LENGTH);
    assert_eq!(encrypted.tag.len(), TAG_LENGTH);
    assert_eq!(aead_decrypt(&key, &encrypted, &[]).unwrap(), plaintext);
  }

  #[test]
  fn test_iv_is_fresh_per_call() {
    let key: [u8; 32] = utils::random_bytes().unwrap();

    let first: EncryptedMessage = aead_encrypt(&key, b"same input", &[]).unwrap();
    let second: EncryptedMessage = aead_encrypt(&key, b"same input", &[]).unwrap();

    assert_ne!(first.iv, second.iv);
    assert_ne!(first.ciphertext, second.ciphertext);
  }

  #[test]
  fn test_tampering_detected_on_every_byte() {
    let key: [u8; 32] = utils::random_bytes().unwrap();
    let encrypted: EncryptedMessage = aead_encrypt(&key, b"attack at dawn", &[]).unwrap();

    for index in 0..encrypted.ciphertext.len() {
      let mut tampered: EncryptedMessage = encrypted.clone();
      tampered.ciphertext[index] ^= 0x01;
      assert!(matches!(
        aead_decrypt(&key, &tampered, &[]),
        Err(Error::DecryptionFailure)
      ));
    }

    for index in 0..IV_LENGTH {
      let mut tampered: EncryptedMessage = encrypted.clone();
      tampered.iv[index] ^= 0x01;
      assert!(aead_decrypt(&key, &tampered, &[]).is_err());
    }

    for index in 0..TAG_LENGTH {
      let mut tampered: EncryptedMessage = encrypted.clone();
      tampered.tag[index] ^= 0x01;
      assert!(aead_decrypt(&key, &tampered, &[]).is_err());
    }
  }

  #[test]
  fn test_failure_message_names_the_tag() {
    let key: [u8; 32] = utils::random_bytes().unwrap();
    let mut encrypted: EncryptedMessage = aead_encrypt(&key, b"payload", &[]).unwrap();
    encrypted.tag[0] ^= 0x01;

    let error: Error = aead_decrypt(&key, &encrypted, &[]).unwrap_err();

    assert!(error.to_string().contains("Authentication tag verification failed"));
  }

  #[test]
  fn test_serde_round_trip() {
    let key: [u8; 32] = utils::random_bytes().unwrap();
    let encrypted: EncryptedMessage = aead_encrypt(&key, b"payload", &[]).unwrap();

    let json: String = serde_json::to_string(&encrypted).unwrap();
    let parsed: EncryptedMessage = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, encrypted);
    assert_eq!(aead_decrypt(&key, &parsed, &[]).unwrap(), b"payload");
  }
}
