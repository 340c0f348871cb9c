// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use crypto::keys::x25519;
use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::Error;
use crate::error::Result;

/// The HKDF `info` parameter used when deriving channel encryption keys.
pub const ENCRYPTION_INFO: &[u8] = b"ANP-Encryption";

/// The length of an X25519 shared secret in bytes.
pub const SHARED_SECRET_LENGTH: usize = 32;

/// Computes the X25519 Diffie-Hellman shared secret.
pub fn ecdh(private_key: &[u8], public_key: &[u8]) -> Result<[u8; SHARED_SECRET_LENGTH]> {
  let secret: x25519::SecretKey = x25519::SecretKey::try_from_slice(private_key)?;
  let public: x25519::PublicKey = x25519::PublicKey::try_from_slice(public_key)?;

  let mut shared: [u8; SHARED_SECRET_LENGTH] = [0; SHARED_SECRET_LENGTH];
  shared.copy_from_slice(secret.diffie_hellman(&public).as_bytes());
  Ok(shared)
}

/// Derives `length` bytes of keying material with HKDF-SHA256.
pub fn hkdf_sha256(ikm: &[u8], salt: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
  let hkdf: Hkdf<Sha256> = Hkdf::new(Some(salt), ikm);
  let mut output: Vec<u8> = vec![0; length];
  hkdf.expand(info, &mut output).map_err(|_| Error::HkdfInvalidLength)?;
  Ok(output)
}

/// Derives the 32-byte AES-256-GCM channel key from an ECDHE shared secret.
pub fn derive_encryption_key(shared_secret: &[u8], salt: &[u8]) -> Result<[u8; 32]> {
  let okm: Vec<u8> = hkdf_sha256(shared_secret, salt, ENCRYPTION_INFO, 32)?;

  // hkdf_sha256 returned exactly the requested 32 bytes
  let mut key: [u8; 32] = [0; 32];
  key.copy_from_slice(&okm);
  Ok(key)
}
