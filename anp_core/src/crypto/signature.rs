// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use crypto::signatures::ed25519;
use sha2::Digest;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::crypto::Jwk;
use crate::crypto::KeyType;
use crate::error::Error;
use crate::error::Result;

/// Signs the given message with a raw private key.
///
/// Returns the 64-byte Ed25519 signature, or the IEEE P1363 `r || s`
/// encoding of an ECDSA signature over the SHA-256 digest of the message.
pub fn sign(type_: KeyType, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
  match type_ {
    KeyType::Ed25519 => {
      let mut bytes: [u8; ed25519::SECRET_KEY_LENGTH] = private_key
        .try_into()
        .map_err(|_| Error::InvalidKeyMaterial("expected a 32-byte Ed25519 private key"))?;
      let secret: ed25519::SecretKey = ed25519::SecretKey::from_bytes(bytes);
      bytes.zeroize();
      Ok(secret.sign(message).to_bytes().to_vec())
    }
    KeyType::Secp256k1 => {
      let secret: libsecp256k1::SecretKey =
        libsecp256k1::SecretKey::parse_slice(private_key).map_err(|_| Error::Secp256k1Error)?;
      let digest: [u8; 32] = Sha256::digest(message).into();
      let message: libsecp256k1::Message = libsecp256k1::Message::parse(&digest);
      let (signature, _): (libsecp256k1::Signature, _) = libsecp256k1::sign(&message, &secret);
      Ok(signature.serialize().to_vec())
    }
    KeyType::X25519 => Err(Error::InvalidKeyType("X25519 keys cannot sign")),
  }
}

/// Verifies a raw signature against the public key described by `jwk`.
///
/// An invalid signature yields `Ok(false)`; only unusable key material is
/// an error.
pub fn verify(jwk: &Jwk, message: &[u8], signature: &[u8]) -> Result<bool> {
  match jwk.key_type()? {
    KeyType::Ed25519 => {
      let bytes: [u8; ed25519::PUBLIC_KEY_LENGTH] = jwk
        .public_key_bytes()?
        .as_slice()
        .try_into()
        .map_err(|_| Error::InvalidJwk("expected a 32-byte x member"))?;
      let public: ed25519::PublicKey = ed25519::PublicKey::try_from_bytes(bytes)?;

      let signature: [u8; ed25519::SIGNATURE_LENGTH] = match signature.try_into() {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
      };

      Ok(public.verify(&ed25519::Signature::from_bytes(signature), message))
    }
    KeyType::Secp256k1 => {
      let public: libsecp256k1::PublicKey =
        libsecp256k1::PublicKey::parse_slice(&jwk.public_key_bytes()?, None).map_err(|_| Error::Secp256k1Error)?;

      let bytes: [u8; 64] = match signature.try_into() {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
      };
      let signature: libsecp256k1::Signature = match libsecp256k1::Signature::parse_standard(&bytes) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
      };

      let digest: [u8; 32] = Sha256::digest(message).into();
      let message: libsecp256k1::Message = libsecp256k1::Message::parse(&digest);

      Ok(libsecp256k1::verify(&message, &signature, &public))
    }
    KeyType::X25519 => Err(Error::InvalidKeyType("X25519 keys cannot verify signatures")),
  }
}
