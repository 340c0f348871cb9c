// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Debug;
use core::fmt::Formatter;

use crypto::keys::x25519;
use crypto::signatures::ed25519;
use zeroize::Zeroize;

use crate::crypto::Jwk;
use crate::crypto::KeyType;
use crate::error::Error;
use crate::error::Result;
use crate::utils;

/// The public half of an asymmetric key pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Box<[u8]>);

impl PublicKey {
  pub fn as_slice(&self) -> &[u8] {
    &self.0
  }
}

impl From<Vec<u8>> for PublicKey {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes.into_boxed_slice())
  }
}

impl AsRef<[u8]> for PublicKey {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

/// The private half of an asymmetric key pair.
///
/// The key material is zeroed on drop and intentionally omitted from the
/// `Debug` representation.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(Box<[u8]>);

impl PrivateKey {
  pub fn as_slice(&self) -> &[u8] {
    &self.0
  }
}

impl From<Vec<u8>> for PrivateKey {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes.into_boxed_slice())
  }
}

impl AsRef<[u8]> for PrivateKey {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Debug for PrivateKey {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str("PrivateKey")
  }
}

impl Drop for PrivateKey {
  fn drop(&mut self) {
    self.0.zeroize();
  }
}

/// A convenient type for representing a pair of cryptographic keys.
#[derive(Clone, Debug)]
pub struct KeyPair {
  type_: KeyType,
  public: PublicKey,
  private: PrivateKey,
}

impl KeyPair {
  /// Generates a new `KeyPair` of the given [`KeyType`].
  pub fn new(type_: KeyType) -> Result<Self> {
    let (public, private): (Vec<u8>, Vec<u8>) = match type_ {
      KeyType::Ed25519 => {
        let secret: ed25519::SecretKey = ed25519::SecretKey::generate()?;
        (secret.public_key().to_bytes().to_vec(), secret.to_bytes().to_vec())
      }
      KeyType::X25519 => {
        let secret: x25519::SecretKey = x25519::SecretKey::generate()?;
        (secret.public_key().to_bytes().to_vec(), secret.to_bytes().to_vec())
      }
      KeyType::Secp256k1 => {
        // Rejection-sample until the scalar is a valid secp256k1 secret.
        let secret: libsecp256k1::SecretKey = loop {
          let candidate: [u8; 32] = utils::random_bytes()?;
          if let Ok(secret) = libsecp256k1::SecretKey::parse(&candidate) {
            break secret;
          }
        };
        let public: libsecp256k1::PublicKey = libsecp256k1::PublicKey::from_secret_key(&secret);
        (public.serialize().to_vec(), secret.serialize().to_vec())
      }
    };

    Ok(Self {
      type_,
      public: public.into(),
      private: private.into(),
    })
  }

  /// Reconstructs a `KeyPair` from the bytes of its private key.
  pub fn try_from_private_key_bytes(type_: KeyType, private_key: &[u8]) -> Result<Self> {
    let public: Vec<u8> = match type_ {
      KeyType::Ed25519 => {
        let mut bytes: [u8; ed25519::SECRET_KEY_LENGTH] = private_key
          .try_into()
          .map_err(|_| Error::InvalidKeyMaterial("expected a 32-byte Ed25519 private key"))?;
        let secret: ed25519::SecretKey = ed25519::SecretKey::from_bytes(bytes);
        bytes.zeroize();
        secret.public_key().to_bytes().to_vec()
      }
      KeyType::X25519 => {
        let secret: x25519::SecretKey = x25519::SecretKey::try_from_slice(private_key)?;
        secret.public_key().to_bytes().to_vec()
      }
      KeyType::Secp256k1 => {
        let secret: libsecp256k1::SecretKey =
          libsecp256k1::SecretKey::parse_slice(private_key).map_err(|_| Error::Secp256k1Error)?;
        libsecp256k1::PublicKey::from_secret_key(&secret).serialize().to_vec()
      }
    };

    Ok(Self {
      type_,
      public: public.into(),
      private: private_key.to_vec().into(),
    })
  }

  /// Returns the [`KeyType`] of the `KeyPair`.
  pub fn type_(&self) -> KeyType {
    self.type_
  }

  /// Returns a reference to the [`PublicKey`].
  pub fn public(&self) -> &PublicKey {
    &self.public
  }

  /// Returns a reference to the [`PrivateKey`].
  pub fn private(&self) -> &PrivateKey {
    &self.private
  }

  /// Exports the public key as a [`Jwk`].
  pub fn public_jwk(&self) -> Result<Jwk> {
    Jwk::from_public_key(self.type_, self.public.as_slice())
  }
}
