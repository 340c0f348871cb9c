// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use serde::Serialize;

use crate::crypto::KeyType;
use crate::error::Error;
use crate::error::Result;
use crate::utils;

/// A JSON Web Key restricted to the public members used on the wire.
///
/// Octet key pairs (`OKP`) carry the raw public key in `x`; elliptic curve
/// keys (`EC`) carry both affine coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
  pub kty: String,
  pub crv: String,
  pub x: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub y: Option<String>,
}

impl Jwk {
  /// Builds the `Jwk` for a public key of the given [`KeyType`].
  pub fn from_public_key(type_: KeyType, public_key: &[u8]) -> Result<Self> {
    match type_ {
      KeyType::Ed25519 | KeyType::X25519 => {
        if public_key.len() != 32 {
          return Err(Error::InvalidKeyMaterial("expected a 32-byte OKP public key"));
        }
        Ok(Self {
          kty: "OKP".to_owned(),
          crv: type_.as_str().to_owned(),
          x: utils::encode_b64url(public_key),
          y: None,
        })
      }
      KeyType::Secp256k1 => {
        // Accept any SEC1 encoding and normalize to the uncompressed point.
        let public: libsecp256k1::PublicKey =
          libsecp256k1::PublicKey::parse_slice(public_key, None).map_err(|_| Error::Secp256k1Error)?;
        let uncompressed: [u8; 65] = public.serialize();
        Ok(Self {
          kty: "EC".to_owned(),
          crv: "secp256k1".to_owned(),
          x: utils::encode_b64url(&uncompressed[1..33]),
          y: Some(utils::encode_b64url(&uncompressed[33..65])),
        })
      }
    }
  }

  /// Returns the [`KeyType`] identified by the `kty`/`crv` members.
  pub fn key_type(&self) -> Result<KeyType> {
    match (self.kty.as_str(), self.crv.as_str()) {
      ("OKP", "Ed25519") => Ok(KeyType::Ed25519),
      ("OKP", "X25519") => Ok(KeyType::X25519),
      ("EC", "secp256k1") => Ok(KeyType::Secp256k1),
      _ => Err(Error::InvalidJwk("unsupported kty/crv combination")),
    }
  }

  /// Returns the raw public key bytes: 32 bytes for OKP curves, the 65-byte
  /// uncompressed SEC1 point for EC curves.
  pub fn public_key_bytes(&self) -> Result<Vec<u8>> {
    match self.key_type()? {
      KeyType::Ed25519 | KeyType::X25519 => {
        let x: Vec<u8> = utils::decode_b64url(&self.x)?;
        if x.len() != 32 {
          return Err(Error::InvalidJwk("expected a 32-byte x member"));
        }
        Ok(x)
      }
      KeyType::Secp256k1 => {
        let x: Vec<u8> = utils::decode_b64url(&self.x)?;
        let y: Vec<u8> = utils::decode_b64url(self.y.as_deref().ok_or(Error::InvalidJwk("missing y member"))?)?;
        if x.len() != 32 || y.len() != 32 {
          return Err(Error::InvalidJwk("expected 32-byte x and y members"));
        }
        let mut point: Vec<u8> = Vec::with_capacity(65);
        point.push(0x04);
        point.extend_from_slice(&x);
        point.extend_from_slice(&y);
        Ok(point)
      }
    }
  }
}
