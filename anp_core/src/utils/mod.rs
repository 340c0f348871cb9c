// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Encoding and randomness helpers.

use crate::error::Result;

/// Encodes the given bytes as unpadded base64url.
pub fn encode_b64url(data: impl AsRef<[u8]>) -> String {
  base64::encode_config(data.as_ref(), base64::URL_SAFE_NO_PAD)
}

/// Decodes the given unpadded base64url string.
pub fn decode_b64url(data: impl AsRef<[u8]>) -> Result<Vec<u8>> {
  base64::decode_config(data.as_ref(), base64::URL_SAFE_NO_PAD).map_err(Into::into)
}

/// Fills a fixed-size array with cryptographically secure random bytes.
pub fn random_bytes<const N: usize>() -> Result<[u8; N]> {
  let mut bytes: [u8; N] = [0; N];
  crypto::utils::rand::fill(&mut bytes)?;
  Ok(bytes)
}

/// Serde helpers for fields carried as unpadded base64url strings.
pub mod b64 {
  use serde::de::Error as _;
  use serde::Deserialize;
  use serde::Deserializer;
  use serde::Serializer;

  pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&super::encode_b64url(data))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let string: String = String::deserialize(deserializer)?;
    super::decode_b64url(&string).map_err(D::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::decode_b64url;
  use super::encode_b64url;
  use super::random_bytes;

  #[test]
  fn test_b64url_round_trip() {
    let data: &[u8] = &[0xff, 0xfe, 0x00, 0x7f, 0x80];
    let encoded: String = encode_b64url(data);

    assert!(!encoded.contains('='));
    assert!(!encoded.contains('+'));
    assert!(!encoded.contains('/'));
    assert_eq!(decode_b64url(&encoded).unwrap(), data);
  }

  #[test]
  fn test_decode_rejects_invalid() {
    assert!(decode_b64url("not base64url!").is_err());
  }

  #[test]
  fn test_random_bytes_are_fresh() {
    let a: [u8; 32] = random_bytes().unwrap();
    let b: [u8; 32] = random_bytes().unwrap();

    assert_ne!(a, b);
  }
}
