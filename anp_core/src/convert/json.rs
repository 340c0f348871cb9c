// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// A convenience extension for converting `Serialize` types to JSON.
pub trait ToJson: Serialize {
  /// Serialize `self` as a string of JSON.
  fn to_json(&self) -> Result<String> {
    serde_json::to_string(self).map_err(Into::into)
  }

  /// Serialize `self` as a JSON byte vector.
  fn to_json_vec(&self) -> Result<Vec<u8>> {
    serde_json::to_vec(self).map_err(Into::into)
  }

  /// Serialize `self` as a [`serde_json::Value`].
  fn to_json_value(&self) -> Result<serde_json::Value> {
    serde_json::to_value(self).map_err(Into::into)
  }

  /// Serialize `self` as the canonical JSON byte vector defined by the
  /// JSON Canonicalization Scheme (RFC 8785).
  ///
  /// Two implementations signing the same logical document must produce
  /// byte-identical output here; this is the signature input everywhere a
  /// proof is attached to a JSON document.
  fn to_jcs(&self) -> Result<Vec<u8>> {
    serde_jcs::to_vec(self).map_err(Into::into)
  }
}

impl<T> ToJson for T where T: Serialize {}

/// A convenience extension for constructing types from JSON.
pub trait FromJson: DeserializeOwned + Sized {
  /// Deserialize `Self` from a string of JSON text.
  fn from_json(json: &(impl AsRef<str> + ?Sized)) -> Result<Self> {
    serde_json::from_str(json.as_ref()).map_err(Into::into)
  }

  /// Deserialize `Self` from bytes of JSON text.
  fn from_json_slice(json: &(impl AsRef<[u8]> + ?Sized)) -> Result<Self> {
    serde_json::from_slice(json.as_ref()).map_err(Into::into)
  }

  /// Deserialize `Self` from a [`serde_json::Value`].
  fn from_json_value(json: serde_json::Value) -> Result<Self> {
    serde_json::from_value(json).map_err(Into::into)
  }
}

impl<T> FromJson for T where T: DeserializeOwned + Sized {}
