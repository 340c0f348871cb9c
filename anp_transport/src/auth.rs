// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use serde::Serialize;

use anp_core::common::Timestamp;
use anp_core::convert::ToJson;
use anp_core::utils;
use anp_did::identity::AUTH_KEY_FRAGMENT;
use anp_did::DidIdentity;
use anp_did::DidSignature;

use crate::error::Error;
use crate::error::Result;

/// The authorization scheme name.
pub const AUTH_SCHEME: &str = "DIDWba";

/// The length of the random nonce in bytes, before base64url encoding.
pub const NONCE_LENGTH: usize = 16;

// The canonicalized payload covered by the header signature.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthPayload<'a> {
  did: &'a str,
  nonce: &'a str,
  timestamp: &'a str,
  verification_method: &'a str,
}

/// The parsed fields of a `DIDWba` authorization header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationFields {
  pub did: String,
  pub nonce: String,
  pub timestamp: String,
  pub verification_method: String,
  pub signature: String,
}

/// Returns the canonical byte sequence covered by a `DIDWba` signature.
pub fn signable_payload(did: &str, nonce: &str, timestamp: &str, verification_method: &str) -> Result<Vec<u8>> {
  let payload: AuthPayload<'_> = AuthPayload {
    did,
    nonce,
    timestamp,
    verification_method,
  };
  Ok(payload.to_jcs()?)
}

/// Builds the value of a `DIDWba` authorization header for `identity`.
pub fn build_authorization(identity: &DidIdentity) -> Result<String> {
  let did: String = identity.did().to_string();
  let nonce: String = utils::encode_b64url(utils::random_bytes::<NONCE_LENGTH>()?);
  let timestamp: String = Timestamp::now_utc().to_rfc3339();

  let payload: Vec<u8> = signable_payload(&did, &nonce, &timestamp, AUTH_KEY_FRAGMENT)?;
  let signature: DidSignature = identity.sign(&payload)?;

  Ok(format!(
    "{AUTH_SCHEME} did=\"{did}\", nonce=\"{nonce}\", timestamp=\"{timestamp}\", \
     verification_method=\"{AUTH_KEY_FRAGMENT}\", signature=\"{}\"",
    utils::encode_b64url(&signature.value)
  ))
}

/// Parses the value of a `DIDWba` authorization header.
pub fn parse_authorization(header: &str) -> Result<AuthorizationFields> {
  let parameters: &str = header
    .strip_prefix(AUTH_SCHEME)
    .ok_or_else(|| Error::MalformedAuthorization(format!("missing `{AUTH_SCHEME}` scheme")))?
    .trim_start();

  let mut did: Option<String> = None;
  let mut nonce: Option<String> = None;
  let mut timestamp: Option<String> = None;
  let mut verification_method: Option<String> = None;
  let mut signature: Option<String> = None;

  for parameter in parameters.split(',') {
    let (key, value): (&str, &str) = parameter
      .trim()
      .split_once('=')
      .ok_or_else(|| Error::MalformedAuthorization(format!("`{parameter}` is not a key=value pair")))?;
    let value: &str = value.trim_matches('"');

    match key {
      "did" => did = Some(value.to_owned()),
      "nonce" => nonce = Some(value.to_owned()),
      "timestamp" => timestamp = Some(value.to_owned()),
      "verification_method" => verification_method = Some(value.to_owned()),
      "signature" => signature = Some(value.to_owned()),
      _ => {}
    }
  }

  let missing = |field: &str| Error::MalformedAuthorization(format!("missing `{field}`"));

  Ok(AuthorizationFields {
    did: did.ok_or_else(|| missing("did"))?,
    nonce: nonce.ok_or_else(|| missing("nonce"))?,
    timestamp: timestamp.ok_or_else(|| missing("timestamp"))?,
    verification_method: verification_method.ok_or_else(|| missing("verification_method"))?,
    signature: signature.ok_or_else(|| missing("signature"))?,
  })
}

/// Checks that an authorization timestamp lies within the given freshness
/// window around now. A pure helper for server-side collaborators.
pub fn verify_timestamp(timestamp: &Timestamp, window: Duration) -> bool {
  let delta: i64 = Timestamp::now_utc().to_unix() - timestamp.to_unix();
  delta.unsigned_abs() <= window.as_secs()
}
