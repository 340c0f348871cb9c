// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Display;
use core::fmt::Formatter;
use core::str::FromStr;

use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::Error;
use crate::error::Result;

/// The scheme and method prefix of every `did:wba` identifier.
pub const METHOD_PREFIX: &str = "did:wba:";

// Everything outside the RFC 3986 unreserved set is percent-encoded, most
// notably the `:` separating host and port.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'.')
  .remove(b'_')
  .remove(b'~');

const PORT_HTTPS: u16 = 443;

/// Returns the URL scheme mandated for the given host.
///
/// Loopback hosts resolve over plain HTTP; every other host resolves over
/// HTTPS. This rule is deliberately not configurable.
pub fn http_scheme(host: &str) -> &'static str {
  if host == "localhost" || host == "127.0.0.1" {
    "http"
  } else {
    "https"
  }
}

/// Options accepted when creating a new `did:wba` identity.
#[derive(Clone, Debug, Default)]
pub struct CreateDidOptions {
  /// The DNS name hosting the DID document, optionally with an embedded
  /// `:<port>` suffix.
  pub domain: String,
  /// An explicit port, mutually exclusive with a port embedded in `domain`.
  pub port: Option<u16>,
  /// A `/`-separated path scoping the DID below the authority.
  pub path: Option<String>,
}

/// A parsed Web-Based Agent DID.
///
/// The canonical string form is `did:wba:<authority>[:<segment>]*` where the
/// authority and each path segment are independently percent-encoded, the
/// host is lowercase, and port 443 is omitted.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WbaDid {
  host: String,
  port: Option<u16>,
  path_segments: Vec<String>,
}

impl WbaDid {
  /// Constructs a `WbaDid` from creation options, validating the domain.
  pub fn new(options: &CreateDidOptions) -> Result<Self> {
    let (host, embedded_port): (&str, Option<&str>) = match options.domain.split_once(':') {
      Some((host, port)) => (host, Some(port)),
      None => (options.domain.as_str(), None),
    };

    let port: Option<u16> = match (embedded_port, options.port) {
      (Some(_), Some(_)) => {
        return Err(Error::InvalidDomain("port specified both in domain and options".to_owned()));
      }
      (Some(embedded), None) => Some(parse_port(embedded)?),
      (None, explicit) => explicit,
    };

    validate_host(host)?;

    let path_segments: Vec<String> = match options.path.as_deref() {
      Some(path) => split_path(path)?,
      None => Vec::new(),
    };

    Ok(Self {
      host: host.to_ascii_lowercase(),
      port: port.filter(|port| *port != PORT_HTTPS),
      path_segments,
    })
  }

  /// Parses a `WbaDid` from its string representation.
  pub fn parse(input: &str) -> Result<Self> {
    let suffix: &str = input
      .strip_prefix(METHOD_PREFIX)
      .ok_or_else(|| Error::InvalidDid(format!("`{input}` does not start with `{METHOD_PREFIX}`")))?;

    let mut parts = suffix.split(':');
    let authority: String = decode_part(parts.next().unwrap_or_default())?;

    let (host, port): (&str, Option<u16>) = match authority.split_once(':') {
      Some((host, port)) => (host, Some(parse_port(port)?)),
      None => (authority.as_str(), None),
    };
    validate_host(host)?;

    let mut path_segments: Vec<String> = Vec::new();
    for part in parts {
      let segment: String = decode_part(part)?;
      if segment.is_empty() {
        return Err(Error::InvalidDid(format!("`{input}` contains an empty path segment")));
      }
      path_segments.push(segment);
    }

    Ok(Self {
      host: host.to_ascii_lowercase(),
      port: port.filter(|port| *port != PORT_HTTPS),
      path_segments,
    })
  }

  /// Returns the lowercase host.
  pub fn host(&self) -> &str {
    &self.host
  }

  /// Returns the port, if one is part of the canonical identifier.
  pub fn port(&self) -> Option<u16> {
    self.port
  }

  /// Returns the authority: the host, with `:<port>` appended when present.
  pub fn authority(&self) -> String {
    match self.port {
      Some(port) => format!("{}:{}", self.host, port),
      None => self.host.clone(),
    }
  }

  /// Returns the decoded path segments.
  pub fn path_segments(&self) -> &[String] {
    &self.path_segments
  }

  /// Returns the id of a verification method under this DID.
  pub fn method_id(&self, fragment: &str) -> String {
    format!("{self}#{fragment}")
  }

  /// Returns the URL scheme used when resolving this DID.
  pub fn scheme(&self) -> &'static str {
    http_scheme(&self.host)
  }

  /// Returns the URL at which the DID document of this DID is hosted.
  ///
  /// Path-scoped DIDs resolve to `<path>/did.json`, all others to the
  /// `/.well-known/did.json` location.
  pub fn document_url(&self) -> String {
    let scheme: &str = self.scheme();
    let authority: String = self.authority();

    if self.path_segments.is_empty() {
      format!("{scheme}://{authority}/.well-known/did.json")
    } else {
      format!("{scheme}://{authority}/{}/did.json", self.path_segments.join("/"))
    }
  }
}

impl Display for WbaDid {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{METHOD_PREFIX}{}", utf8_percent_encode(&self.authority(), ENCODE_SET))?;
    for segment in &self.path_segments {
      write!(f, ":{}", utf8_percent_encode(segment, ENCODE_SET))?;
    }
    Ok(())
  }
}

impl FromStr for WbaDid {
  type Err = Error;

  fn from_str(string: &str) -> Result<Self, Self::Err> {
    Self::parse(string)
  }
}

impl Serialize for WbaDid {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}

impl<'de> Deserialize<'de> for WbaDid {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let string: String = String::deserialize(deserializer)?;
    Self::parse(&string).map_err(de::Error::custom)
  }
}

fn decode_part(part: &str) -> Result<String> {
  percent_decode_str(part)
    .decode_utf8()
    .map(|decoded| decoded.into_owned())
    .map_err(|_| Error::InvalidDid(format!("`{part}` is not valid percent-encoded UTF-8")))
}

fn parse_port(port: &str) -> Result<u16> {
  match port.parse::<u16>() {
    Ok(port) if port > 0 => Ok(port),
    _ => Err(Error::InvalidDomain(format!("`{port}` is not a valid port"))),
  }
}

fn validate_host(host: &str) -> Result<()> {
  if host.is_empty() {
    return Err(Error::InvalidDomain("empty host".to_owned()));
  }
  if host.contains("://") || host.starts_with("http") {
    return Err(Error::InvalidDomain(format!("`{host}` must not carry a scheme")));
  }
  if host.chars().any(char::is_whitespace) {
    return Err(Error::InvalidDomain(format!("`{host}` contains whitespace")));
  }

  for label in host.split('.') {
    let valid: bool = !label.is_empty()
      && !label.starts_with('-')
      && !label.ends_with('-')
      && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
      return Err(Error::InvalidDomain(format!("`{host}` is not a valid DNS name")));
    }
  }

  Ok(())
}

fn split_path(path: &str) -> Result<Vec<String>> {
  let trimmed: &str = path.trim_matches('/');
  if trimmed.is_empty() {
    return Ok(Vec::new());
  }

  let mut segments: Vec<String> = Vec::new();
  for segment in trimmed.split('/') {
    if segment.is_empty() {
      return Err(Error::InvalidDomain(format!("`{path}` contains an empty path segment")));
    }
    if segment.chars().any(char::is_whitespace) {
      return Err(Error::InvalidDomain(format!("`{path}` contains whitespace")));
    }
    segments.push(segment.to_owned());
  }
  Ok(segments)
}
