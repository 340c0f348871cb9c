// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use anp_core::common::Timestamp;

use crate::error::Error;
use crate::error::Result;
use crate::proof::Proof;

/// The protocol family every description declares.
pub const PROTOCOL_TYPE: &str = "ANP";

/// The document type of every description.
pub const DOCUMENT_TYPE: &str = "AgentDescription";

/// The protocol version used when the metadata leaves it unset.
pub const DEFAULT_PROTOCOL_VERSION: &str = "1.0.0";

/// The name of the seeded DID-WBA security scheme.
pub const SECURITY_SCHEME: &str = "did_wba";

/// A security scheme entry under `securityDefinitions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityDefinition {
  pub scheme: String,
  #[serde(rename = "type")]
  pub type_: String,
  pub description: String,
}

/// An information resource advertised by an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Information {
  #[serde(rename = "type")]
  pub type_: String,
  pub description: String,
  pub url: String,
}

/// An interface endpoint advertised by an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
  #[serde(rename = "type")]
  pub type_: String,
  pub protocol: String,
  pub version: String,
  pub url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// The caller-supplied metadata for a fresh description.
#[derive(Clone, Debug, Default)]
pub struct DescriptionMetadata {
  pub name: String,
  pub did: Option<String>,
  pub owner: Option<String>,
  pub description: Option<String>,
  pub protocol_version: Option<String>,
}

/// An agent description document.
///
/// The `Infomations` spelling is wire-canonical and must not be corrected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentDescription {
  #[serde(rename = "protocolType")]
  pub protocol_type: String,
  #[serde(rename = "protocolVersion")]
  pub protocol_version: String,
  #[serde(rename = "type")]
  pub type_: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub did: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub created: Timestamp,
  #[serde(rename = "securityDefinitions")]
  pub security_definitions: BTreeMap<String, SecurityDefinition>,
  pub security: String,
  #[serde(rename = "Infomations", default, skip_serializing_if = "Vec::is_empty")]
  pub infomations: Vec<Information>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub interfaces: Vec<Interface>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub proof: Option<Proof>,
}

impl AgentDescription {
  /// Creates a description from metadata, seeding the DID-WBA security
  /// scheme and the creation timestamp.
  pub fn new(metadata: DescriptionMetadata) -> Result<Self> {
    if metadata.name.is_empty() {
      return Err(Error::EmptyField("name"));
    }

    let mut security_definitions: BTreeMap<String, SecurityDefinition> = BTreeMap::new();
    security_definitions.insert(
      SECURITY_SCHEME.to_owned(),
      SecurityDefinition {
        scheme: SECURITY_SCHEME.to_owned(),
        type_: "http".to_owned(),
        description: "DID WBA authentication".to_owned(),
      },
    );

    Ok(Self {
      protocol_type: PROTOCOL_TYPE.to_owned(),
      protocol_version: metadata
        .protocol_version
        .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_owned()),
      type_: DOCUMENT_TYPE.to_owned(),
      name: metadata.name,
      did: metadata.did,
      owner: metadata.owner,
      description: metadata.description,
      created: Timestamp::now_utc(),
      security_definitions,
      security: SECURITY_SCHEME.to_owned(),
      infomations: Vec::new(),
      interfaces: Vec::new(),
      proof: None,
    })
  }

  /// Returns a new description with `information` appended.
  ///
  /// Rejects empty required fields and URLs already present in the
  /// information list. The input description is left untouched.
  pub fn with_information(&self, information: Information) -> Result<Self> {
    if information.type_.is_empty() {
      return Err(Error::EmptyField("type"));
    }
    if information.description.is_empty() {
      return Err(Error::EmptyField("description"));
    }
    if information.url.is_empty() {
      return Err(Error::EmptyField("url"));
    }
    if self.infomations.iter().any(|entry| entry.url == information.url) {
      return Err(Error::DuplicateUrl(information.url));
    }

    let mut updated: Self = self.clone();
    updated.infomations.push(information);
    Ok(updated)
  }

  /// Returns a new description with `interface` appended.
  ///
  /// Rejects empty required fields and URLs already present in the
  /// interface list. The input description is left untouched.
  pub fn with_interface(&self, interface: Interface) -> Result<Self> {
    if interface.type_.is_empty() {
      return Err(Error::EmptyField("type"));
    }
    if interface.protocol.is_empty() {
      return Err(Error::EmptyField("protocol"));
    }
    if interface.version.is_empty() {
      return Err(Error::EmptyField("version"));
    }
    if interface.url.is_empty() {
      return Err(Error::EmptyField("url"));
    }
    if self.interfaces.iter().any(|entry| entry.url == interface.url) {
      return Err(Error::DuplicateUrl(interface.url));
    }

    let mut updated: Self = self.clone();
    updated.interfaces.push(interface);
    Ok(updated)
  }

  /// Checks the structural invariants of a description, as applied to
  /// fetched documents.
  pub fn validate(&self) -> Result<()> {
    if self.type_ != DOCUMENT_TYPE {
      return Err(Error::InvalidDescription(format!(
        "unexpected document type `{}`",
        self.type_
      )));
    }
    if self.name.is_empty() {
      return Err(Error::EmptyField("name"));
    }
    if !self.security_definitions.contains_key(&self.security) {
      return Err(Error::InvalidDescription(format!(
        "security scheme `{}` is not defined",
        self.security
      )));
    }

    let mut information_urls: HashSet<&str> = HashSet::new();
    for information in &self.infomations {
      if !information_urls.insert(information.url.as_str()) {
        return Err(Error::DuplicateUrl(information.url.clone()));
      }
    }

    let mut interface_urls: HashSet<&str> = HashSet::new();
    for interface in &self.interfaces {
      if !interface_urls.insert(interface.url.as_str()) {
        return Err(Error::DuplicateUrl(interface.url.clone()));
      }
    }

    Ok(())
  }
}
