// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! SDK for the Agent Network Protocol.
//!
//! Re-exports the member crates under stable module names:
//!
//! - [`core`]: crypto primitives, JSON/JCS conversion, shared types.
//! - [`did`]: `did:wba` identities, documents and resolution.
//! - [`description`]: signed agent description documents.
//! - [`transport`]: HTTP with DID-signed authentication headers.
//! - [`discovery`]: well-known collections and search services.
//! - [`agent`]: meta-protocol negotiation and encrypted channels.

#![forbid(unsafe_code)]

pub use anp_agent as agent;
pub use anp_core as core;
pub use anp_description as description;
pub use anp_did as did;
pub use anp_discovery as discovery;
pub use anp_transport as transport;

/// The commonly used types, importable in one line.
pub mod prelude {
  pub use anp_agent::EncryptedChannel;
  pub use anp_agent::Event;
  pub use anp_agent::MetaMessage;
  pub use anp_agent::NegotiationConfig;
  pub use anp_agent::NegotiationMachine;
  pub use anp_agent::State;
  pub use anp_core::common::Timestamp;
  pub use anp_core::crypto::EncryptedMessage;
  pub use anp_core::crypto::KeyPair;
  pub use anp_core::crypto::KeyType;
  pub use anp_description::AgentDescription;
  pub use anp_description::DescriptionManager;
  pub use anp_description::DescriptionMetadata;
  pub use anp_did::CreateDidOptions;
  pub use anp_did::DidDocument;
  pub use anp_did::DidIdentity;
  pub use anp_did::DidManager;
  pub use anp_did::DidManagerConfig;
  pub use anp_did::WbaDid;
  pub use anp_discovery::DiscoveryManager;
  pub use anp_transport::DidAuthClient;
}
