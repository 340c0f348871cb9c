// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Signed agent description documents.
//!
//! An agent description is a JSON-LD-style document advertising an agent's
//! metadata, information resources and interfaces. Signing canonicalizes
//! the document with the JSON Canonicalization Scheme (RFC 8785) and
//! attaches an `Ed25519Signature2020` proof bound to a challenge and a
//! domain.
//!
//! One wire quirk is deliberate: the information list is spelled
//! `Infomations` on the wire. The misspelling is part of the compatibility
//! surface and preserved exactly.

#![forbid(unsafe_code)]

pub mod description;
pub mod error;
pub mod manager;
pub mod proof;

pub use self::description::AgentDescription;
pub use self::description::DescriptionMetadata;
pub use self::description::Information;
pub use self::description::Interface;
pub use self::description::SecurityDefinition;
pub use self::error::Error;
pub use self::error::Result;
pub use self::manager::DescriptionManager;
pub use self::proof::Proof;
