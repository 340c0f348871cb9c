// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! `did:wba` identifiers, DID documents and HTTP(S) resolution.
//!
//! The `did:wba` method maps a DID to a well-known HTTPS location derived
//! from its authority and optional path segments. This crate implements
//! identifier parsing and construction, the DID document data model, a
//! TTL-bounded resolution cache, and the [`DidManager`] that ties identity
//! creation, resolution, signing and verification together.

#![forbid(unsafe_code)]

pub mod cache;
pub mod did;
pub mod document;
pub mod error;
pub mod identity;
pub mod manager;

pub use self::did::http_scheme;
pub use self::did::CreateDidOptions;
pub use self::did::WbaDid;
pub use self::document::DidDocument;
pub use self::document::MethodType;
pub use self::document::VerificationMethod;
pub use self::error::Error;
pub use self::error::Result;
pub use self::identity::DidIdentity;
pub use self::identity::DidSignature;
pub use self::manager::DidManager;
pub use self::manager::DidManagerConfig;
pub use self::manager::ResolveOptions;
