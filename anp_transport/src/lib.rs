// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport with DID-signed authentication headers.
//!
//! Every outbound request made with an identity carries a `DIDWba`
//! authorization header: a canonicalized payload of DID, nonce, timestamp
//! and verification method, signed with the caller's Ed25519
//! authentication key. Identity-less requests are sent bare. Server-side
//! verification belongs to external collaborators; the pure helpers in
//! [`auth`] cover the reusable parts of it.

#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod error;

pub use self::auth::AuthorizationFields;
pub use self::client::DidAuthClient;
pub use self::error::Error;
pub use self::error::Result;
