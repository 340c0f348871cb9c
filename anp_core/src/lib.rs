// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core primitives for the Agent Network Protocol SDK.
//!
//! This crate hosts everything the higher layers share: key generation and
//! raw signing for the supported curves, ECDHE and HKDF key derivation,
//! AES-256-GCM authenticated encryption, JSON (de)serialization with
//! RFC 8785 canonicalization, and a handful of small common types.
//!
//! Higher crates must not touch raw cryptographic material themselves; the
//! operations in [`crypto`] are the only place where curve points, IVs and
//! JWK members are constructed or parsed.

#![forbid(unsafe_code)]

pub mod common;
pub mod convert;
pub mod crypto;
pub mod error;
pub mod utils;

pub use self::error::Error;
pub use self::error::Result;
