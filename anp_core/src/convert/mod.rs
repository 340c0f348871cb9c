// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Traits for JSON conversion and RFC 8785 canonicalization.

mod json;

pub use self::json::FromJson;
pub use self::json::ToJson;
