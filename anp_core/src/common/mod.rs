// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Common types shared across the SDK.

mod shared;
mod timestamp;

pub use self::shared::Shared;
pub use self::timestamp::Timestamp;
