// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Agent discovery: paginated `/.well-known/agent-descriptions` walks and
//! search-service registration and queries.

#![forbid(unsafe_code)]

pub mod discovery;
pub mod error;

pub use self::discovery::AgentListing;
pub use self::discovery::CollectionPage;
pub use self::discovery::DiscoveryManager;
pub use self::error::Error;
pub use self::error::Result;
