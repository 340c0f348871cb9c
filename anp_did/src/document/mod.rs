// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! The DID document data model.

mod document;
mod method;

pub use self::document::DidDocument;
pub use self::method::MethodType;
pub use self::method::VerificationMethod;
