// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Agent-to-agent communication: the binary frame codec, the meta-protocol
//! messages that negotiate an application protocol, the negotiation state
//! machine, and the end-to-end encrypted channel agents switch to once a
//! protocol is agreed.

#![forbid(unsafe_code)]

pub mod channel;
pub mod codec;
pub mod error;
pub mod message;
pub mod negotiation;

pub use self::channel::EncryptedChannel;
pub use self::codec::decode_frame;
pub use self::codec::encode_frame;
pub use self::codec::ProtocolType;
pub use self::error::Error;
pub use self::error::Result;
pub use self::message::parse_meta;
pub use self::message::CodeGenerationStatus;
pub use self::message::MetaMessage;
pub use self::message::NaturalLanguageKind;
pub use self::message::NegotiationStatus;
pub use self::message::ReviewStatus;
pub use self::negotiation::Event;
pub use self::negotiation::NegotiationConfig;
pub use self::negotiation::NegotiationContext;
pub use self::negotiation::NegotiationMachine;
pub use self::negotiation::State;
