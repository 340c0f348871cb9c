// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! The negotiation state machine driving two agents from "no agreement" to
//! a running application protocol.

mod event;
mod machine;
mod state;

pub use self::event::Event;
pub use self::machine::NegotiationConfig;
pub use self::machine::NegotiationContext;
pub use self::machine::NegotiationMachine;
pub use self::machine::DEFAULT_MAX_NEGOTIATION_ROUNDS;
pub use self::state::State;
