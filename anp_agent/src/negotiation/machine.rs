// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use anp_did::DidDocument;
use anp_did::DidIdentity;
use anp_did::WbaDid;

use crate::channel::EncryptedChannel;
use crate::codec;
use crate::codec::ProtocolType;
use crate::error::Error;
use crate::error::Result;
use crate::message;
use crate::message::CodeGenerationStatus;
use crate::message::MetaMessage;
use crate::message::NegotiationStatus;
use crate::message::ReviewStatus;
use crate::negotiation::Event;
use crate::negotiation::State;

/// The default bound on negotiation rounds.
pub const DEFAULT_MAX_NEGOTIATION_ROUNDS: u32 = 10;

/// Configuration for a [`NegotiationMachine`].
#[derive(Clone, Debug)]
pub struct NegotiationConfig {
  /// The identity used to open the encrypted channel once agreement is
  /// reached; machines driven purely by an application may omit it.
  pub local_identity: Option<Arc<DidIdentity>>,
  /// The DID of the peer this machine negotiates with.
  pub remote_did: WbaDid,
  /// The bound on negotiation rounds before giving up.
  pub max_negotiation_rounds: u32,
  /// An advisory wall-clock budget. The machine owns no timer; callers
  /// observing the budget inject [`Event::Timeout`] themselves.
  pub timeout: Option<Duration>,
}

impl NegotiationConfig {
  /// Creates a configuration with default bounds for the given peer.
  pub fn new(remote_did: WbaDid) -> Self {
    Self {
      local_identity: None,
      remote_did,
      max_negotiation_rounds: DEFAULT_MAX_NEGOTIATION_ROUNDS,
      timeout: None,
    }
  }
}

/// The mutable context threaded through every transition.
#[derive(Clone, Debug)]
pub struct NegotiationContext {
  pub sequence_id: u64,
  pub candidate_protocols: String,
  pub agreed_protocol: Option<String>,
  pub test_cases: Option<String>,
  pub max_negotiation_rounds: u32,
  pub remote_did: WbaDid,
  pub local_identity: Option<Arc<DidIdentity>>,
  pub negotiation_round: u32,
  pub errors: Vec<String>,
}

/// One side of a protocol negotiation.
///
/// Event dispatch requires exclusive access, which serializes the state
/// changes of a machine; distinct machines are fully independent.
#[derive(Clone, Debug)]
pub struct NegotiationMachine {
  state: State,
  context: NegotiationContext,
}

impl NegotiationMachine {
  /// Creates a machine in [`State::Idle`].
  pub fn new(config: NegotiationConfig) -> Self {
    Self {
      state: State::Idle,
      context: NegotiationContext {
        sequence_id: 0,
        candidate_protocols: String::new(),
        agreed_protocol: None,
        test_cases: None,
        max_negotiation_rounds: config.max_negotiation_rounds,
        remote_did: config.remote_did,
        local_identity: config.local_identity,
        negotiation_round: 0,
        errors: Vec::new(),
      },
    }
  }

  /// Returns the current state.
  pub fn state(&self) -> State {
    self.state
  }

  /// Returns the negotiation context.
  pub fn context(&self) -> &NegotiationContext {
    &self.context
  }

  /// Applies one event and returns the resulting state.
  ///
  /// Events with no transition from the current state are discarded, and
  /// terminal states never change.
  pub fn dispatch(&mut self, event: Event) -> State {
    let next: State = transition(self.state, event, &mut self.context);
    if next != self.state {
      debug!("[NegotiationMachine] {:?} -> {next:?}", self.state);
    }
    self.state = next;
    next
  }

  /// Decodes an incoming frame, maps the contained meta message to an
  /// event, dispatches it, and returns the parsed message.
  ///
  /// The frame must carry the META protocol type. A peer accepting
  /// several comma-separated protocols at once is a protocol violation.
  pub fn process_incoming(&mut self, frame: &[u8]) -> Result<MetaMessage> {
    let (protocol_type, data): (ProtocolType, &[u8]) = codec::decode_frame(frame)?;
    if protocol_type != ProtocolType::Meta {
      return Err(Error::UnexpectedProtocolType(protocol_type));
    }

    let message: MetaMessage = message::parse_meta(data)?;
    if let Some(event) = event_for_message(&message)? {
      self.dispatch(event);
    }

    Ok(message)
  }

  /// Opens the encrypted channel towards the peer.
  ///
  /// Available from [`State::Ready`] and [`State::Communicating`], and
  /// only when the machine was configured with a local identity.
  pub fn open_channel(&self, remote_document: &DidDocument, salt: &[u8]) -> Result<EncryptedChannel> {
    if !matches!(self.state, State::Ready | State::Communicating) {
      return Err(Error::ChannelUnavailable(self.state));
    }

    let identity: &DidIdentity = self
      .context
      .local_identity
      .as_deref()
      .ok_or(Error::MissingLocalIdentity)?;

    EncryptedChannel::from_documents(identity, remote_document, salt)
  }
}

// The pure transition function: maps (state, event) to the next state,
// mutating the context along the way.
fn transition(state: State, event: Event, context: &mut NegotiationContext) -> State {
  if state.is_terminal() {
    return state;
  }

  match (state, event) {
    (State::Idle, Event::Initiate { candidate_protocols }) => {
      context.candidate_protocols = candidate_protocols;
      State::Negotiating
    }
    (State::Idle, Event::ReceiveRequest {
      candidate_protocols,
      sequence_id,
    }) => {
      context.candidate_protocols = candidate_protocols;
      context.sequence_id = sequence_id;
      State::Negotiating
    }
    (State::Negotiating, Event::Negotiate { candidate_protocols }) => {
      if context.negotiation_round >= context.max_negotiation_rounds {
        return State::Rejected;
      }
      context.negotiation_round += 1;
      context.sequence_id += 1;
      context.candidate_protocols = candidate_protocols;
      State::Negotiating
    }
    (State::Negotiating, Event::Accept { protocol }) => {
      context.agreed_protocol = Some(protocol);
      State::CodeGeneration
    }
    (State::Negotiating, Event::Reject | Event::Timeout) => State::Rejected,
    (State::CodeGeneration, Event::CodeReady) => State::TestCases,
    (State::CodeGeneration, Event::CodeError { error }) => {
      context.errors.push(error);
      State::Failed
    }
    (State::TestCases, Event::TestsAgreed { test_cases }) => {
      context.test_cases = Some(test_cases);
      State::Testing
    }
    (State::TestCases, Event::SkipTests) => State::Ready,
    (State::Testing, Event::TestsPassed) => State::Ready,
    (State::Testing, Event::TestsFailed { error }) => {
      context.errors.push(error);
      State::FixError
    }
    (State::FixError, Event::FixAccepted) => State::CodeGeneration,
    (State::FixError, Event::FixRejected) => State::Failed,
    (State::Ready, Event::StartCommunication) => State::Communicating,
    (State::Communicating, Event::ProtocolError { error }) => {
      context.errors.push(error);
      State::FixError
    }
    (State::Communicating, Event::End) => State::Completed,
    // Stale or irrelevant events are discarded.
    (state, _) => state,
  }
}

// Maps an incoming meta message to the event it stands for, if any.
fn event_for_message(message: &MetaMessage) -> Result<Option<Event>> {
  let event: Option<Event> = match message {
    MetaMessage::ProtocolNegotiation {
      sequence_id,
      candidate_protocols,
      status,
      ..
    } => match status {
      NegotiationStatus::Negotiating => Some(Event::ReceiveRequest {
        candidate_protocols: candidate_protocols.clone(),
        sequence_id: *sequence_id,
      }),
      NegotiationStatus::Accepted => {
        // Under `accepted` the member names the single chosen protocol.
        if candidate_protocols.contains(',') {
          return Err(Error::AmbiguousAcceptedProtocol(candidate_protocols.clone()));
        }
        Some(Event::Accept {
          protocol: candidate_protocols.trim().to_owned(),
        })
      }
      NegotiationStatus::Rejected => Some(Event::Reject),
      NegotiationStatus::Timeout => Some(Event::Timeout),
    },
    MetaMessage::CodeGeneration { status } => match status {
      CodeGenerationStatus::Generated => Some(Event::CodeReady),
      CodeGenerationStatus::Error => Some(Event::CodeError {
        error: "peer reported code generation failure".to_owned(),
      }),
    },
    MetaMessage::TestCasesNegotiation { test_cases, status, .. } => match status {
      ReviewStatus::Accepted => Some(Event::TestsAgreed {
        test_cases: test_cases.clone(),
      }),
      ReviewStatus::Rejected => Some(Event::SkipTests),
      ReviewStatus::Negotiating => None,
    },
    MetaMessage::FixErrorNegotiation { status, .. } => match status {
      ReviewStatus::Accepted => Some(Event::FixAccepted),
      ReviewStatus::Rejected => Some(Event::FixRejected),
      ReviewStatus::Negotiating => None,
    },
    // Natural-language exchanges carry no state transition.
    MetaMessage::NaturalLanguageNegotiation { .. } => None,
  };

  Ok(event)
}
