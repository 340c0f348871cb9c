// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use anp_agent::encode_frame;
use anp_agent::Event;
use anp_agent::MetaMessage;
use anp_agent::NegotiationConfig;
use anp_agent::NegotiationMachine;
use anp_agent::NegotiationStatus;
use anp_agent::ProtocolType;
use anp_agent::State;
use anp_did::WbaDid;

fn test_machine() -> NegotiationMachine {
  NegotiationMachine::new(NegotiationConfig::new(WbaDid::parse("did:wba:example.com:bob").unwrap()))
}

#[test]
fn test_happy_path_to_completed() {
  let mut machine: NegotiationMachine = test_machine();
  assert_eq!(machine.state(), State::Idle);

  machine.dispatch(Event::Initiate {
    candidate_protocols: "JSON-RPC 2.0, gRPC, GraphQL".to_owned(),
  });
  assert_eq!(machine.state(), State::Negotiating);
  assert_eq!(machine.context().candidate_protocols, "JSON-RPC 2.0, gRPC, GraphQL");

  machine.dispatch(Event::Accept {
    protocol: "GraphQL".to_owned(),
  });
  assert_eq!(machine.state(), State::CodeGeneration);
  assert_eq!(machine.context().agreed_protocol.as_deref(), Some("GraphQL"));

  machine.dispatch(Event::CodeReady);
  assert_eq!(machine.state(), State::TestCases);

  machine.dispatch(Event::SkipTests);
  assert_eq!(machine.state(), State::Ready);

  machine.dispatch(Event::StartCommunication);
  assert_eq!(machine.state(), State::Communicating);

  machine.dispatch(Event::End);
  assert_eq!(machine.state(), State::Completed);
}

#[test]
fn test_testing_and_fix_loop() {
  let mut machine: NegotiationMachine = test_machine();

  machine.dispatch(Event::Initiate {
    candidate_protocols: "gRPC".to_owned(),
  });
  machine.dispatch(Event::Accept {
    protocol: "gRPC".to_owned(),
  });
  machine.dispatch(Event::CodeReady);
  machine.dispatch(Event::TestsAgreed {
    test_cases: "echo round trip".to_owned(),
  });
  assert_eq!(machine.state(), State::Testing);
  assert_eq!(machine.context().test_cases.as_deref(), Some("echo round trip"));

  machine.dispatch(Event::TestsFailed {
    error: "echo returned garbage".to_owned(),
  });
  assert_eq!(machine.state(), State::FixError);
  assert_eq!(machine.context().errors.len(), 1);

  machine.dispatch(Event::FixAccepted);
  assert_eq!(machine.state(), State::CodeGeneration);

  machine.dispatch(Event::CodeError {
    error: "regeneration failed".to_owned(),
  });
  assert_eq!(machine.state(), State::Failed);
  assert_eq!(machine.context().errors.len(), 2);
}

#[test]
fn test_rounds_are_bounded() {
  let mut machine: NegotiationMachine = test_machine();
  machine.dispatch(Event::Initiate {
    candidate_protocols: "a, b".to_owned(),
  });

  for round in 1..=10 {
    machine.dispatch(Event::Negotiate {
      candidate_protocols: format!("proposal {round}"),
    });
    assert_eq!(machine.state(), State::Negotiating);
    assert_eq!(machine.context().negotiation_round, round);
    assert_eq!(machine.context().sequence_id, u64::from(round));
  }

  machine.dispatch(Event::Negotiate {
    candidate_protocols: "one too many".to_owned(),
  });
  assert_eq!(machine.state(), State::Rejected);
  assert_eq!(machine.context().negotiation_round, 10);
}

#[test]
fn test_terminal_states_are_frozen() {
  let mut machine: NegotiationMachine = test_machine();
  machine.dispatch(Event::Initiate {
    candidate_protocols: "a".to_owned(),
  });
  machine.dispatch(Event::Reject);
  assert_eq!(machine.state(), State::Rejected);

  machine.dispatch(Event::Initiate {
    candidate_protocols: "b".to_owned(),
  });
  machine.dispatch(Event::Accept {
    protocol: "b".to_owned(),
  });
  machine.dispatch(Event::End);
  assert_eq!(machine.state(), State::Rejected);
}

#[test]
fn test_stale_events_are_discarded() {
  let mut machine: NegotiationMachine = test_machine();

  // Not valid in Idle; the machine stays put instead of erroring.
  machine.dispatch(Event::CodeReady);
  machine.dispatch(Event::End);
  assert_eq!(machine.state(), State::Idle);

  machine.dispatch(Event::Initiate {
    candidate_protocols: "a".to_owned(),
  });
  machine.dispatch(Event::TestsPassed);
  assert_eq!(machine.state(), State::Negotiating);
}

#[test]
fn test_timeout_rejects_negotiation() {
  let mut machine: NegotiationMachine = test_machine();
  machine.dispatch(Event::Initiate {
    candidate_protocols: "a".to_owned(),
  });

  machine.dispatch(Event::Timeout);
  assert_eq!(machine.state(), State::Rejected);
}

#[test]
fn test_process_incoming_drives_the_machine() {
  let mut machine: NegotiationMachine = test_machine();

  let request: MetaMessage = MetaMessage::protocol_negotiation(
    7,
    "JSON-RPC 2.0, GraphQL",
    None,
    NegotiationStatus::Negotiating,
  );
  machine.process_incoming(&request.to_frame().unwrap()).unwrap();
  assert_eq!(machine.state(), State::Negotiating);
  assert_eq!(machine.context().sequence_id, 7);

  let accept: MetaMessage = MetaMessage::protocol_negotiation(8, "GraphQL", None, NegotiationStatus::Accepted);
  machine.process_incoming(&accept.to_frame().unwrap()).unwrap();
  assert_eq!(machine.state(), State::CodeGeneration);
  assert_eq!(machine.context().agreed_protocol.as_deref(), Some("GraphQL"));
}

#[test]
fn test_process_incoming_rejects_comma_list_accept() {
  let mut machine: NegotiationMachine = test_machine();
  machine.dispatch(Event::Initiate {
    candidate_protocols: "a, b".to_owned(),
  });

  let accept: MetaMessage = MetaMessage::protocol_negotiation(1, "a, b", None, NegotiationStatus::Accepted);

  assert!(machine.process_incoming(&accept.to_frame().unwrap()).is_err());
  assert_eq!(machine.state(), State::Negotiating);
}

#[test]
fn test_process_incoming_requires_meta_frames() {
  let mut machine: NegotiationMachine = test_machine();
  let frame: Vec<u8> = encode_frame(ProtocolType::Application, b"{}");

  assert!(machine.process_incoming(&frame).is_err());
}

#[test]
fn test_process_incoming_rejects_malformed_payload() {
  let mut machine: NegotiationMachine = test_machine();
  let frame: Vec<u8> = encode_frame(ProtocolType::Meta, b"not json");

  assert!(machine.process_incoming(&frame).is_err());
  assert!(machine.process_incoming(&[]).is_err());
}

#[test]
fn test_natural_language_messages_do_not_transition() {
  let mut machine: NegotiationMachine = test_machine();

  let message: MetaMessage = MetaMessage::natural_language(
    anp_agent::NaturalLanguageKind::Request,
    "msg-1",
    "what do you speak?",
  );
  let parsed: MetaMessage = machine.process_incoming(&message.to_frame().unwrap()).unwrap();

  assert_eq!(parsed, message);
  assert_eq!(machine.state(), State::Idle);
}
