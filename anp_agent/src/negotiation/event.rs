// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

/// The events a negotiation machine reacts to.
///
/// Events irrelevant to the current state are discarded rather than
/// treated as errors: a stale message from a peer is not a protocol
/// violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
  /// The local agent opens a negotiation with its candidate protocols.
  Initiate {
    candidate_protocols: String,
  },
  /// A peer opened a negotiation towards us.
  ReceiveRequest {
    candidate_protocols: String,
    sequence_id: u64,
  },
  /// The local agent answers with a counter-proposal.
  Negotiate {
    candidate_protocols: String,
  },
  /// One side accepted a single protocol.
  Accept {
    protocol: String,
  },
  /// One side rejected the negotiation outright.
  Reject,
  /// The caller observed too much elapsed time and gave up.
  Timeout,
  /// Protocol handler code was generated successfully.
  CodeReady,
  /// Protocol handler code generation failed.
  CodeError {
    error: String,
  },
  /// Both sides agreed on a set of test cases.
  TestsAgreed {
    test_cases: String,
  },
  /// Testing was skipped by mutual consent.
  SkipTests,
  /// The agreed test cases passed.
  TestsPassed,
  /// The agreed test cases failed.
  TestsFailed {
    error: String,
  },
  /// The peer accepted the proposed fix.
  FixAccepted,
  /// The peer rejected the proposed fix.
  FixRejected,
  /// The application starts exchanging protocol traffic.
  StartCommunication,
  /// A protocol error surfaced during communication.
  ProtocolError {
    error: String,
  },
  /// The exchange finished normally.
  End,
}
