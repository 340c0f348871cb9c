// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

/// The states of the negotiation machine.
///
/// `Rejected`, `Failed` and `Completed` are terminal: once entered, no
/// event leaves them.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum State {
  Idle,
  Negotiating,
  CodeGeneration,
  TestCases,
  Testing,
  FixError,
  Ready,
  Communicating,
  Rejected,
  Failed,
  Completed,
}

impl State {
  /// Returns whether the state is terminal.
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Rejected | Self::Failed | Self::Completed)
  }
}
