// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! The meta-protocol messages exchanged inside META frames.

use serde::Deserialize;
use serde::Serialize;

use anp_core::convert::ToJson;

use crate::codec;
use crate::codec::ProtocolType;
use crate::error::Error;
use crate::error::Result;

/// The status of a `protocolNegotiation` exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegotiationStatus {
  Negotiating,
  Rejected,
  Accepted,
  Timeout,
}

/// The status of a `codeGeneration` report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeGenerationStatus {
  Generated,
  Error,
}

/// The status of a `testCasesNegotiation` or `fixErrorNegotiation` exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
  Negotiating,
  Rejected,
  Accepted,
}

/// The direction of a `naturalLanguageNegotiation` message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NaturalLanguageKind {
  Request,
  Response,
}

/// A meta-protocol message, discriminated by its `action` member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum MetaMessage {
  #[serde(rename = "protocolNegotiation")]
  ProtocolNegotiation {
    #[serde(rename = "sequenceId")]
    sequence_id: u64,
    #[serde(rename = "candidateProtocols")]
    candidate_protocols: String,
    #[serde(rename = "modificationSummary", default, skip_serializing_if = "Option::is_none")]
    modification_summary: Option<String>,
    status: NegotiationStatus,
  },
  #[serde(rename = "codeGeneration")]
  CodeGeneration {
    status: CodeGenerationStatus,
  },
  #[serde(rename = "testCasesNegotiation")]
  TestCasesNegotiation {
    #[serde(rename = "testCases")]
    test_cases: String,
    #[serde(rename = "modificationSummary", default, skip_serializing_if = "Option::is_none")]
    modification_summary: Option<String>,
    status: ReviewStatus,
  },
  #[serde(rename = "fixErrorNegotiation")]
  FixErrorNegotiation {
    #[serde(rename = "errorDescription")]
    error_description: String,
    status: ReviewStatus,
  },
  #[serde(rename = "naturalLanguageNegotiation")]
  NaturalLanguageNegotiation {
    #[serde(rename = "type")]
    kind: NaturalLanguageKind,
    #[serde(rename = "messageId")]
    message_id: String,
    message: String,
  },
}

impl MetaMessage {
  /// Builds a `protocolNegotiation` message.
  pub fn protocol_negotiation(
    sequence_id: u64,
    candidate_protocols: impl Into<String>,
    modification_summary: Option<String>,
    status: NegotiationStatus,
  ) -> Self {
    Self::ProtocolNegotiation {
      sequence_id,
      candidate_protocols: candidate_protocols.into(),
      modification_summary,
      status,
    }
  }

  /// Builds a `codeGeneration` message.
  pub fn code_generation(status: CodeGenerationStatus) -> Self {
    Self::CodeGeneration { status }
  }

  /// Builds a `testCasesNegotiation` message.
  pub fn test_cases_negotiation(
    test_cases: impl Into<String>,
    modification_summary: Option<String>,
    status: ReviewStatus,
  ) -> Self {
    Self::TestCasesNegotiation {
      test_cases: test_cases.into(),
      modification_summary,
      status,
    }
  }

  /// Builds a `fixErrorNegotiation` message.
  pub fn fix_error_negotiation(error_description: impl Into<String>, status: ReviewStatus) -> Self {
    Self::FixErrorNegotiation {
      error_description: error_description.into(),
      status,
    }
  }

  /// Builds a `naturalLanguageNegotiation` message.
  pub fn natural_language(kind: NaturalLanguageKind, message_id: impl Into<String>, message: impl Into<String>) -> Self {
    Self::NaturalLanguageNegotiation {
      kind,
      message_id: message_id.into(),
      message: message.into(),
    }
  }

  /// Encodes the message as a META frame.
  pub fn to_frame(&self) -> Result<Vec<u8>> {
    let payload: Vec<u8> = self.to_json_vec()?;
    Ok(codec::encode_frame(ProtocolType::Meta, &payload))
  }
}

/// Parses the payload of a META frame.
///
/// Unknown actions and missing or mistyped members are reported as
/// [`Error::Message`].
pub fn parse_meta(data: &[u8]) -> Result<MetaMessage> {
  let text: &str = core::str::from_utf8(data).map_err(|error| Error::Message(error.to_string()))?;
  serde_json::from_str(text).map_err(|error| Error::Message(error.to_string()))
}

#[cfg(test)]
mod tests {
  use crate::codec;
  use crate::codec::ProtocolType;

  use super::parse_meta;
  use super::CodeGenerationStatus;
  use super::MetaMessage;
  use super::NegotiationStatus;

  #[test]
  fn test_code_generation_frame_round_trip() {
    let payload: &[u8] = br#"{"action":"codeGeneration","status":"generated"}"#;
    let frame: Vec<u8> = codec::encode_frame(ProtocolType::Meta, payload);

    assert_eq!(frame[0], 0x00);

    let (protocol_type, data) = codec::decode_frame(&frame).unwrap();
    assert_eq!(protocol_type, ProtocolType::Meta);
    assert_eq!(data, payload);

    let message: MetaMessage = parse_meta(data).unwrap();
    assert_eq!(message, MetaMessage::code_generation(CodeGenerationStatus::Generated));
  }

  #[test]
  fn test_protocol_negotiation_wire_members() {
    let message: MetaMessage = MetaMessage::protocol_negotiation(
      3,
      "JSON-RPC 2.0",
      Some("narrowed to one candidate".to_owned()),
      NegotiationStatus::Negotiating,
    );

    let json: String = serde_json::to_string(&message).unwrap();

    assert!(json.contains("\"action\":\"protocolNegotiation\""));
    assert!(json.contains("\"sequenceId\":3"));
    assert!(json.contains("\"candidateProtocols\":\"JSON-RPC 2.0\""));
    assert!(json.contains("\"modificationSummary\""));
    assert!(json.contains("\"status\":\"negotiating\""));
  }

  #[test]
  fn test_parse_rejects_unknown_action() {
    assert!(parse_meta(br#"{"action":"teleportation","status":"done"}"#).is_err());
  }

  #[test]
  fn test_parse_rejects_mistyped_member() {
    let payload: &[u8] =
      br#"{"action":"protocolNegotiation","sequenceId":"three","candidateProtocols":"x","status":"negotiating"}"#;

    assert!(parse_meta(payload).is_err());
  }

  #[test]
  fn test_parse_rejects_invalid_utf8() {
    assert!(parse_meta(&[0xff, 0xfe]).is_err());
  }

  #[test]
  fn test_natural_language_uppercase_type() {
    let message: MetaMessage = MetaMessage::natural_language(
      super::NaturalLanguageKind::Request,
      "msg-1",
      "which protocols do you speak?",
    );

    let json: String = serde_json::to_string(&message).unwrap();

    assert!(json.contains("\"type\":\"REQUEST\""));
    assert!(json.contains("\"messageId\":\"msg-1\""));
  }
}
