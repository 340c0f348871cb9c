// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! The binary frame codec.
//!
//! A frame is one header byte followed by the payload. The protocol type
//! occupies the two high bits of the header; the low six bits are reserved,
//! zero on encode and ignored on decode.

use crate::error::Error;
use crate::error::Result;

/// The protocol type carried in the two high bits of a frame header.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum ProtocolType {
  Meta = 0,
  Application = 1,
  NaturalLanguage = 2,
  Verification = 3,
}

impl ProtocolType {
  /// Extracts the `ProtocolType` from a frame header byte.
  pub const fn from_header(header: u8) -> Self {
    match (header >> 6) & 0b11 {
      0 => Self::Meta,
      1 => Self::Application,
      2 => Self::NaturalLanguage,
      _ => Self::Verification,
    }
  }

  /// Returns the header byte encoding this `ProtocolType`.
  pub const fn to_header(self) -> u8 {
    (self as u8) << 6
  }
}

/// Encodes a frame: the header byte followed by `data`.
pub fn encode_frame(protocol_type: ProtocolType, data: &[u8]) -> Vec<u8> {
  let mut frame: Vec<u8> = Vec::with_capacity(data.len() + 1);
  frame.push(protocol_type.to_header());
  frame.extend_from_slice(data);
  frame
}

/// Decodes a frame into its protocol type and payload.
pub fn decode_frame(frame: &[u8]) -> Result<(ProtocolType, &[u8])> {
  let (header, data): (&u8, &[u8]) = frame.split_first().ok_or(Error::EmptyFrame)?;
  Ok((ProtocolType::from_header(*header), data))
}
