// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::Error;
use crate::error::Result;

/// A UTC timestamp with RFC 3339 string representation and second precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
  /// Creates a new `Timestamp` with the current UTC date and time.
  pub fn now_utc() -> Self {
    // 0 is always a valid nanosecond
    Self(OffsetDateTime::now_utc().replace_nanosecond(0).unwrap())
  }

  /// Parses a `Timestamp` from an RFC 3339 string.
  pub fn parse(input: &str) -> Result<Self> {
    let offset_date_time: OffsetDateTime = OffsetDateTime::parse(input, &Rfc3339)?;
    // 0 is always a valid nanosecond
    Ok(Self(offset_date_time.replace_nanosecond(0).unwrap()))
  }

  /// Returns the `Timestamp` as an RFC 3339 string.
  pub fn to_rfc3339(&self) -> String {
    // Rfc3339 formatting of a valid OffsetDateTime cannot fail
    self.0.format(&Rfc3339).unwrap()
  }

  /// Returns the `Timestamp` as Unix seconds.
  pub fn to_unix(&self) -> i64 {
    self.0.unix_timestamp()
  }
}

impl Debug for Timestamp {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:?}", self.to_rfc3339())
  }
}

impl Display for Timestamp {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.to_rfc3339())
  }
}

impl FromStr for Timestamp {
  type Err = Error;

  fn from_str(string: &str) -> Result<Self, Self::Err> {
    Self::parse(string)
  }
}

impl TryFrom<String> for Timestamp {
  type Error = Error;

  fn try_from(string: String) -> Result<Self, Self::Error> {
    Self::parse(&string)
  }
}

impl From<Timestamp> for String {
  fn from(timestamp: Timestamp) -> Self {
    timestamp.to_rfc3339()
  }
}

#[cfg(test)]
mod tests {
  use super::Timestamp;

  #[test]
  fn test_parse_valid() {
    let original: &str = "2024-01-02T03:04:05Z";
    let timestamp: Timestamp = Timestamp::parse(original).unwrap();

    assert_eq!(timestamp.to_rfc3339(), original);
  }

  #[test]
  fn test_parse_truncates_fractional_seconds() {
    let timestamp: Timestamp = Timestamp::parse("2024-01-02T03:04:05.678Z").unwrap();

    assert_eq!(timestamp.to_rfc3339(), "2024-01-02T03:04:05Z");
  }

  #[test]
  fn test_parse_invalid_rejected() {
    assert!(Timestamp::parse("2024-01-02 03:04:05").is_err());
    assert!(Timestamp::parse("not a timestamp").is_err());
  }

  #[test]
  fn test_json_round_trip() {
    let timestamp: Timestamp = Timestamp::parse("2024-01-02T03:04:05Z").unwrap();
    let json: String = serde_json::to_string(&timestamp).unwrap();

    assert_eq!(json, "\"2024-01-02T03:04:05Z\"");
    assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), timestamp);
  }
}
