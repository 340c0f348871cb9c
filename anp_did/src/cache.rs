// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

use anp_core::common::Shared;

use crate::did::WbaDid;
use crate::document::DidDocument;
use crate::error::Result;

/// The default time-to-live of cached DID documents: 5 minutes.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
struct CacheEntry {
  document: DidDocument,
  inserted_at: Instant,
}

/// A TTL-bounded, process-local cache of resolved DID documents.
///
/// Lookups take a read lock only, so a miss for one DID never blocks
/// concurrent lookups of others. Entries are immutable once inserted and
/// replaced atomically on refresh; expired entries are simply ignored on
/// read and overwritten by the next successful resolution.
#[derive(Debug)]
pub struct DocumentCache {
  ttl: Duration,
  entries: Shared<HashMap<String, CacheEntry>>,
}

impl DocumentCache {
  /// Creates a new, empty cache with the given entry TTL.
  pub fn new(ttl: Duration) -> Self {
    Self {
      ttl,
      entries: Shared::new(HashMap::new()),
    }
  }

  /// Returns the cached document for `did`, unless the entry has expired.
  pub fn get(&self, did: &WbaDid) -> Result<Option<DidDocument>> {
    let entries = self.entries.read()?;

    Ok(
      entries
        .get(&did.to_string())
        .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
        .map(|entry| entry.document.clone()),
    )
  }

  /// Inserts or atomically replaces the entry for `did`.
  pub fn insert(&self, did: &WbaDid, document: &DidDocument) -> Result<()> {
    let entry: CacheEntry = CacheEntry {
      document: document.clone(),
      inserted_at: Instant::now(),
    };

    self.entries.write()?.insert(did.to_string(), entry);

    Ok(())
  }
}
