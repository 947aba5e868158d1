//! Expiring cache of entity tags issued for talks.
//!
//! This module provides the `TalkTagCache` which remembers the `ETag` values handed out
//! for talks so a later `If-None-Match` request can be answered `304 Not Modified`
//! without touching the database. Entries expire after a configured TTL and the cache
//! never holds more than a configured number of entries. A talk keeps at most one live
//! tag: issuing a new one evicts the talk's previous tags, and deleting or updating the
//! talk removes them as well.

use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{sync::RwLock, time::Instant};

use crate::server::model::{row_version::EntityTag, talk::Talk};

/// Tag issued for a talk with its issue and expiry timestamps.
#[derive(Clone)]
struct CachedTag {
    /// When the tag was recorded, used to evict the oldest entry first.
    issued_at: Instant,
    /// Timestamp after which the tag is no longer answered from the cache.
    expires_at: Instant,
}

impl CachedTag {
    fn new(ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks if the entry has outlived its TTL.
    ///
    /// # Returns
    /// - `true` - Entry has expired
    /// - `false` - Entry is still valid
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

struct TagStore {
    entries: HashMap<(i32, EntityTag), CachedTag>,
    ttl: Duration,
    capacity: usize,
}

impl TagStore {
    fn prune_expired(&mut self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| !entry.is_expired(now));
    }

    /// Removes the oldest entries until at most `limit` remain.
    fn shrink_to(&mut self, limit: usize) {
        while self.entries.len() > limit {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.issued_at)
                .map(|(key, _)| key.clone());

            match oldest {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}

/// Shared cache of `(talk id, tag)` pairs recently sent to clients.
///
/// Cloning is cheap; clones share the same store. Expiry uses `tokio::time::Instant`
/// so paused-time tests can advance the clock.
#[derive(Clone)]
pub struct TalkTagCache {
    store: Arc<RwLock<TagStore>>,
}

impl TalkTagCache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// - `ttl` - How long a recorded tag may be answered from the cache
    /// - `capacity` - Maximum number of recorded tags, at least 1
    ///
    /// # Returns
    /// - `TalkTagCache` - New cache with no entries
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(TagStore {
                entries: HashMap::new(),
                ttl,
                capacity: capacity.max(1),
            })),
        }
    }

    /// Records the current tag of `talk` and returns it.
    ///
    /// Any other tag recorded for the same talk is evicted first. When the cache is
    /// full, expired entries are dropped and then the oldest entries.
    ///
    /// # Arguments
    /// - `talk` - Talk whose row version was just sent to a client
    ///
    /// # Returns
    /// - `EntityTag` - Tag derived from the talk's row version
    pub async fn remember(&self, talk: &Talk) -> EntityTag {
        let tag = talk.row_version.tag();
        let mut store = self.store.write().await;

        store
            .entries
            .retain(|(talk_id, existing), _| *talk_id != talk.id || *existing == tag);

        if store.entries.len() >= store.capacity {
            store.prune_expired();
            let limit = store.capacity - 1;
            store.shrink_to(limit);
        }

        let entry = CachedTag::new(store.ttl);
        store.entries.insert((talk.id, tag.clone()), entry);

        tag
    }

    /// Checks whether `tag` was recorded for the talk and has not expired.
    ///
    /// An expired entry is removed when it is found.
    pub async fn contains(&self, talk_id: i32, tag: &EntityTag) -> bool {
        let key = (talk_id, tag.clone());

        {
            let store = self.store.read().await;
            match store.entries.get(&key) {
                Some(entry) if !entry.is_expired(Instant::now()) => return true,
                Some(_) => {}
                None => return false,
            }
        }

        self.store.write().await.entries.remove(&key);
        false
    }

    /// Removes every tag recorded for the talk.
    pub async fn forget(&self, talk_id: i32) {
        self.store
            .write()
            .await
            .entries
            .retain(|(id, _), _| *id != talk_id);
    }

    /// Applies new limits. Existing entries keep their expiry; the cache is
    /// shrunk immediately when the new capacity is smaller.
    pub async fn reconfigure(&self, ttl: Duration, capacity: usize) {
        let mut store = self.store.write().await;
        store.ttl = ttl;
        store.capacity = capacity.max(1);

        if store.entries.len() > store.capacity {
            store.prune_expired();
            let limit = store.capacity;
            store.shrink_to(limit);
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.read().await.entries.len()
    }
}
