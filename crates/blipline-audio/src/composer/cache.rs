//! Cache of synthesized tones keyed by character and profile fingerprint.

use std::collections::HashMap;
use std::sync::Arc;

use blipline_spec::{EffectiveProfile, ProfileFingerprint};
use tracing::debug;

use crate::buffer::SampleBuffer;

/// Identity of a synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToneKey {
    /// The voiced character.
    pub character: char,
    /// Fingerprint of the tone-shaping profile fields.
    pub fingerprint: ProfileFingerprint,
}

impl ToneKey {
    /// Derives the key for a character voiced with `profile`.
    pub fn new(character: char, profile: &EffectiveProfile) -> Self {
        Self {
            character,
            fingerprint: profile.fingerprint(),
        }
    }
}

/// How the cache bounds its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Never evict; entries live until [`ToneCache::clear`].
    #[default]
    Unbounded,
    /// Keep at most `capacity` entries, evicting the least recently used.
    Lru {
        /// Maximum number of entries (0 disables caching).
        capacity: usize,
    },
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that required synthesis.
    pub misses: u64,
    /// Entries dropped by the eviction policy.
    pub evictions: u64,
}

#[derive(Debug)]
struct Entry {
    buffer: Arc<SampleBuffer>,
    last_used: u64,
}

/// Tone cache owned by one composer.
#[derive(Debug, Default)]
pub struct ToneCache {
    policy: EvictionPolicy,
    entries: HashMap<ToneKey, Entry>,
    clock: u64,
    stats: CacheStats,
}

impl ToneCache {
    /// Creates an empty cache with the given policy.
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Returns the eviction policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Number of cached tones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the counters accumulated since creation.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drops every cached tone. Counters are kept.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "clearing tone cache");
        self.entries.clear();
    }

    /// Returns true if a tone for `key` is cached.
    pub fn contains(&self, key: &ToneKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the cached tone for `key`, or renders it with `render` and caches it.
    pub fn get_or_insert_with<F>(&mut self, key: ToneKey, render: F) -> Arc<SampleBuffer>
    where
        F: FnOnce() -> SampleBuffer,
    {
        self.clock += 1;
        let now = self.clock;

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.last_used = now;
            self.stats.hits += 1;
            return Arc::clone(&entry.buffer);
        }

        self.stats.misses += 1;
        let buffer = Arc::new(render());
        debug!(character = %key.character.escape_debug(), samples = buffer.len(), "tone cache miss");

        if let EvictionPolicy::Lru { capacity } = self.policy {
            if capacity == 0 {
                return buffer;
            }
            while self.entries.len() >= capacity {
                self.evict_least_recent();
            }
        }

        self.entries.insert(
            key,
            Entry {
                buffer: Arc::clone(&buffer),
                last_used: now,
            },
        );
        buffer
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| *key);
        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.stats.evictions += 1;
            debug!(character = %key.character.escape_debug(), "evicted tone");
        }
    }
}
