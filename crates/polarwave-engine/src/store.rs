//! Thread-safe ordered wave registry.

use std::sync::Mutex;

use polarwave_core::WaveConfig;

use crate::lock_unpoisoned;

/// Opaque style tag supplied by the renderer-owning caller at registration.
///
/// The engine never interprets it; it only travels with the computed path so
/// the renderer can correlate strokes with waves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleHandle(pub u32);

/// One registered wave with its style tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveEntry {
    /// The wave parameters.
    pub config: WaveConfig,
    /// Style tag; ignored for the base wave (position 0).
    pub style: StyleHandle,
}

/// Ordered, mutex-guarded collection of registered waves.
///
/// Insertion order is significant: the first entry is the base wave, which
/// contributes the modulation envelope and no visible stroke. Safe for
/// concurrent use by the registration caller and the computation worker;
/// [`WaveStore::snapshot`] observes either the pre- or post-mutation state,
/// never a partially built list. Capacity is unbounded.
#[derive(Debug, Default)]
pub struct WaveStore {
    entries: Mutex<Vec<WaveEntry>>,
}

impl WaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a wave and returns its position in the store.
    ///
    /// Position 0 is the base wave; a sub-wave at position `p` produces the
    /// path carrying index `p - 1`.
    pub fn register(&self, config: WaveConfig, style: StyleHandle) -> usize {
        let mut entries = lock_unpoisoned(&self.entries);
        entries.push(WaveEntry { config, style });
        entries.len() - 1
    }

    /// Removes every registered wave.
    pub fn clear(&self) {
        lock_unpoisoned(&self.entries).clear();
    }

    /// A value copy of the current entries, decoupled from later mutation.
    pub fn snapshot(&self) -> Vec<WaveEntry> {
        lock_unpoisoned(&self.entries).clone()
    }

    /// Number of registered waves, base included.
    pub fn len(&self) -> usize {
        lock_unpoisoned(&self.entries).len()
    }

    /// Whether no waves are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered style handles: every wave past the base.
    pub fn style_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
