// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types and the shared event sink.

use std::sync::{Mutex, PoisonError};

use super::{BufferCapacity, CircularBuffer};

/// How a failed translation lookup was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key was missing for the requested locale; the default locale's
    /// value was served instead.
    DefaultLocale,
    /// The key was missing everywhere; the raw key string was returned as a
    /// visible placeholder.
    RawKey,
}

/// Degradations the localization resolver records instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// A (locale, key) pair had no entry in the resource table.
    MissingTranslation {
        locale: String,
        key: String,
        resolution: Resolution,
    },
    /// Writing the language preference to the persistence store failed.
    /// The in-memory switch already took effect.
    PersistenceFailure { message: String },
}

/// Lock-guarded sink for diagnostic events.
///
/// Recording takes `&self` so read-only render paths can report misses.
/// The resolver itself is single-threaded, but the lock keeps the type
/// sound if the host ever moves lookups onto worker threads.
#[derive(Debug, Default)]
pub struct DiagnosticsLog {
    events: Mutex<CircularBuffer<DiagnosticEvent>>,
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: Mutex::new(CircularBuffer::new(capacity)),
        }
    }

    /// Appends an event, evicting the oldest when at capacity.
    pub fn record(&self, event: DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Returns all buffered events in chronological order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
