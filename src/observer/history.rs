//! Bounded, timestamped record of phase transitions.

use super::PhaseObserver;
use crate::controller::PhaseEntered;
use crate::core::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// One recorded phase entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Phase that was left, `None` when the controller was (re)initialized
    pub from: Option<Phase>,
    /// Phase that was entered
    pub to: Phase,
    /// When the notification was observed
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
struct Inner {
    capacity: usize,
    records: VecDeque<TransitionRecord>,
    transitions: u64,
    walks: u64,
}

/// Transition history observer.
///
/// Clones share the same storage, so one clone can be handed to the
/// controller while another is kept for inspection. Once `capacity` records
/// are held the oldest is dropped; the transition and walk counters are not
/// affected by eviction.
///
/// # Example
///
/// ```rust
/// use crosswalk::controller::Controller;
/// use crosswalk::core::Phase;
/// use crosswalk::observer::TransitionLog;
///
/// let log = TransitionLog::with_capacity(16);
/// let mut controller = Controller::new();
/// controller.add_observer(Box::new(log.clone()));
///
/// controller.initialize();
/// controller.timeout_expired();
///
/// assert_eq!(log.path(), vec![Phase::CarGreen, Phase::CarYellow]);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionLog {
    inner: Arc<Mutex<Inner>>,
}

impl TransitionLog {
    /// Create an empty log keeping at most `capacity` records (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                capacity,
                records: VecDeque::with_capacity(capacity),
                transitions: 0,
                walks: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a record, evicting the oldest when full.
    pub fn record(&self, record: TransitionRecord) {
        let mut inner = self.lock();
        inner.transitions += 1;
        if record.to == Phase::Walk {
            inner.walks += 1;
        }
        if inner.records.len() == inner.capacity {
            inner.records.pop_front();
        }
        inner.records.push_back(record);
    }

    /// Copy of the retained records, oldest first.
    pub fn records(&self) -> Vec<TransitionRecord> {
        self.lock().records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Phases traversed: the first retained `from` (if any), then every `to`.
    pub fn path(&self) -> Vec<Phase> {
        let inner = self.lock();
        let mut path = Vec::with_capacity(inner.records.len() + 1);
        if let Some(from) = inner.records.front().and_then(|r| r.from) {
            path.push(from);
        }
        path.extend(inner.records.iter().map(|r| r.to));
        path
    }

    /// Number of records ever appended, including evicted ones.
    pub fn transition_count(&self) -> u64 {
        self.lock().transitions
    }

    /// Number of walk phases entered since the log was created.
    pub fn walk_count(&self) -> u64 {
        self.lock().walks
    }

    /// Time between the oldest and newest retained record.
    ///
    /// Returns `None` if the log is empty.
    pub fn span(&self) -> Option<Duration> {
        let inner = self.lock();
        let (first, last) = (inner.records.front()?, inner.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

impl PhaseObserver for TransitionLog {
    fn on_phase_entered(&mut self, event: &PhaseEntered) {
        self.record(TransitionRecord {
            from: event.from,
            to: event.phase,
            timestamp: Utc::now(),
        });
    }
}
