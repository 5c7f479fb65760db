//! Host-ticked debounce timers
//!
//! The engine is single-threaded and never sleeps; the host calls
//! [`CanvasEngine::tick`](super::CanvasEngine::tick) with a timestamp and
//! applies whatever source updates fall out. Scheduling the same timer
//! again before it fires replaces it (last write wins).

use crate::window::WindowId;

/// Delay between a resize settling and the provider re-layout requery.
pub const RELAYOUT_DEBOUNCE_MS: f64 = 200.0;

/// Delay between a container resize and the reconciliation pass.
pub const RECONCILE_DEBOUNCE_MS: f64 = 150.0;

/// A new iframe source the host must apply to a window
#[derive(Clone, Debug, PartialEq)]
pub struct SourceUpdate {
    /// Window to update
    pub window_id: WindowId,
    /// Replacement iframe source URL
    pub source: String,
}

#[derive(Clone, Copy, Debug)]
enum Pending {
    Relayout { window_id: WindowId, due_ms: f64 },
    Reconcile { due_ms: f64 },
}

/// Pending debounce timers
#[derive(Default)]
pub(crate) struct TimerQueue {
    pending: Vec<Pending>,
}

impl TimerQueue {
    /// Schedule a re-layout for a window, replacing any pending one
    pub fn schedule_relayout(&mut self, window_id: WindowId, now_ms: f64) {
        self.pending
            .retain(|t| !matches!(t, Pending::Relayout { window_id: id, .. } if *id == window_id));
        self.pending.push(Pending::Relayout {
            window_id,
            due_ms: now_ms + RELAYOUT_DEBOUNCE_MS,
        });
    }

    /// Schedule the container reconciliation pass, replacing any pending one
    pub fn schedule_reconcile(&mut self, now_ms: f64) {
        self.pending.retain(|t| !matches!(t, Pending::Reconcile { .. }));
        self.pending.push(Pending::Reconcile {
            due_ms: now_ms + RECONCILE_DEBOUNCE_MS,
        });
    }

    /// Drop all timers bound to a window
    pub fn cancel_window(&mut self, window_id: WindowId) {
        self.pending
            .retain(|t| !matches!(t, Pending::Relayout { window_id: id, .. } if *id == window_id));
    }

    /// Remove and return due timers: re-layout window ids plus whether
    /// the reconciliation pass fired
    pub fn fire_due(&mut self, now_ms: f64) -> (Vec<WindowId>, bool) {
        let mut relayouts = Vec::new();
        let mut reconcile = false;

        self.pending.retain(|timer| match *timer {
            Pending::Relayout { window_id, due_ms } if due_ms <= now_ms => {
                relayouts.push(window_id);
                false
            }
            Pending::Reconcile { due_ms } if due_ms <= now_ms => {
                reconcile = true;
                false
            }
            _ => true,
        });

        (relayouts, reconcile)
    }

    /// Number of pending timers
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
