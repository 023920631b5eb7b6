//! Retained alerts, guarded by a single mutex.

use std::sync::Mutex;

use stockpilot_core::AlertId;

use crate::alert::Alert;

/// The set of alerts retained across planning passes.
///
/// Single-writer discipline: every read and write takes the one lock, which
/// replaces the unguarded shared list this design descends from. Alerts are
/// appended and flagged read, never deleted.
#[derive(Debug, Default)]
pub struct AlertBook {
    inner: Mutex<Vec<Alert>>,
}

impl AlertBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, alert: Alert) {
        self.inner.lock().unwrap().push(alert);
    }

    pub fn extend(&self, alerts: impl IntoIterator<Item = Alert>) {
        self.inner.lock().unwrap().extend(alerts);
    }

    /// Snapshot of every retained alert, in append order.
    pub fn all(&self) -> Vec<Alert> {
        self.inner.lock().unwrap().clone()
    }

    /// The `n` most recently created alerts, newest first.
    pub fn recent(&self, n: usize) -> Vec<Alert> {
        let mut alerts = self.all();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        alerts.truncate(n);
        alerts
    }

    pub fn unread_count(&self) -> usize {
        self.inner.lock().unwrap().iter().filter(|a| !a.read).count()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Flag an alert as read. Idempotent: marking an already-read or unknown
    /// id is a no-op, never an error. Returns whether an alert with this id
    /// exists (and is therefore now read).
    pub fn mark_read(&self, id: AlertId) -> bool {
        let mut alerts = self.inner.lock().unwrap();
        match alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.read = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertKind, Severity};
    use chrono::{TimeZone, Utc};

    fn alert(minute: u32) -> Alert {
        Alert::new(
            AlertKind::LowStock,
            None,
            format!("alert at minute {minute}"),
            Severity::Medium,
            Utc.with_ymd_and_hms(2025, 4, 1, 9, minute, 0).unwrap(),
        )
    }

    #[test]
    fn mark_read_is_idempotent() {
        let book = AlertBook::new();
        let a = alert(0);
        let id = a.id;
        book.append(a);

        assert!(book.mark_read(id));
        assert!(book.all()[0].read);

        // Second call: still fine, still read.
        assert!(book.mark_read(id));
        assert!(book.all()[0].read);
        assert_eq!(book.unread_count(), 0);
    }

    #[test]
    fn mark_read_of_unknown_id_is_a_noop() {
        let book = AlertBook::new();
        book.append(alert(0));

        assert!(!book.mark_read(AlertId::new()));
        assert_eq!(book.unread_count(), 1);
    }

    #[test]
    fn recent_orders_by_created_at_descending() {
        let book = AlertBook::new();
        for minute in [5, 1, 9, 3, 7, 2] {
            book.append(alert(minute));
        }

        let recent = book.recent(3);
        let minutes: Vec<u32> = recent
            .iter()
            .map(|a| {
                use chrono::Timelike;
                a.created_at.minute()
            })
            .collect();
        assert_eq!(minutes, vec![9, 7, 5]);
    }

    #[test]
    fn alerts_are_never_deleted_by_reads() {
        let book = AlertBook::new();
        book.extend([alert(0), alert(1)]);
        let _ = book.recent(1);
        let _ = book.unread_count();
        assert_eq!(book.len(), 2);
    }
}
