// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log.
//!
//! Components report what happened through the App, which forwards the
//! entries here. The log is bounded and can be dumped as JSON on exit.

use super::{CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorType, UserAction};

/// Number of events kept before the oldest are evicted.
pub const DEFAULT_CAPACITY: usize = 500;

/// Bounded log of user actions, warnings and errors.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    events: CircularBuffer<DiagnosticEvent>,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ActivityLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::with_capacity(capacity),
        }
    }

    /// Records a user action.
    pub fn log_action(&mut self, action: UserAction) {
        self.events
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction { action }));
    }

    /// Records a warning and echoes it to stderr.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[WARN] {message}");
        self.events
            .push(DiagnosticEvent::new(DiagnosticEventKind::Warning { message }));
    }

    /// Records an error and echoes it to stderr.
    pub fn log_error(&mut self, error_type: ErrorType, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[ERROR] {message}");
        self.events.push(DiagnosticEvent::new(DiagnosticEventKind::Error {
            error_type,
            message,
        }));
    }

    /// Events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Recorded user actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &UserAction> {
        self.events.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(action),
            _ => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the whole log as a pretty JSON array.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.events.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_filter_out_errors() {
        let mut log = ActivityLog::default();
        log.log_action(UserAction::CloseTextPopup);
        log.log_error(ErrorType::IoError, "disk gone");
        log.log_action(UserAction::SaveText { chars: 3 });

        let actions: Vec<_> = log.actions().cloned().collect();
        assert_eq!(
            actions,
            vec![UserAction::CloseTextPopup, UserAction::SaveText { chars: 3 }]
        );
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn log_is_bounded() {
        let mut log = ActivityLog::with_capacity(2);
        log.log_warning("a");
        log.log_warning("b");
        log.log_warning("c");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn json_dump_is_an_array() {
        let mut log = ActivityLog::default();
        log.log_action(UserAction::OpenTextPopup { editing: true });
        let json: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
    }
}
