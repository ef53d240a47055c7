// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use comanda_core::human_errors::Severity;

/// How a toast is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    /// The diner has something to do, such as signing in.
    Warning,
    Error,
}

impl From<Severity> for ToastKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::ActionRequired => Self::Warning,
            Severity::Transient | Severity::Permanent => Self::Error,
        }
    }
}

/// A transient notification shown over every page.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Toasts currently on screen, oldest first.
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl AppState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_required_notices_are_warnings() {
        assert_eq!(ToastKind::from(Severity::ActionRequired), ToastKind::Warning);
        assert_eq!(ToastKind::from(Severity::Transient), ToastKind::Error);
        assert_eq!(ToastKind::from(Severity::Permanent), ToastKind::Error);
    }

    #[test]
    fn toast_ids_are_unique() {
        let mut state = AppState::default();
        let a = state.push_toast(ToastKind::Success, "uno");
        let b = state.push_toast(ToastKind::Error, "dos");
        assert_ne!(a, b);
        assert_eq!(state.toasts.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut state = AppState::default();
        let a = state.push_toast(ToastKind::Success, "uno");
        let b = state.push_toast(ToastKind::Error, "dos");
        state.dismiss_toast(a);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, b);

        state.dismiss_toast(999);
        assert_eq!(state.toasts.len(), 1);
    }
}
