// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Toast notifier — the `Notifier` the client actions report through.

use std::time::Duration;

use comanda_client::Notifier;
use comanda_core::human_errors::Notice;
use dioxus::prelude::*;

use crate::state::{AppState, ToastKind};

/// Pushes toasts into the shared app state and clears them after a delay.
///
/// Must be used from inside the Dioxus runtime (an event handler or a task
/// started with `spawn`).
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    state: Signal<AppState>,
    duration: Duration,
}

impl ToastNotifier {
    pub fn new(state: Signal<AppState>, duration: Duration) -> Self {
        Self { state, duration }
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let mut state = self.state;
        let id = state.write().push_toast(kind, message);
        let duration = self.duration;
        spawn(async move {
            tokio::time::sleep(duration).await;
            state.write().dismiss_toast(id);
        });
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        tracing::debug!(message, "success toast");
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        tracing::debug!(message, "error toast");
        self.show(ToastKind::Error, message);
    }

    fn notice(&self, notice: &Notice) {
        tracing::debug!(message = %notice.message, severity = ?notice.severity, "notice toast");
        self.show(ToastKind::from(notice.severity), &notice.message);
    }
}
