// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fallback page for unknown paths and sections that are not open yet.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no page for path");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; height: 100vh; font-family: system-ui, -apple-system, sans-serif; color: #1f2937; background: #f9fafb;",
            h1 { style: "font-size: 28px;", "Página no disponible" }
            p { style: "color: #6b7280;", "No hay nada en {path} por ahora." }
            Link { to: Route::Home {},
                style: "padding: 10px 20px; border-radius: 999px; background: #111827; color: white; text-decoration: none;",
                "Volver al inicio"
            }
        }
    }
}
