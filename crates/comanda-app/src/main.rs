// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Comanda — restaurant menu, search, and cart front end
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod components;
mod pages;
mod services;
mod state;
mod styles;

use dioxus::prelude::*;

use pages::carta::Carta;
use pages::home::Home;
use pages::not_found::NotFound;

use services::app_services::AppServices;
use state::{AppState, ToastKind};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Comanda starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/carta")]
        Carta {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!(
                online = s.is_online(),
                data_dir = %s.data_dir().display(),
                "backend services initialised"
            );
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "service init failed, using offline fallback");
            AppServices::fallback()
        }
    });

    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(AppState::default()));

    rsx! {
        style { {styles::STYLES} }
        Router::<Route> {}
    }
}

/// Navbar, page outlet, and the toast stack shared by every page.
#[component]
fn SiteLayout() -> Element {
    let svc = use_context::<AppServices>();
    let online = svc.is_online();

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; color: #1f2937;",

            nav { class: "navbar",
                style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #111827; color: white;",
                Link { to: Route::Home {},
                    style: "color: white; text-decoration: none; font-size: 20px; font-weight: 700;",
                    "Comanda"
                }
                div { style: "display: flex; gap: 20px; align-items: center;",
                    NavLink { to: Route::Home {}, label: "Inicio" }
                    NavLink { to: Route::Carta {}, label: "Carta" }
                    if !online {
                        span { style: "font-size: 12px; padding: 2px 8px; border-radius: 999px; background: #374151;",
                            "Modo sin conexión"
                        }
                    }
                }
            }

            div { class: "page-content",
                style: "flex: 1; display: flex; min-height: 0;",
                Outlet::<Route> {}
            }

            ToastStack {}
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "color: #e5e7eb; text-decoration: none; font-size: 15px;",
            "{label}"
        }
    }
}

/// Toasts pinned to the bottom-right corner.
#[component]
fn ToastStack() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 50;",
            for toast in state.read().toasts.iter() {
                {
                    let id = toast.id;
                    let background = match toast.kind {
                        ToastKind::Success => "#16a34a",
                        ToastKind::Warning => "#d97706",
                        ToastKind::Error => "#dc2626",
                    };
                    rsx! {
                        div { key: "{id}", class: "toast",
                            style: "min-width: 240px; max-width: 360px; padding: 12px 16px; border-radius: 8px; color: white; background: {background}; box-shadow: 0 4px 12px rgba(0,0,0,0.15); cursor: pointer;",
                            onclick: move |_| state.write().dismiss_toast(id),
                            "{toast.message}"
                        }
                    }
                }
            }
        }
    }
}

/// Footer rendered at the bottom of each scrolling page.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            style: "padding: 32px 24px; background: #111827; color: #9ca3af; text-align: center; font-size: 14px;",
            p { "© 2026 Comanda · Cocina de autor" }
            p { style: "margin-top: 4px;", "Av. Principal 123 · Reservas: +54 11 5555-0100" }
        }
    }
}
