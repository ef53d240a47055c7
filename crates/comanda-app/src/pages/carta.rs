// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Carta page — the menu with category chips, search, and cart buttons.

use comanda_catalog::{CatalogView, style};
use comanda_client::{load_catalog, quick_add_to_cart};
use comanda_core::types::{ALL_CATEGORIES, Product, ProductId};
use dioxus::prelude::*;

use crate::Footer;
use crate::components::icon::PathIcon;
use crate::components::item_modal::ItemModal;
use crate::components::menu_item::MenuItemCard;
use crate::services::app_services::AppServices;
use crate::services::notifications::ToastNotifier;
use crate::state::AppState;

#[component]
pub fn Carta() -> Element {
    let svc = use_context::<AppServices>();
    let state = use_context::<Signal<AppState>>();
    let mut view = use_signal(CatalogView::new);
    let mut selected = use_signal(|| Option::<ProductId>::None);

    // One outstanding load at a time: the button is hidden while loading.
    let reload = use_callback({
        let svc = svc.clone();
        move |()| {
            let svc = svc.clone();
            view.write().begin_loading();
            spawn(async move {
                let notifier = ToastNotifier::new(state, svc.toast_duration());
                let outcome = load_catalog(svc.products(), &notifier).await;
                view.write().settle(outcome);
            });
        }
    });

    use_effect(move || reload.call(()));

    let on_quick_add = use_callback({
        let svc = svc.clone();
        move |product: Product| {
            let svc = svc.clone();
            spawn(async move {
                let notifier = ToastNotifier::new(state, svc.toast_duration());
                if let Err(e) =
                    quick_add_to_cart(svc.session(), svc.cart(), &notifier, &product).await
                {
                    tracing::debug!(error = %e, "quick add did not complete");
                }
            });
        }
    });

    let on_open = use_callback(move |product: Product| selected.set(Some(product.id)));

    let popular = svc.config().popular_searches.clone();
    let current = view.read();
    let generation = current.generation();
    // Resolved against the loaded list so a reload drops a stale selection.
    let open_product = selected
        .read()
        .as_ref()
        .and_then(|id| current.find(id))
        .cloned();

    rsx! {
        div { class: "carta-page",
            style: "flex: 1; overflow-y: auto;",

            // Header
            section {
                style: "padding: 40px 24px 24px; background: linear-gradient(135deg, #111827, #374151); color: white;",
                h1 { style: "font-size: 32px;", "Nuestra Carta" }
                p { style: "color: #d1d5db; margin-top: 6px;",
                    "Platos preparados al momento con ingredientes de temporada"
                }

                // Search
                div { style: "margin-top: 20px; display: flex; gap: 8px; max-width: 560px;",
                    input {
                        r#type: "search",
                        style: "flex: 1; padding: 10px 14px; border-radius: 10px; border: none; font-size: 15px;",
                        placeholder: "Buscar platos...",
                        value: "{current.search_term()}",
                        oninput: move |evt| view.write().set_search_term(&evt.value()),
                    }
                    if !current.search_term().is_empty() {
                        button {
                            style: "padding: 0 12px; border-radius: 10px; border: none; background: #4b5563; color: white;",
                            onclick: move |_| view.write().clear_search(),
                            "Limpiar"
                        }
                    }
                    button {
                        style: "padding: 0 12px; border-radius: 10px; border: none; background: #f59e0b; color: white;",
                        onclick: move |_| view.write().toggle_suggestions(),
                        "Sugerencias"
                    }
                }
                if current.suggestions_open() {
                    div { style: "margin-top: 10px; display: flex; flex-wrap: wrap; gap: 8px;",
                        span { style: "color: #d1d5db; font-size: 14px;", "Búsquedas populares:" }
                        for suggestion in popular {
                            button {
                                key: "{suggestion}",
                                style: "padding: 4px 10px; border-radius: 999px; border: 1px solid #6b7280; background: transparent; color: white; font-size: 13px;",
                                onclick: {
                                    let term = suggestion.clone();
                                    move |_| view.write().apply_suggestion(&term)
                                },
                                "{suggestion}"
                            }
                        }
                    }
                }
            }

            // Category chips
            nav { style: "display: flex; flex-wrap: wrap; gap: 8px; padding: 16px 24px; background: white; border-bottom: 1px solid #e5e7eb;",
                CategoryChip {
                    label: "Todos".to_owned(),
                    key_name: ALL_CATEGORIES.to_owned(),
                    active: current.active_category() == ALL_CATEGORIES,
                    on_select: move |key: String| view.write().set_active_category(&key),
                }
                for category in current.categories().iter().cloned() {
                    CategoryChip {
                        key: "{category}",
                        label: category.clone(),
                        key_name: category.clone(),
                        active: current.active_category() == category,
                        on_select: move |key: String| view.write().set_active_category(&key),
                    }
                }
            }

            // Body
            div { style: "padding: 24px; min-height: 50vh;",
                if current.is_loading() {
                    p { style: "color: #6b7280; text-align: center; padding: 48px 0;", "Cargando menú..." }
                } else if current.has_error() {
                    div { style: "text-align: center; padding: 48px 0;",
                        p { style: "color: #dc2626; margin-bottom: 12px;",
                            "No pudimos cargar el menú."
                        }
                        button {
                            style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #d1d5db; background: white;",
                            onclick: move |_| reload.call(()),
                            "Reintentar"
                        }
                    }
                } else if current.is_empty_result() {
                    div { style: "text-align: center; padding: 48px 0; color: #6b7280;",
                        p { "No encontramos platos que coincidan con tu búsqueda." }
                        if !current.search_term().is_empty() {
                            button {
                                style: "margin-top: 12px; padding: 8px 16px; border-radius: 8px; border: 1px solid #d1d5db; background: white;",
                                onclick: move |_| view.write().clear_search(),
                                "Ver todo el menú"
                            }
                        }
                    }
                } else {
                    p { style: "color: #6b7280; font-size: 14px; margin-bottom: 12px;",
                        "{current.visible_count()} platos"
                    }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 20px;",
                        for (index, product) in current.visible().enumerate() {
                            // The generation in the key remounts cards on a
                            // category change so the entrance animation replays.
                            MenuItemCard {
                                key: "{generation}-{product.id}",
                                product: product.clone(),
                                index: index,
                                on_open: on_open,
                                on_quick_add: on_quick_add,
                            }
                        }
                    }
                }
            }

            Footer {}

            if let Some(product) = open_product {
                ItemModal {
                    product: product,
                    on_close: move |()| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn CategoryChip(
    label: String,
    key_name: String,
    active: bool,
    on_select: EventHandler<String>,
) -> Element {
    let class = if key_name == ALL_CATEGORIES {
        style::DEFAULT_CATEGORY_CLASS
    } else {
        style::category_class(&key_name)
    };
    let icon_color = style::category_color(&key_name);
    let glyph = style::category_path(&key_name);
    let icon_name = style::category_icon(&key_name);
    let border = if active {
        "2px solid #111827"
    } else {
        "2px solid transparent"
    };

    rsx! {
        button { class: "{class}",
            style: "display: inline-flex; align-items: center; gap: 6px; padding: 6px 14px; border-radius: 999px; border: {border}; cursor: pointer; font-size: 14px;",
            title: "{icon_name}",
            onclick: move |_| on_select.call(key_name.clone()),
            PathIcon { path: glyph, size: 16, color: icon_color.to_owned() }
            "{label}"
        }
    }
}
