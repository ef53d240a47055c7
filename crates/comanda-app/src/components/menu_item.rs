// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Menu card — one product with its category badge and cart buttons.

use comanda_catalog::{animation, style};
use comanda_core::types::Product;
use dioxus::prelude::*;

use super::icon::PathIcon;

#[component]
pub fn MenuItemCard(
    product: Product,
    // Position in the visible grid; drives the entrance delay.
    index: usize,
    on_open: EventHandler<Product>,
    on_quick_add: EventHandler<Product>,
) -> Element {
    let category = product.category_name().unwrap_or_default().to_owned();
    let badge_class = style::category_class(&category);
    let accent = style::category_color(&category);
    let glyph = style::category_path(&category);
    let delay = animation::card_delay(index);
    let price = style::format_price(product.price);

    let open_product = product.clone();
    let add_product = product.clone();

    rsx! {
        div { class: "menu-item-card",
            style: "animation-delay: {delay}; background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 1px 4px rgba(0,0,0,0.08); display: flex; flex-direction: column; cursor: pointer;",
            onclick: move |_| on_open.call(open_product.clone()),

            div { style: "position: relative; height: 160px; background: #e5e7eb;",
                if !product.image_url.is_empty() {
                    img {
                        src: "{product.image_url}",
                        alt: "{product.name}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                }
                if product.is_featured() {
                    span { style: "position: absolute; top: 8px; left: 8px; padding: 2px 8px; border-radius: 999px; background: #f59e0b; color: white; font-size: 12px; font-weight: 600;",
                        "Destacado"
                    }
                }
            }

            div { style: "padding: 14px; display: flex; flex-direction: column; gap: 8px; flex: 1;",
                if !category.is_empty() {
                    span { class: "{badge_class}",
                        style: "align-self: flex-start; display: inline-flex; align-items: center; gap: 4px; padding: 2px 8px; border-radius: 999px; font-size: 12px;",
                        PathIcon { path: glyph, size: 14, color: accent.to_owned() }
                        "{category}"
                    }
                }
                h3 { style: "font-size: 17px;", "{product.name}" }
                if let Some(ref description) = product.description {
                    p { style: "color: #6b7280; font-size: 14px; flex: 1;", "{description}" }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: 4px;",
                    strong { style: "font-size: 18px; color: {accent};", "{price}" }
                    button {
                        style: "padding: 6px 12px; border: none; border-radius: 8px; background: #111827; color: white; cursor: pointer;",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_quick_add.call(add_product.clone());
                        },
                        "+ Agregar"
                    }
                }
            }
        }
    }
}
