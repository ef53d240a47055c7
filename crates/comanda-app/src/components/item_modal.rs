// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Item modal — choose a quantity and leave a note for the kitchen before
// adding a product to the cart.

use comanda_catalog::style;
use comanda_client::add_order_to_cart;
use comanda_core::types::Product;
use dioxus::prelude::*;

use crate::services::app_services::AppServices;
use crate::services::notifications::ToastNotifier;
use crate::state::AppState;

/// What the diner has chosen so far in the modal.
#[derive(Debug, Clone, PartialEq)]
struct OrderDraft {
    quantity: u32,
    comment: String,
    submitting: bool,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            quantity: 1,
            comment: String::new(),
            submitting: false,
        }
    }
}

impl OrderDraft {
    fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never goes below one unit.
    fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    fn subtotal(&self, unit_price: f64) -> f64 {
        unit_price * f64::from(self.quantity)
    }

    /// Mark a request as in flight. False if one already is.
    fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Closing unmounts the modal and would drop an in-flight request.
    fn can_close(&self) -> bool {
        !self.submitting
    }
}

#[component]
pub fn ItemModal(product: Product, on_close: EventHandler<()>) -> Element {
    let svc = use_context::<AppServices>();
    let state = use_context::<Signal<AppState>>();
    let mut draft = use_signal(OrderDraft::default);

    let subtotal = style::format_price(draft.read().subtotal(product.price));
    let quantity = draft.read().quantity;
    let submitting = draft.read().submitting;
    let comment = draft.read().comment.clone();

    // The request runs in this component's scope, so the modal must stay
    // mounted until it settles.
    let close = move |_: MouseEvent| {
        if draft.peek().can_close() {
            on_close.call(());
        }
    };

    let submit_product = product.clone();
    let submit = move |_: MouseEvent| {
        if !draft.write().begin_submit() {
            return;
        }
        let svc = svc.clone();
        let product = submit_product.clone();
        let (qty, note) = {
            let d = draft.peek();
            (d.quantity, d.comment.clone())
        };
        spawn(async move {
            let notifier = ToastNotifier::new(state, svc.toast_duration());
            let result = add_order_to_cart(
                svc.session(),
                svc.cart(),
                &notifier,
                &product,
                qty,
                Some(note.as_str()),
            )
            .await;
            draft.write().finish_submit();
            if result.is_ok() {
                on_close.call(());
            }
        });
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(17,24,39,0.6); display: flex; align-items: center; justify-content: center; z-index: 40;",
            onclick: close,

            div {
                style: "width: min(440px, 92vw); background: white; border-radius: 16px; overflow: hidden;",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                if !product.image_url.is_empty() {
                    img {
                        src: "{product.image_url}",
                        alt: "{product.name}",
                        style: "width: 100%; height: 200px; object-fit: cover;",
                    }
                }

                div { style: "padding: 20px; display: flex; flex-direction: column; gap: 12px;",
                    h2 { "{product.name}" }
                    if let Some(ref description) = product.description {
                        p { style: "color: #6b7280;", "{description}" }
                    }

                    div { style: "display: flex; align-items: center; gap: 12px;",
                        span { "Cantidad" }
                        button {
                            style: "width: 32px; height: 32px; border-radius: 8px; border: 1px solid #d1d5db; background: white;",
                            disabled: quantity <= 1,
                            onclick: move |_| draft.write().decrement(),
                            "−"
                        }
                        strong { style: "min-width: 24px; text-align: center;", "{quantity}" }
                        button {
                            style: "width: 32px; height: 32px; border-radius: 8px; border: 1px solid #d1d5db; background: white;",
                            onclick: move |_| draft.write().increment(),
                            "+"
                        }
                    }

                    textarea {
                        style: "width: 100%; min-height: 72px; padding: 8px; border: 1px solid #d1d5db; border-radius: 8px; font-family: inherit;",
                        placeholder: "Comentarios para la cocina (opcional)",
                        value: "{comment}",
                        oninput: move |evt| draft.write().comment = evt.value(),
                    }

                    div { style: "display: flex; justify-content: space-between; align-items: center;",
                        strong { style: "font-size: 18px;", "Subtotal: {subtotal}" }
                        div { style: "display: flex; gap: 8px;",
                            button {
                                style: "padding: 8px 14px; border-radius: 8px; border: 1px solid #d1d5db; background: white;",
                                disabled: submitting,
                                onclick: close,
                                "Cancelar"
                            }
                            button {
                                style: "padding: 8px 14px; border-radius: 8px; border: none; background: #111827; color: white;",
                                disabled: submitting,
                                onclick: submit,
                                if submitting { "Agregando..." } else { "Agregar al carrito" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_stays_at_least_one() {
        let mut draft = OrderDraft::default();
        draft.decrement();
        assert_eq!(draft.quantity, 1);
        draft.increment();
        draft.increment();
        assert_eq!(draft.quantity, 3);
        assert!((draft.subtotal(12.5) - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn cannot_close_while_request_in_flight() {
        let mut draft = OrderDraft::default();
        assert!(draft.can_close());

        assert!(draft.begin_submit());
        assert!(!draft.can_close());
        assert!(!draft.begin_submit(), "second submit while in flight");

        draft.finish_submit();
        assert!(draft.can_close());
    }
}
