// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UI actions that reach the backend. Each one is terminal on failure: the
// diner is told what happened and nothing is retried.

use tracing::{error, info, warn};

use comanda_core::error::{ComandaError, Result};
use comanda_core::human_errors::{self, CART_ADD_FAILED, CATALOG_LOAD_FAILED};
use comanda_core::types::{CartOrder, Product};

use crate::traits::{CartService, Notifier, ProductService, SessionProvider};

/// Fetch the menu, telling the diner if it could not be loaded.
///
/// Feed the outcome to `CatalogView::settle`.
pub async fn load_catalog(
    service: &dyn ProductService,
    notifier: &dyn Notifier,
) -> Result<Vec<Product>> {
    match service.find_all().await {
        Ok(products) => {
            info!(count = products.len(), "menu loaded");
            Ok(products)
        }
        Err(e) => {
            error!(error = %e, "menu load failed");
            notifier.error(CATALOG_LOAD_FAILED);
            Err(e)
        }
    }
}

/// Add one unit of `product` to the cart straight from the menu card.
///
/// Without a signed-in user nothing is sent and the diner is asked to sign in.
pub async fn quick_add_to_cart(
    session: &dyn SessionProvider,
    cart: &dyn CartService,
    notifier: &dyn Notifier,
    product: &Product,
) -> Result<()> {
    submit(session, cart, notifier, CartOrder::single(product)).await
}

/// Add `quantity` units of `product` with an optional comment, from the item modal.
pub async fn add_order_to_cart(
    session: &dyn SessionProvider,
    cart: &dyn CartService,
    notifier: &dyn Notifier,
    product: &Product,
    quantity: u32,
    comment: Option<&str>,
) -> Result<()> {
    if quantity == 0 {
        let err = ComandaError::InvalidQuantity(quantity);
        notifier.notice(&human_errors::humanize_error(&err));
        return Err(err);
    }
    submit(
        session,
        cart,
        notifier,
        CartOrder::with_quantity(product, quantity, comment),
    )
    .await
}

async fn submit(
    session: &dyn SessionProvider,
    cart: &dyn CartService,
    notifier: &dyn Notifier,
    order: CartOrder,
) -> Result<()> {
    let Some(user) = session.current_user_id() else {
        warn!(product = %order.product, "cart add without a signed-in user");
        let err = ComandaError::NotAuthenticated;
        notifier.notice(&human_errors::humanize_error(&err));
        return Err(err);
    };

    match cart.add_order(&order).await {
        Ok(()) => {
            info!(
                user = %user,
                product = %order.product,
                quantity = %order.quantity,
                "added to cart"
            );
            notifier.success(&format!("¡{} agregado al carrito!", order.product_name));
            Ok(())
        }
        Err(ComandaError::CartRejected(message)) => {
            warn!(product = %order.product, %message, "cart rejected order");
            let err = ComandaError::CartRejected(message);
            notifier.notice(&human_errors::humanize_error(&err));
            Err(err)
        }
        Err(e) => {
            error!(error = %e, product = %order.product, "cart add failed");
            notifier.error(CART_ADD_FAILED);
            Err(e)
        }
    }
}
