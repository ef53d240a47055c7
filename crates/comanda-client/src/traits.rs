// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Collaborator traits. Each one is the smallest surface the front end needs
// from an external service.

use async_trait::async_trait;

use comanda_core::error::Result;
use comanda_core::human_errors::Notice;
use comanda_core::types::{CartOrder, Product, UserId};

/// Source of the menu.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Fetch every product on the menu.
    async fn find_all(&self) -> Result<Vec<Product>>;
}

/// Destination for cart additions.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Add one order line to the signed-in user's cart.
    ///
    /// A refusal by the backend comes back as `ComandaError::CartRejected`
    /// carrying the backend's own message.
    async fn add_order(&self, order: &CartOrder) -> Result<()>;
}

/// Who is signed in, if anyone.
pub trait SessionProvider: Send + Sync {
    fn current_user_id(&self) -> Option<UserId>;
}

/// Toast-style user notifications.
///
/// Implementations live on the UI thread, so there is no `Send` bound.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);

    /// Show a notice derived from an error. Defaults to a plain error toast.
    fn notice(&self, notice: &Notice) {
        self.error(&notice.message);
    }
}
