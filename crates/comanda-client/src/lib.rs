// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Comanda client — the seams to the restaurant backend and the UI actions
// that cross them.
//
// The product, cart, and auth services are external. This crate only encodes
// the contract the front end needs from them, with an HTTP implementation for
// a real deployment and an in-memory one for offline use.

pub mod actions;
pub mod http;
pub mod memory;
pub mod session;
pub mod traits;

pub use actions::{add_order_to_cart, load_catalog, quick_add_to_cart};
pub use http::HttpBackend;
pub use memory::MemoryBackend;
pub use session::{Session, StaticSession};
pub use traits::{CartService, Notifier, ProductService, SessionProvider};
