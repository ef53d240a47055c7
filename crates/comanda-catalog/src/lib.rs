// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Comanda catalog — everything the menu and landing pages compute locally.
//
// No I/O happens here. The client crate feeds loaded products in and the app
// crate reads the derived state back out.

pub mod animation;
pub mod catalog;
pub mod landing;
pub mod style;

pub use animation::{ScrollReveal, Viewport};
pub use catalog::CatalogView;
