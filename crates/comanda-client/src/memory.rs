// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory backend used when no API is configured.
//
// Serves a fixed house menu and records cart orders in a local log so the
// front end stays usable offline.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{info, warn};

use comanda_core::error::{ComandaError, Result};
use comanda_core::types::{CartOrder, CategoryRef, Product};

use crate::traits::{CartService, ProductService};

/// Fixed menu plus an append-only order log.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    products: Vec<Product>,
    orders: Mutex<Vec<CartOrder>>,
}

impl MemoryBackend {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Backend preloaded with the house menu.
    pub fn with_house_menu() -> Self {
        Self::new(house_menu())
    }

    /// Orders accepted so far, oldest first.
    #[cfg(test)]
    pub fn orders(&self) -> Vec<CartOrder> {
        match self.orders.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ProductService for MemoryBackend {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

#[async_trait]
impl CartService for MemoryBackend {
    async fn add_order(&self, order: &CartOrder) -> Result<()> {
        if !self.products.iter().any(|p| p.id == order.product) {
            warn!(product = %order.product, "order for unknown product");
            return Err(ComandaError::CartRejected(format!(
                "producto {} no disponible",
                order.product
            )));
        }
        let mut orders = self
            .orders
            .lock()
            .map_err(|_| ComandaError::CartRejected("cart log unavailable".into()))?;
        orders.push(order.clone());
        info!(product = %order.product, total = orders.len(), "order recorded locally");
        Ok(())
    }
}

fn dish(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    description: &str,
    featured: bool,
) -> Product {
    Product {
        id: id.into(),
        name: name.to_owned(),
        image_url: format!("https://placehold.co/480x320?text={}", name.replace(' ', "+")),
        price,
        category: Some(CategoryRef {
            name: category.to_owned(),
        }),
        featured: Some(featured),
        description: Some(description.to_owned()),
    }
}

/// The menu served in offline mode.
pub fn house_menu() -> Vec<Product> {
    vec![
        dish(
            "ent-1",
            "Empanadas de Carne",
            "Entradas",
            6.5,
            "Masa casera rellena de carne cortada a cuchillo",
            true,
        ),
        dish(
            "ent-2",
            "Provoleta",
            "Entradas",
            7.0,
            "Queso provolone a la parrilla con orégano",
            false,
        ),
        dish(
            "pri-1",
            "Lomo a la Pimienta",
            "Platos Principales",
            18.9,
            "Medallón de lomo con salsa de pimienta verde",
            true,
        ),
        dish(
            "pri-2",
            "Salmón Grillado",
            "Platos Principales",
            21.5,
            "Salmón rosado con vegetales salteados",
            false,
        ),
        dish(
            "piz-1",
            "Pizza Margarita",
            "Pizzas",
            12.5,
            "Tomate, mozzarella y albahaca fresca",
            true,
        ),
        dish(
            "piz-2",
            "Pizza Cuatro Quesos",
            "Pizzas",
            14.0,
            "Mozzarella, roquefort, parmesano y provolone",
            false,
        ),
        dish(
            "pas-1",
            "Lasagna Boloñesa",
            "Pastas",
            13.5,
            "Capas de pasta fresca con salsa boloñesa",
            false,
        ),
        dish(
            "pas-2",
            "Sorrentinos de Calabaza",
            "Pastas",
            12.0,
            "Con salsa de manteca y salvia",
            false,
        ),
        dish(
            "ens-1",
            "Ensalada César",
            "Ensaladas",
            9.5,
            "Pollo, parmesano, crutones y aderezo césar",
            false,
        ),
        dish(
            "pos-1",
            "Tiramisú",
            "Postres",
            6.75,
            "Clásico italiano con café y mascarpone",
            true,
        ),
        dish(
            "pos-2",
            "Flan Casero",
            "Postres",
            5.0,
            "Con dulce de leche y crema",
            false,
        ),
        dish(
            "beb-1",
            "Limonada de Menta",
            "Bebidas",
            3.5,
            "Natural, con menta y jengibre",
            false,
        ),
    ]
}
