// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Comanda menu and cart.

use serde::{Deserialize, Serialize};

/// Filter key that selects every product regardless of category.
pub const ALL_CATEGORIES: &str = "all";

/// Backend-assigned product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the signed-in user, as issued by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The category a product is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// A purchasable menu item.
///
/// Read-only on this side: the backend owns creation and deletion, the UI only
/// keeps a copy for the lifetime of a page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Category name usable as a filter key.
    ///
    /// Missing categories and empty names both yield `None`.
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// Response envelope returned by the catalog query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Product>>,
}

impl CatalogEnvelope {
    pub fn into_products(self) -> Vec<Product> {
        self.data.unwrap_or_default()
    }
}

/// Order line sent to the cart service.
///
/// The quantity travels as a decimal string because that is what the cart
/// endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartOrder {
    pub product_name: String,
    pub quantity: String,
    pub subtotal: f64,
    pub comment: Option<String>,
    pub product: ProductId,
}

impl CartOrder {
    /// One unit of `product` at its list price, no comment.
    pub fn single(product: &Product) -> Self {
        Self {
            product_name: product.name.clone(),
            quantity: "1".to_owned(),
            subtotal: product.price,
            comment: None,
            product: product.id.clone(),
        }
    }

    /// `quantity` units with an optional kitchen comment.
    ///
    /// Blank comments are dropped. Callers must reject a zero quantity first.
    pub fn with_quantity(product: &Product, quantity: u32, comment: Option<&str>) -> Self {
        let comment = comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned);
        Self {
            product_name: product.name.clone(),
            quantity: quantity.to_string(),
            subtotal: product.price * f64::from(quantity),
            comment,
            product: product.id.clone(),
        }
    }
}

/// Body returned by the cart service.
///
/// `error` may be any JSON value. Only a truthy one (non-empty string, `true`,
/// non-zero number, object or array) rejects the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl CartResponse {
    /// The rejection message, if the service refused the order.
    pub fn rejection(&self) -> Option<String> {
        use serde_json::Value;

        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
