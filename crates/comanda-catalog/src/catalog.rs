// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Menu view state: the loaded product list, the derived category set, and the
// subset currently visible under the active category and search term.

use comanda_core::error::Result;
use comanda_core::types::{ALL_CATEGORIES, Product, ProductId};
use tracing::{debug, warn};

/// Whether `product` belongs under the category filter `key`.
///
/// [`ALL_CATEGORIES`] matches everything. Any other key matches by exact
/// equality on the category name; uncategorised products never match.
pub fn matches_category(product: &Product, key: &str) -> bool {
    key == ALL_CATEGORIES || product.category_name() == Some(key)
}

/// Whether `product` matches an already lower-cased search needle.
///
/// The needle is looked for in the name and, when present, the description.
pub fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

/// Indices of the products matching both the category key and the search term.
///
/// A term that is blank after trimming disables search filtering. Otherwise
/// the term is matched as typed, surrounding whitespace included.
pub fn filter_indices(products: &[Product], category: &str, term: &str) -> Vec<usize> {
    let needle = (!term.trim().is_empty()).then(|| term.to_lowercase());
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_category(p, category))
        .filter(|(_, p)| needle.as_deref().is_none_or(|n| matches_search(p, n)))
        .map(|(i, _)| i)
        .collect()
}

/// Distinct category names in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for name in products.iter().filter_map(Product::category_name) {
        if !seen.iter().any(|s| s == name) {
            seen.push(name.to_owned());
        }
    }
    seen
}

/// State behind the menu page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    products: Vec<Product>,
    categories: Vec<String>,
    active_category: String,
    search_term: String,
    visible: Vec<usize>,
    loading: bool,
    load_error: bool,
    show_suggestions: bool,
    /// Bumped whenever the category changes so entrance animations replay.
    generation: u64,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    /// An empty view that is waiting for its first load.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            active_category: ALL_CATEGORIES.to_owned(),
            search_term: String::new(),
            visible: Vec::new(),
            loading: true,
            load_error: false,
            show_suggestions: false,
            generation: 0,
        }
    }

    // -- Loading -------------------------------------------------------------

    /// Mark a catalog request as in flight.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.load_error = false;
    }

    /// Replace the product list and re-derive everything from it.
    ///
    /// The active category and search term survive a reload.
    pub fn load(&mut self, products: Vec<Product>) {
        self.categories = distinct_categories(&products);
        self.products = products;
        self.refilter();
        self.loading = false;
        self.load_error = false;
        debug!(
            products = self.products.len(),
            categories = self.categories.len(),
            "catalog loaded"
        );
    }

    /// Record that the catalog request failed. The previous list is kept.
    pub fn fail_loading(&mut self) {
        self.loading = false;
        self.load_error = true;
    }

    /// Apply the outcome of a catalog request.
    pub fn settle(&mut self, outcome: Result<Vec<Product>>) {
        match outcome {
            Ok(products) => self.load(products),
            Err(e) => {
                warn!(error = %e, "keeping previous catalog after failed load");
                self.fail_loading();
            }
        }
    }

    // -- Filters -------------------------------------------------------------

    /// Switch the category filter. Use [`ALL_CATEGORIES`] to clear it.
    pub fn set_active_category(&mut self, category: &str) {
        self.active_category = category.to_owned();
        self.generation += 1;
        self.refilter();
    }

    /// Replace the search term and refilter.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_owned();
        self.refilter();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.refilter();
        self.show_suggestions = false;
    }

    /// Use one of the popular searches as the term.
    pub fn apply_suggestion(&mut self, suggestion: &str) {
        self.set_search_term(suggestion);
        self.show_suggestions = false;
    }

    pub fn toggle_suggestions(&mut self) {
        self.show_suggestions = !self.show_suggestions;
    }

    fn refilter(&mut self) {
        self.visible = filter_indices(&self.products, &self.active_category, &self.search_term);
    }

    // -- Accessors -----------------------------------------------------------

    /// Products passing the current filters, in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &Product> + '_ {
        self.visible.iter().map(|&i| &self.products[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.load_error
    }

    pub fn suggestions_open(&self) -> bool {
        self.show_suggestions
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Loaded successfully but nothing passes the filters.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && !self.load_error && self.visible.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::error::ComandaError;
    use comanda_core::types::CategoryRef;

    fn product(id: &str, name: &str, category: Option<&str>, description: Option<&str>) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            image_url: String::new(),
            price: 10.0,
            category: category.map(|c| CategoryRef { name: c.into() }),
            featured: None,
            description: description.map(String::from),
        }
    }

    fn menu() -> Vec<Product> {
        vec![
            product("1", "Pizza Margarita", Some("Pizzas"), Some("Tomate y albahaca")),
            product("2", "Lasagna", Some("Pastas"), Some("Con salsa boloñesa")),
            product("3", "Pizza Cuatro Quesos", Some("Pizzas"), None),
            product("4", "Limonada", Some("Bebidas"), Some("Natural, sin azúcar")),
            product("5", "Pan de ajo", None, Some("Para compartir")),
            product("6", "Ensalada César", Some("Ensaladas"), Some("Pollo y parmesano")),
            product("7", "Agua", Some(""), None),
        ]
    }

    fn loaded() -> CatalogView {
        let mut view = CatalogView::new();
        view.load(menu());
        view
    }

    fn visible_ids(view: &CatalogView) -> Vec<&str> {
        view.visible().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn new_view_is_loading_with_all_selected() {
        let view = CatalogView::new();
        assert!(view.is_loading());
        assert!(!view.has_error());
        assert_eq!(view.active_category(), ALL_CATEGORIES);
        assert!(!view.is_empty_result());
    }

    #[test]
    fn load_derives_distinct_categories_in_order() {
        let view = loaded();
        assert_eq!(view.categories(), ["Pizzas", "Pastas", "Bebidas", "Ensaladas"]);
        assert!(!view.is_loading());
    }

    #[test]
    fn all_returns_full_list() {
        let view = loaded();
        assert_eq!(view.visible_count(), 7);
    }

    #[test]
    fn category_filter_is_exact_subset() {
        let mut view = loaded();
        view.set_active_category("Pizzas");
        assert_eq!(visible_ids(&view), ["1", "3"]);

        // Prefixes and case variants do not match.
        view.set_active_category("pizzas");
        assert!(view.is_empty_result());
        view.set_active_category("Pizza");
        assert_eq!(view.visible_count(), 0);

        view.set_active_category(ALL_CATEGORIES);
        assert_eq!(view.visible_count(), 7);
    }

    #[test]
    fn uncategorised_products_only_show_under_all() {
        let mut view = loaded();
        view.set_active_category("");
        assert_eq!(view.visible_count(), 0);
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let mut view = loaded();
        view.set_search_term("PIZZA");
        assert_eq!(visible_ids(&view), ["1", "3"]);
    }

    #[test]
    fn search_matches_description() {
        let mut view = loaded();
        view.set_search_term("azúcar");
        assert_eq!(visible_ids(&view), ["4"]);
        view.set_search_term("COMPARTIR");
        assert_eq!(visible_ids(&view), ["5"]);
    }

    #[test]
    fn search_intersects_with_category() {
        let mut view = loaded();
        view.set_active_category("Pastas");
        view.set_search_term("pizza");
        assert!(view.is_empty_result());
        view.set_search_term("bolo");
        assert_eq!(visible_ids(&view), ["2"]);
    }

    #[test]
    fn blank_term_disables_search() {
        let mut view = loaded();
        view.set_search_term("   ");
        assert_eq!(view.visible_count(), 7);
    }

    #[test]
    fn trailing_space_is_part_of_the_term() {
        let mut view = loaded();
        view.set_search_term("limonada ");
        assert!(view.is_empty_result());
    }

    #[test]
    fn trailing_space_matches_across_words() {
        let products = vec![
            product("a", "Pizza", Some("Pizzas"), None),
            product("b", "Pizza Margarita", Some("Pizzas"), None),
        ];
        assert_eq!(filter_indices(&products, ALL_CATEGORIES, "pizza "), vec![1]);
        assert_eq!(filter_indices(&products, ALL_CATEGORIES, "pizza"), vec![0, 1]);
    }

    #[test]
    fn clear_search_restores_category_subset_and_hides_suggestions() {
        let mut view = loaded();
        view.set_active_category("Pizzas");
        view.toggle_suggestions();
        view.set_search_term("queso");
        assert_eq!(view.visible_count(), 1);

        view.clear_search();
        assert_eq!(view.search_term(), "");
        assert_eq!(visible_ids(&view), ["1", "3"]);
        assert!(!view.suggestions_open());
    }

    #[test]
    fn suggestion_sets_term_and_closes_panel() {
        let mut view = loaded();
        view.toggle_suggestions();
        assert!(view.suggestions_open());
        view.apply_suggestion("Ensalada");
        assert_eq!(view.search_term(), "Ensalada");
        assert_eq!(visible_ids(&view), ["6"]);
        assert!(!view.suggestions_open());
    }

    #[test]
    fn reload_keeps_filters() {
        let mut view = loaded();
        view.set_active_category("Bebidas");
        view.begin_loading();
        assert!(view.is_loading());
        view.load(menu());
        assert_eq!(view.active_category(), "Bebidas");
        assert_eq!(visible_ids(&view), ["4"]);
    }

    #[test]
    fn failed_load_sets_error_flag() {
        let mut view = CatalogView::new();
        view.fail_loading();
        assert!(view.has_error());
        assert!(!view.is_loading());
        assert!(!view.is_empty_result());

        view.begin_loading();
        assert!(!view.has_error());
    }

    #[test]
    fn settle_applies_either_outcome() {
        let mut view = CatalogView::new();
        view.settle(Ok(menu()));
        assert_eq!(view.visible_count(), 7);

        view.begin_loading();
        view.settle(Err(ComandaError::Network("timed out".into())));
        assert!(view.has_error());
        assert_eq!(view.products().len(), 7);
    }

    #[test]
    fn category_change_bumps_generation() {
        let mut view = loaded();
        let before = view.generation();
        view.set_active_category("Pizzas");
        assert_eq!(view.generation(), before + 1);
        view.set_search_term("x");
        assert_eq!(view.generation(), before + 1);
    }

    #[test]
    fn find_by_id() {
        let view = loaded();
        let found = view.find(&ProductId::from("6")).expect("product 6");
        assert_eq!(found.name, "Ensalada César");
        assert!(view.find(&ProductId::from("missing")).is_none());
    }

    #[test]
    fn find_follows_the_latest_load() {
        let mut view = loaded();
        let id = ProductId::from("4");
        assert!(view.find(&id).is_some());

        view.load(menu().into_iter().filter(|p| p.id != id).collect());
        assert!(view.find(&id).is_none());
    }
}
