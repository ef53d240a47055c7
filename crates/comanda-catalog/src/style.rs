// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static lookup tables that turn category and icon names into presentation:
// CSS classes, icon names, SVG path data, and colours. Every lookup has a
// fixed fallback so unknown backend categories still render.

/// Class used for categories without a dedicated style.
pub const DEFAULT_CATEGORY_CLASS: &str = "category-default";

/// Icon used for categories without a dedicated icon.
pub const DEFAULT_CATEGORY_ICON: &str = "utensils";

/// Accent colour for [`DEFAULT_CATEGORY_CLASS`].
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

const CATEGORY_CLASSES: &[(&str, &str)] = &[
    ("Entradas", "category-entradas"),
    ("Platos Principales", "category-principales"),
    ("Postres", "category-postres"),
    ("Bebidas", "category-bebidas"),
    ("Pizzas", "category-pizzas"),
    ("Pastas", "category-pastas"),
    ("Ensaladas", "category-ensaladas"),
];

const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Entradas", "utensils"),
    ("Platos Principales", "drumstick-bite"),
    ("Postres", "ice-cream"),
    ("Bebidas", "glass-martini-alt"),
    ("Pizzas", "pizza-slice"),
    ("Pastas", "bread-slice"),
    ("Ensaladas", "leaf"),
];

const CLASS_COLORS: &[(&str, &str)] = &[
    ("category-entradas", "#f59e0b"),
    ("category-principales", "#dc2626"),
    ("category-postres", "#db2777"),
    ("category-bebidas", "#2563eb"),
    ("category-pizzas", "#ea580c"),
    ("category-pastas", "#ca8a04"),
    ("category-ensaladas", "#16a34a"),
];

const MAIN_COURSE_PATH: &str = "M3 2v7c0 1.1.9 2 2 2h2c1.1 0 2-.9 2-2V2M7 2v10m6 0v7c0 1.1.9 2 2 2h2c1.1 0 2-.9 2-2V2M17 2v10";

const CATEGORY_PATHS: &[(&str, &str)] = &[
    (
        "Entradas",
        "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
    ),
    ("Platos Principales", MAIN_COURSE_PATH),
    (
        "Postres",
        "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
    ),
    (
        "Bebidas",
        "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253",
    ),
    (
        "Pizzas",
        "M11 17a1 1 0 001.447.894l4-2A1 1 0 0017 15V9.236a1 1 0 00-1.447-.894l-4 2a1 1 0 00-.553.894V17zM15.211 6.276a1 1 0 000-1.788l-4.764-2.382a1 1 0 00-.894 0L4.789 4.488a1 1 0 000 1.788l4.764 2.382a1 1 0 00.894 0l4.764-2.382zM4.447 8.342A1 1 0 003 9.236V15a1 1 0 00.553.894l4.764 2.382a1 1 0 00.894 0l4.764-2.382a1 1 0 00.553-.894V9.236a1 1 0 00-.553-.894l-4.764-2.382a1 1 0 00-.894 0z",
    ),
    (
        "Pastas",
        "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2",
    ),
    ("Ensaladas", "M13 10V3L4 14h7v7l9-11h-7z"),
];

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

const FEATURE_PATHS: &[(&str, &str)] = &[
    (
        "heart",
        "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z",
    ),
    ("utensils", MAIN_COURSE_PATH),
    ("star", STAR_PATH),
    (
        "shield",
        "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
    ),
    ("clock", "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"),
    (
        "globe",
        "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9",
    ),
    (
        "crown",
        "M5 21h14a2 2 0 002-2V8a2 2 0 00-2-2h-1V4a2 2 0 00-2-2H8a2 2 0 00-2 2v2H5a2 2 0 00-2 2v11a2 2 0 002 2z",
    ),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// CSS class for a category badge.
pub fn category_class(category: &str) -> &'static str {
    lookup(CATEGORY_CLASSES, category).unwrap_or(DEFAULT_CATEGORY_CLASS)
}

/// Icon name for a category.
pub fn category_icon(category: &str) -> &'static str {
    lookup(CATEGORY_ICONS, category).unwrap_or(DEFAULT_CATEGORY_ICON)
}

/// SVG path data for a category. Unknown categories get the main-course glyph.
pub fn category_path(category: &str) -> &'static str {
    lookup(CATEGORY_PATHS, category).unwrap_or(MAIN_COURSE_PATH)
}

/// Accent colour (hex) for a category, derived from its CSS class.
pub fn category_color(category: &str) -> &'static str {
    lookup(CLASS_COLORS, category_class(category)).unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// SVG path data for a landing-page feature icon. Unknown icons get the star.
pub fn feature_path(icon: &str) -> &'static str {
    lookup(FEATURE_PATHS, icon).unwrap_or(STAR_PATH)
}

/// One entry per star to draw for a rating.
pub fn rating_stars(rating: u8) -> Vec<u8> {
    vec![0; usize::from(rating)]
}

/// Price as shown on menu cards.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_dedicated_classes() {
        assert_eq!(category_class("Pizzas"), "category-pizzas");
        assert_eq!(category_class("Platos Principales"), "category-principales");
        assert_eq!(category_icon("Bebidas"), "glass-martini-alt");
        assert_eq!(category_icon("Ensaladas"), "leaf");
    }

    #[test]
    fn unmapped_category_falls_back() {
        for key in ["Sushi", "", "pizzas", "all"] {
            assert_eq!(category_class(key), DEFAULT_CATEGORY_CLASS);
            assert_eq!(category_icon(key), DEFAULT_CATEGORY_ICON);
            assert_eq!(category_path(key), category_path("Platos Principales"));
            assert_eq!(category_color(key), DEFAULT_CATEGORY_COLOR);
        }
    }

    #[test]
    fn every_styled_category_has_icon_path_and_colour() {
        for (category, class) in CATEGORY_CLASSES {
            assert!(lookup(CATEGORY_ICONS, category).is_some(), "{category} icon");
            assert!(lookup(CATEGORY_PATHS, category).is_some(), "{category} path");
            assert!(lookup(CLASS_COLORS, class).is_some(), "{class} colour");
        }
    }

    #[test]
    fn unmapped_feature_icon_is_star() {
        assert_eq!(feature_path("rocket"), feature_path("star"));
        assert_ne!(feature_path("heart"), feature_path("star"));
        assert_eq!(feature_path("utensils"), category_path("Platos Principales"));
    }

    #[test]
    fn stars_match_rating() {
        assert_eq!(rating_stars(5).len(), 5);
        assert!(rating_stars(0).is_empty());
    }

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(3.0), "$3.00");
    }
}
