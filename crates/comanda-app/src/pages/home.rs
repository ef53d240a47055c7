// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Landing page — hero, services, features, stats, testimonials, and opening
// hours. Sections fade in the first time they scroll into view.

use std::rc::Rc;

use comanda_catalog::landing::{
    BUSINESS_HOURS, FEATURES, FLOATING_SHAPES, MAIN_SERVICES, STATS, TESTIMONIALS,
};
use comanda_catalog::{ScrollReveal, Viewport, animation, style};
use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

use crate::components::icon::PathIcon;
use crate::{Footer, Route};

const SECTION_SERVICES: usize = 0;
const SECTION_FEATURES: usize = 1;
const SECTION_STATS: usize = 2;
const SECTION_TESTIMONIALS: usize = 3;
const SECTION_HOURS: usize = 4;

/// Record the mounted node for `index`, replacing one from an earlier mount.
fn upsert_section<T>(sections: &mut Vec<(usize, T)>, index: usize, node: T) {
    match sections.iter_mut().find(|(i, _)| *i == index) {
        Some(slot) => slot.1 = node,
        None => sections.push((index, node)),
    }
}

#[component]
pub fn Home() -> Element {
    let mut reveal = use_signal(ScrollReveal::new);
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut sections = use_signal(Vec::<(usize, Rc<MountedData>)>::new);

    // Measure every unrevealed section against the scroll container.
    let refresh = move || {
        spawn(async move {
            let Some(root) = container.read().clone() else {
                return;
            };
            let Ok(root_rect) = root.get_client_rect().await else {
                return;
            };
            let viewport = Viewport {
                top: root_rect.origin.y,
                bottom: root_rect.origin.y + root_rect.size.height,
            };
            let targets = sections.read().clone();
            for (index, element) in targets {
                if reveal.peek().is_revealed(index) {
                    continue;
                }
                if let Ok(rect) = element.get_client_rect().await {
                    let top = rect.origin.y;
                    let bottom = top + rect.size.height;
                    if viewport.intersects(top, bottom) {
                        reveal.write().observe(index, top, bottom, viewport);
                    }
                }
            }
        });
    };

    let mut register = move |index: usize, element: Rc<MountedData>| {
        upsert_section(&mut *sections.write(), index, element);
        refresh();
    };

    let scroll_to_services = move |_: MouseEvent| {
        let target = sections
            .peek()
            .iter()
            .find(|(i, _)| *i == SECTION_SERVICES)
            .map(|(_, el)| el.clone());
        if let Some(element) = target {
            spawn(async move {
                if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!(error = ?e, "scroll to services failed");
                }
            });
        }
    };

    let class_for = |section: usize| reveal.read().class_for(section);
    let shapes: Vec<(usize, String)> = (0..FLOATING_SHAPES)
        .map(|i| {
            let size = 60 + i * 30;
            let css = format!(
                "animation-delay: {}; width: {size}px; height: {size}px; top: {}%; left: {}%;",
                animation::shape_delay(i),
                10 + i * 18,
                8 + i * 24,
            );
            (i, css)
        })
        .collect();

    rsx! {
        div { class: "home-page",
            style: "flex: 1; overflow-y: auto;",
            onmounted: move |evt| {
                container.set(Some(evt.data()));
                refresh();
            },
            onscroll: move |_| refresh(),

            // Hero
            section {
                style: "position: relative; overflow: hidden; padding: 96px 24px; text-align: center; color: white; background: linear-gradient(135deg, #7c2d12, #b45309);",
                for (i, css) in shapes {
                    div { key: "{i}", class: "floating-shape", style: "{css}" }
                }
                h1 { style: "position: relative; font-size: 44px;", "Sabores que cuentan historias" }
                p { style: "position: relative; margin: 16px auto 28px; max-width: 560px; color: #fde68a; font-size: 18px;",
                    "Cocina de autor, reservas al instante y delivery premium en un solo lugar."
                }
                div { style: "position: relative; display: flex; gap: 12px; justify-content: center;",
                    Link { to: Route::Carta {},
                        style: "padding: 12px 24px; border-radius: 999px; background: white; color: #7c2d12; text-decoration: none; font-weight: 600;",
                        "Ver la carta"
                    }
                    button {
                        style: "padding: 12px 24px; border-radius: 999px; border: 2px solid white; background: transparent; color: white; font-weight: 600; cursor: pointer;",
                        onclick: scroll_to_services,
                        "Nuestros servicios"
                    }
                }
            }

            // Services
            section { class: class_for(SECTION_SERVICES),
                style: "padding: 64px 24px;",
                onmounted: move |evt| register(SECTION_SERVICES, evt.data()),
                h2 { style: "text-align: center; font-size: 30px; margin-bottom: 32px;", "Nuestros Servicios" }
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(230px, 1fr)); gap: 20px; max-width: 1100px; margin: 0 auto;",
                    for (index, card) in MAIN_SERVICES.iter().enumerate() {
                        ServiceTile { key: "{card.title}", index: index }
                    }
                }
            }

            // Features
            section { class: class_for(SECTION_FEATURES),
                style: "padding: 64px 24px; background: white;",
                onmounted: move |evt| register(SECTION_FEATURES, evt.data()),
                h2 { style: "text-align: center; font-size: 30px; margin-bottom: 32px;", "¿Por qué elegirnos?" }
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px; max-width: 1100px; margin: 0 auto;",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        FeatureTile { key: "{feature.title}", index: index }
                    }
                }
            }

            // Stats
            section { class: class_for(SECTION_STATS),
                style: "padding: 48px 24px; background: #111827; color: white;",
                onmounted: move |evt| register(SECTION_STATS, evt.data()),
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 24px; max-width: 900px; margin: 0 auto; text-align: center;",
                    for stat in STATS {
                        div { key: "{stat.label}",
                            PathIcon { path: style::feature_path(stat.icon), size: 24, color: "#f59e0b".to_owned() }
                            div { style: "font-size: 34px; font-weight: 700;", "{stat.number}" }
                            div { style: "color: #9ca3af;", "{stat.label}" }
                        }
                    }
                }
            }

            // Testimonials
            section { class: class_for(SECTION_TESTIMONIALS),
                style: "padding: 64px 24px;",
                onmounted: move |evt| register(SECTION_TESTIMONIALS, evt.data()),
                h2 { style: "text-align: center; font-size: 30px; margin-bottom: 32px;", "Lo que dicen nuestros clientes" }
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 20px; max-width: 1100px; margin: 0 auto;",
                    for testimonial in TESTIMONIALS {
                        div { key: "{testimonial.name}",
                            style: "background: white; border-radius: 14px; padding: 20px; box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
                            div { style: "display: flex; gap: 2px; margin-bottom: 10px;",
                                for (n, _) in style::rating_stars(testimonial.rating).into_iter().enumerate() {
                                    PathIcon { key: "{n}", path: style::feature_path("star"), size: 18, color: "#f59e0b".to_owned() }
                                }
                            }
                            p { style: "color: #374151; font-style: italic; margin-bottom: 14px;", "“{testimonial.comment}”" }
                            div { style: "display: flex; align-items: center; gap: 10px;",
                                img { src: "{testimonial.image}", alt: "{testimonial.name}",
                                    style: "width: 44px; height: 44px; border-radius: 50%; object-fit: cover;",
                                }
                                div {
                                    strong { "{testimonial.name}" }
                                    div { style: "color: #6b7280; font-size: 13px;", "{testimonial.role}" }
                                }
                            }
                        }
                    }
                }
            }

            // Opening hours
            section { class: class_for(SECTION_HOURS),
                style: "padding: 48px 24px 64px; background: white;",
                onmounted: move |evt| register(SECTION_HOURS, evt.data()),
                h2 { style: "text-align: center; font-size: 26px; margin-bottom: 20px;", "Horarios" }
                div { style: "max-width: 420px; margin: 0 auto;",
                    for row in BUSINESS_HOURS {
                        div { key: "{row.day}",
                            style: "display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #f3f4f6;",
                            span { "{row.day}" }
                            strong { "{row.hours}" }
                        }
                    }
                }
            }

            Footer {}
        }
    }
}

#[component]
fn FeatureTile(index: usize) -> Element {
    let Some(feature) = FEATURES.get(index) else {
        return rsx! {};
    };
    let (from, to) = feature.gradient;

    rsx! {
        div { style: "text-align: center;",
            div {
                style: "width: 56px; height: 56px; margin: 0 auto 12px; border-radius: 14px; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, {from}, {to});",
                PathIcon { path: style::feature_path(feature.icon), size: 28, color: "white".to_owned() }
            }
            h3 { style: "font-size: 18px; margin-bottom: 6px;", "{feature.title}" }
            p { style: "color: #6b7280; font-size: 14px;", "{feature.description}" }
        }
    }
}

/// One of the headline service cards.
#[component]
fn ServiceTile(index: usize) -> Element {
    let Some(card) = MAIN_SERVICES.get(index) else {
        return rsx! {};
    };
    let (from, to) = card.gradient;
    let destination = card.route.parse::<Route>().ok();

    rsx! {
        div {
            style: "border-radius: 16px; overflow: hidden; background: white; box-shadow: 0 1px 4px rgba(0,0,0,0.08); display: flex; flex-direction: column;",
            div { style: "padding: 20px; color: white; background: linear-gradient(135deg, {from}, {to});",
                h3 { style: "font-size: 20px;", "{card.title}" }
                p { style: "margin-top: 6px; font-size: 14px; opacity: 0.9;", "{card.description}" }
            }
            ul { style: "padding: 16px 20px 8px 36px; color: #374151; font-size: 14px; flex: 1;",
                for feature in card.features {
                    li { key: "{feature}", style: "margin-bottom: 4px;", "{feature}" }
                }
            }
            if let Some(route) = destination {
                div { style: "padding: 0 20px 20px;",
                    Link { to: route,
                        style: "color: {to}; font-weight: 600; text-decoration: none;",
                        "Ir a {card.title} →"
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
    fn remount_replaces_the_section_node() {
        let mut sections = Vec::new();
        upsert_section(&mut sections, SECTION_SERVICES, "first");
        upsert_section(&mut sections, SECTION_STATS, "stats");
        upsert_section(&mut sections, SECTION_SERVICES, "second");

        assert_eq!(sections, [(SECTION_SERVICES, "second"), (SECTION_STATS, "stats")]);
    }
}
