// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static content for the landing page.

/// A headline service with its entry route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Two-stop gradient, `(from, to)`.
    pub gradient: (&'static str, &'static str),
    pub route: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub gradient: (&'static str, &'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub comment: &'static str,
    /// Stars out of five.
    pub rating: u8,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub day: &'static str,
    pub hours: &'static str,
}

pub const MAIN_SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "Reserva tu Mesa",
        description: "Sistema inteligente de reservas online con confirmación instantánea",
        icon: "calendar-check",
        gradient: ("#3b82f6", "#2563eb"),
        route: "/reserva",
        features: &[
            "Reserva inmediata",
            "Selección de mesa",
            "Confirmación por email",
            "Cancelación flexible",
        ],
    },
    ServiceCard {
        title: "Delivery Premium",
        description: "Disfruta nuestros platos en casa con entrega rápida y segura",
        icon: "truck-fast",
        gradient: ("#22c55e", "#16a34a"),
        route: "/delivery",
        features: &[
            "Entrega en 30 min",
            "Empaque ecológico",
            "Seguimiento en tiempo real",
            "Zona de cobertura amplia",
        ],
    },
    ServiceCard {
        title: "Carta Digital",
        description: "Explora nuestro menú completo con descripciones detalladas",
        icon: "utensils",
        gradient: ("#a855f7", "#9333ea"),
        route: "/carta",
        features: &[
            "Menú actualizado",
            "Filtros por categoría",
            "Información nutricional",
            "Opciones especiales",
        ],
    },
    ServiceCard {
        title: "Eventos Privados",
        description: "Organiza celebraciones únicas en nuestros espacios exclusivos",
        icon: "party-horn",
        gradient: ("#f97316", "#ea580c"),
        route: "/eventos",
        features: &[
            "Salones privados",
            "Menús personalizados",
            "Decoración incluida",
            "Servicio especializado",
        ],
    },
];

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        title: "Cocina de Autor",
        description: "Platos únicos creados por nuestro chef ejecutivo con ingredientes de primera calidad",
        icon: "heart",
        gradient: ("#f59e0b", "#d97706"),
    },
    FeatureCard {
        title: "Ambiente Único",
        description: "Diseño interior cuidadosamente pensado para crear la atmósfera perfecta",
        icon: "heart",
        gradient: ("#ef4444", "#dc2626"),
    },
    FeatureCard {
        title: "Servicio Excepcional",
        description: "Personal altamente capacitado para brindarte una experiencia memorable",
        icon: "heart",
        gradient: ("#ec4899", "#db2777"),
    },
    FeatureCard {
        title: "Tecnología Avanzada",
        description: "Sistema integrado para una experiencia fluida desde la reserva hasta el pago",
        icon: "heart",
        gradient: ("#6366f1", "#4f46e5"),
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "María González",
        role: "Food Blogger",
        comment: "Una experiencia gastronómica excepcional. Cada plato es una obra de arte y el servicio es impecable.",
        rating: 5,
        image: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    Testimonial {
        name: "Carlos Mendoza",
        role: "Chef Consultor",
        comment: "La calidad de los ingredientes y la técnica culinaria están al nivel de los mejores restaurantes.",
        rating: 5,
        image: "https://randomuser.me/api/portraits/men/44.jpg",
    },
    Testimonial {
        name: "Ana Rodríguez",
        role: "Crítica Gastronómica",
        comment: "Un lugar que redefine la experiencia culinaria con innovación y tradición en perfecta armonía.",
        rating: 4,
        image: "https://randomuser.me/api/portraits/women/34.jpg",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        number: "500+",
        label: "Clientes Satisfechos",
        icon: "users",
    },
    Stat {
        number: "50+",
        label: "Platos Únicos",
        icon: "utensils",
    },
    Stat {
        number: "5★",
        label: "Calificación Promedio",
        icon: "star",
    },
    Stat {
        number: "3",
        label: "Años de Experiencia",
        icon: "calendar",
    },
];

pub const BUSINESS_HOURS: &[BusinessHours] = &[
    BusinessHours {
        day: "Lunes - Jueves",
        hours: "12:00 - 23:00",
    },
    BusinessHours {
        day: "Viernes - Sábado",
        hours: "12:00 - 01:00",
    },
    BusinessHours {
        day: "Domingo",
        hours: "12:00 - 22:00",
    },
];

/// Number of decorative shapes floating behind the hero.
pub const FLOATING_SHAPES: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= 5));
    }

    #[test]
    fn every_service_has_route_and_features() {
        for card in MAIN_SERVICES {
            assert!(card.route.starts_with('/'), "{}", card.title);
            assert_eq!(card.features.len(), 4, "{}", card.title);
        }
    }

    #[test]
    fn menu_service_points_at_carta() {
        assert!(MAIN_SERVICES.iter().any(|c| c.route == "/carta"));
    }
}
