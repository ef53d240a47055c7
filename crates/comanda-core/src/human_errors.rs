// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing messages for diners.
//
// Every technical error is mapped to a short Spanish sentence suitable for a
// toast. The severity picks the toast style.

use crate::error::ComandaError;

/// Message shown when the menu cannot be fetched.
pub const CATALOG_LOAD_FAILED: &str = "Error al cargar el menú. Por favor, intenta nuevamente.";

/// Message shown when a cart action is attempted without a session.
pub const LOGIN_REQUIRED: &str = "Debes iniciar sesión para agregar productos al carrito";

/// Message shown when the cart request never got an answer.
pub const CART_ADD_FAILED: &str = "Error al agregar el producto al carrito";

/// Severity of an error from the diner's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Connection blip; trying again later may work.
    Transient,
    /// The diner has to do something first (sign in, pick a quantity).
    ActionRequired,
    /// Retrying will not help.
    Permanent,
}

/// A message the UI can put in front of a diner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Convert a `ComandaError` into something a diner can read.
pub fn humanize_error(err: &ComandaError) -> Notice {
    match err {
        ComandaError::Network(_) => Notice::new(
            "No pudimos conectar con el restaurante. Revisa tu conexión.",
            Severity::Transient,
        ),

        ComandaError::HttpStatus { status, .. } if *status == 401 || *status == 403 => Notice::new(
            "Tu sesión expiró. Vuelve a iniciar sesión.",
            Severity::ActionRequired,
        ),

        ComandaError::HttpStatus { status, .. } if *status >= 500 => Notice::new(
            "El servicio no está disponible en este momento.",
            Severity::Transient,
        ),

        ComandaError::HttpStatus { .. } => Notice::new(
            "El restaurante no pudo procesar la solicitud.",
            Severity::Permanent,
        ),

        ComandaError::CartRejected(detail) => {
            Notice::new(format!("Error: {detail}"), Severity::Permanent)
        }

        ComandaError::NotAuthenticated => Notice::new(LOGIN_REQUIRED, Severity::ActionRequired),

        ComandaError::InvalidQuantity(_) => {
            Notice::new("Elige al menos una unidad.", Severity::ActionRequired)
        }

        ComandaError::InvalidConfig(detail) => Notice::new(
            format!("La configuración de la aplicación no es válida ({detail})."),
            Severity::Permanent,
        ),

        ComandaError::Io(_) | ComandaError::Serialization(_) => Notice::new(
            "Ocurrió un error inesperado. Intenta nuevamente.",
            Severity::Transient,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_asks_to_sign_in() {
        let notice = humanize_error(&ComandaError::NotAuthenticated);
        assert_eq!(notice.message, LOGIN_REQUIRED);
        assert_eq!(notice.severity, Severity::ActionRequired);
    }

    #[test]
    fn cart_rejection_carries_backend_message() {
        let notice = humanize_error(&ComandaError::CartRejected("Producto agotado".into()));
        assert_eq!(notice.message, "Error: Producto agotado");
        assert_eq!(notice.severity, Severity::Permanent);
    }

    #[test]
    fn server_errors_are_transient() {
        let err = ComandaError::HttpStatus {
            status: 503,
            body: String::new(),
        };
        let notice = humanize_error(&err);
        assert_eq!(notice.severity, Severity::Transient);
    }

    #[test]
    fn expired_session_is_action_required() {
        let err = ComandaError::HttpStatus {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }

    #[test]
    fn network_failure_is_transient() {
        let notice = humanize_error(&ComandaError::Network("connection refused".into()));
        assert_eq!(notice.severity, Severity::Transient);
    }
}
