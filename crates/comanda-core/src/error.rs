// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Comanda.

use thiserror::Error;

/// Top-level error type for all Comanda operations.
#[derive(Debug, Error)]
pub enum ComandaError {
    // -- Backend errors --
    #[error("request failed: {0}")]
    Network(String),

    #[error("backend returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("cart rejected the order: {0}")]
    CartRejected(String),

    // -- Session --
    #[error("no authenticated user")]
    NotAuthenticated,

    // -- Input --
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ComandaError>;
