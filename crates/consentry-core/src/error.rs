// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Consentry.

use thiserror::Error;

/// Top-level error type for all Consentry operations.
#[derive(Debug, Error)]
pub enum ConsentryError {
    // -- Configuration validation --
    // Raised synchronously, before anything crosses the native seam.
    #[error("position 'custom' requires a customRect")]
    MissingCustomRect,

    #[error("background style 'color' requires a color")]
    MissingColor,

    #[error("unrecognised color: {0:?}")]
    UnresolvableColor(String),

    #[error("invalid ATT status value: {0} (expected 0..=3)")]
    InvalidAttStatus(i32),

    // -- Native SDK --
    // Operational failures from the consent SDK (network, invalid CMP id),
    // surfaced verbatim. The caller decides whether to retry.
    #[error("consent SDK call failed: {0}")]
    Sdk(String),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ConsentryError>;
