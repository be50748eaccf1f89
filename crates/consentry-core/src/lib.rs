// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Consentry — Core types and error definitions shared across all crates.

pub mod color;
pub mod error;
pub mod events;
pub mod types;
pub mod webview;

pub use color::Rgba;
pub use error::ConsentryError;
pub use events::ConsentEvent;
pub use types::*;
pub use webview::*;
