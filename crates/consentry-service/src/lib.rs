// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Consentry — Bridge call surface and event relay.
//
// `ConsentService` is the injectable facade the host composes: validation
// and normalization happen here, then calls pass through to the native SDK
// unchanged. The relay forwards native events to the host after applying
// the layer gate.

pub mod relay;
pub mod service;

pub use relay::{LayerGate, spawn_event_relay};
pub use service::ConsentService;
