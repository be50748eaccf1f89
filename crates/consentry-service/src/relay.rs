// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Event relay between the native SDK and the host.
//
// Single producer (the native delegate), single consumer (the host's event
// emitter). The gate keeps track of whether the consent layer is currently
// shown: a close without a preceding show is suppressed rather than
// forwarded, and link clicks only pass while the layer is up — the SDK
// navigates internally during initialization and those clicks must not
// reach the host. Delivery is fire-and-forget and at-most-once.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use consentry_core::events::ConsentEvent;

/// Two-state gate over the consent layer's visibility.
#[derive(Debug, Default)]
pub struct LayerGate {
    shown: bool,
}

impl LayerGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the consent layer is currently shown.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Decide whether `event` is forwarded to the host, updating the gate.
    ///
    /// `LayerShown` always passes and opens the gate. `LayerClosed` passes
    /// only if a show was observed first; a spurious close is suppressed.
    /// `LinkClicked` passes only while the layer is up. Everything else
    /// always passes.
    pub fn admit(&mut self, event: &ConsentEvent) -> bool {
        match event {
            ConsentEvent::LayerShown => {
                self.shown = true;
                true
            }
            ConsentEvent::LayerClosed => {
                if self.shown {
                    self.shown = false;
                    true
                } else {
                    warn!("suppressing layer-closed without a preceding layer-shown");
                    false
                }
            }
            ConsentEvent::LinkClicked { url } => {
                if !self.shown {
                    debug!(url, "dropping link click while the consent layer is not shown");
                }
                self.shown
            }
            _ => true,
        }
    }
}

/// Spawn the relay task: native events in, gated events out.
///
/// Returns the task handle and the receiver the host consumes. The relay
/// never blocks on the consumer: if the host lags past `capacity` or has
/// gone away, the event is dropped — each delivery is at-most-once and no
/// event is worth stalling the native delegate for.
pub fn spawn_event_relay(
    mut native_rx: mpsc::Receiver<ConsentEvent>,
    capacity: usize,
) -> (JoinHandle<()>, mpsc::Receiver<ConsentEvent>) {
    let (tx, rx) = mpsc::channel(capacity);

    let handle = tokio::spawn(async move {
        let mut gate = LayerGate::new();
        while let Some(event) = native_rx.recv().await {
            if !gate.admit(&event) {
                continue;
            }
            let name = event.name();
            if let Err(e) = tx.try_send(event) {
                warn!(event = name, "dropping consent event: {e}");
            }
        }
        debug!("native event channel closed; relay shutting down");
    });

    (handle, rx)
}
