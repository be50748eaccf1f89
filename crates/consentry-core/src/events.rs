// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Asynchronous events emitted by the native consent SDK.
//
// Events are fire-and-forget and at-most-once per native emission. They are
// out-of-band from any call's result; the relay in `consentry-service`
// forwards them to the host after applying the layer gate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::AttStatus;

/// A single event relayed from the native SDK to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ConsentEvent {
    /// The user completed a consent decision.
    #[serde(rename_all = "camelCase")]
    ConsentReceived {
        /// Encoded consent string, opaque to this layer.
        consent: String,
        /// Parsed consent object as delivered by the SDK.
        json_object: serde_json::Value,
    },
    /// The consent layer became visible.
    LayerShown,
    /// The consent layer was dismissed.
    LayerClosed,
    /// The SDK reported an operational error.
    Error { error: String },
    /// The user tapped a link inside the consent layer.
    LinkClicked { url: String },
    /// The ATT authorization status transitioned.
    #[serde(rename_all = "camelCase")]
    AttStatusChanged {
        old_status: AttStatus,
        new_status: AttStatus,
        last_updated: DateTime<Utc>,
    },
}

impl ConsentEvent {
    /// Wire name used when dispatching to the host's event system.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConsentReceived { .. } => "consent-received",
            Self::LayerShown => "layer-shown",
            Self::LayerClosed => "layer-closed",
            Self::Error { .. } => "error",
            Self::LinkClicked { .. } => "link-clicked",
            Self::AttStatusChanged { .. } => "att-status-changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_the_wire_contract() {
        let event = ConsentEvent::ConsentReceived {
            consent: "Q1FB...".to_owned(),
            json_object: serde_json::json!({ "vendors": [] }),
        };
        assert_eq!(event.name(), "consent-received");
        assert_eq!(ConsentEvent::LayerShown.name(), "layer-shown");
        assert_eq!(ConsentEvent::LayerClosed.name(), "layer-closed");
        assert_eq!(
            ConsentEvent::LinkClicked {
                url: "https://example.net/privacy".to_owned(),
            }
            .name(),
            "link-clicked"
        );
    }

    #[test]
    fn att_transition_serializes_statuses_as_integers() {
        let event = ConsentEvent::AttStatusChanged {
            old_status: AttStatus::NotDetermined,
            new_status: AttStatus::Authorized,
            last_updated: DateTime::parse_from_rfc3339("2026-08-01T09:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["oldStatus"], 0);
        assert_eq!(json["newStatus"], 3);
        assert_eq!(json["event"], "attStatusChanged");
    }
}
