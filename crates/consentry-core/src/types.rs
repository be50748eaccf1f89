// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Consentry CMP bridge.
//
// Everything here is a value object: configuration handed over by the
// scripting layer, or a read-only snapshot produced by the native SDK. The
// bridge never mutates or caches consent state of its own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConsentryError;

/// Identifies the remote consent-rule source.
///
/// Immutable once sent; the native SDK owns fetching and caching of the
/// rules this points at. No local validation beyond field presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlConfig {
    /// CMP identifier assigned by the consent provider.
    pub id: String,
    /// Consent-delivery domain (e.g. "delivery.consentmanager.net").
    pub domain: String,
    /// ISO 639-1 language code for the consent UI.
    pub language: String,
    /// Application name shown in the consent layer.
    pub app_name: String,
    /// Disable the URL hash fragment the SDK appends by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_hash: Option<bool>,
}

/// App Tracking Transparency authorization status.
///
/// The integer mapping is platform-defined and must match exactly:
/// the values cross the bridge as raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum AttStatus {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

impl From<AttStatus> for i32 {
    fn from(status: AttStatus) -> Self {
        match status {
            AttStatus::NotDetermined => 0,
            AttStatus::Restricted => 1,
            AttStatus::Denied => 2,
            AttStatus::Authorized => 3,
        }
    }
}

impl TryFrom<i32> for AttStatus {
    type Error = ConsentryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotDetermined),
            1 => Ok(Self::Restricted),
            2 => Ok(Self::Denied),
            3 => Ok(Self::Authorized),
            other => Err(ConsentryError::InvalidAttStatus(other)),
        }
    }
}

/// Grant state for a single vendor, purpose, or consent-mode key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Granted,
    Denied,
}

impl std::fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// Whether the user has made a consent choice at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserChoice {
    ChoiceExists,
    ChoiceDoesNotExist,
}

/// Regulation the native SDK determined to apply to this user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regulation {
    None,
    Gdpr,
    Ccpa,
    Lgpd,
}

/// Read-only consent snapshot, produced entirely by the native SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    pub status: UserChoice,
    /// Per-vendor grant state, keyed by vendor id.
    pub vendors: BTreeMap<String, ConsentStatus>,
    /// Per-purpose grant state, keyed by purpose id.
    pub purposes: BTreeMap<String, ConsentStatus>,
    /// IAB TCF consent string.
    pub tcf: String,
    /// Google Additional Consent string.
    pub addtl_consent: String,
    pub regulation: Regulation,
}

/// Google Consent Mode v2 grant states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleConsentModeStatus {
    pub analytics_storage: ConsentStatus,
    pub ad_storage: ConsentStatus,
    pub ad_user_data: ConsentStatus,
    pub ad_personalization: ConsentStatus,
}
