// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native consent seam.
//
// `NativeConsentSdk` is the call surface into the vendor CMP SDK: one
// async method per operation, each a single-shot request/response. The SDK
// owns all consent logic, storage, and regulatory computation; nothing is
// batched, retried, or cancelable at this layer.

use async_trait::async_trait;

use consentry_core::error::Result;
use consentry_core::types::{AttStatus, GoogleConsentModeStatus, UrlConfig, UserStatus};
use consentry_core::webview::{PlatformCapabilities, ResolvedWebViewConfig, ScreenMetrics};

/// Async call surface into the native CMP SDK.
///
/// Every method suspends the caller until the SDK responds. Operational
/// failures (network, invalid CMP id) come back as `ConsentryError::Sdk`
/// with the SDK's message verbatim; the caller decides whether to retry.
/// Concurrent calls race inside the shared SDK instance with undefined
/// ordering — this trait neither serializes nor detects that.
#[async_trait]
pub trait NativeConsentSdk: Send + Sync {
    /// Point the SDK at its remote consent-rule source.
    async fn set_url_config(&self, config: UrlConfig) -> Result<()>;

    /// Apply an already-normalized WebView configuration.
    async fn apply_web_view_config(&self, config: ResolvedWebViewConfig) -> Result<()>;

    /// Report the current ATT authorization status to the SDK.
    async fn set_att_status(&self, status: AttStatus) -> Result<()>;

    /// Show the consent layer if the SDK decides consent is required.
    /// Returns whether the layer was shown.
    async fn check_and_open(&self, jump_to_settings: bool) -> Result<bool>;

    /// Show the consent layer unconditionally.
    async fn force_open(&self, jump_to_settings: bool) -> Result<bool>;

    /// Read-only snapshot of the user's consent state.
    async fn user_status(&self) -> Result<UserStatus>;

    /// Whether the applicable regulation requires a consent decision.
    async fn is_consent_required(&self) -> Result<bool>;

    /// Grant state for a single purpose id.
    async fn status_for_purpose(&self, purpose_id: &str) -> Result<String>;

    /// Grant state for a single vendor id.
    async fn status_for_vendor(&self, vendor_id: &str) -> Result<String>;

    /// Google Consent Mode v2 grant states.
    async fn google_consent_mode_status(&self) -> Result<GoogleConsentModeStatus>;

    /// Export the SDK's consent state as an opaque string.
    async fn export_cmp_info(&self) -> Result<String>;

    /// Import a previously exported consent state. The string is opaque and
    /// must reach the SDK unaltered.
    async fn import_cmp_info(&self, cmp_info: &str) -> Result<bool>;

    /// Wipe all locally stored consent data.
    async fn reset_consent_data(&self) -> Result<bool>;

    async fn accept_vendors(&self, vendors: &[String]) -> Result<bool>;
    async fn reject_vendors(&self, vendors: &[String]) -> Result<bool>;

    /// Accept the given purposes; `update_vendors` also updates the vendors
    /// linked to them.
    async fn accept_purposes(&self, purposes: &[String], update_vendors: bool) -> Result<bool>;

    /// Reject the given purposes; `update_vendors` also updates the vendors
    /// linked to them.
    async fn reject_purposes(&self, purposes: &[String], update_vendors: bool) -> Result<bool>;

    async fn accept_all(&self) -> Result<bool>;
    async fn reject_all(&self) -> Result<bool>;
}

/// Synchronous screen and capability reads, implemented per platform.
pub trait NativeScreen: Send + Sync {
    /// Screen dimensions and safe-area insets in logical points.
    ///
    /// May hop onto the platform's UI thread; the calling thread blocks
    /// until the value is available. Must not be invoked from within a
    /// UI-thread callback already in progress — the rendezvous would never
    /// complete.
    fn screen_metrics(&self) -> Result<ScreenMetrics>;

    /// What this platform can honour at render time.
    fn capabilities(&self) -> PlatformCapabilities;

    /// Human-readable platform name (e.g. "iOS", "Android").
    fn platform_name(&self) -> &str;
}
