// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub seam for desktop/CI builds where no native consent surface exists.
//
// Every call reports `PlatformUnavailable` — real implementations live in
// the `ios` and `android` modules. Capabilities are all false so every
// advisory fallback path is exercisable in CI.

use async_trait::async_trait;

use consentry_core::error::{ConsentryError, Result};
use consentry_core::types::{AttStatus, GoogleConsentModeStatus, UrlConfig, UserStatus};
use consentry_core::webview::{PlatformCapabilities, ResolvedWebViewConfig, ScreenMetrics};

use crate::traits::{NativeConsentSdk, NativeScreen};

/// No-op screen reader returned on non-mobile platforms.
pub struct StubScreen;

impl NativeScreen for StubScreen {
    fn screen_metrics(&self) -> Result<ScreenMetrics> {
        tracing::warn!("NativeScreen::screen_metrics called on stub seam");
        Err(ConsentryError::PlatformUnavailable)
    }

    fn capabilities(&self) -> PlatformCapabilities {
        PlatformCapabilities::NONE
    }

    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

/// No-op consent SDK handle for builds without the vendor SDK.
pub struct StubConsentSdk;

#[async_trait]
impl NativeConsentSdk for StubConsentSdk {
    async fn set_url_config(&self, _config: UrlConfig) -> Result<()> {
        tracing::warn!("NativeConsentSdk::set_url_config called on stub seam");
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn apply_web_view_config(&self, _config: ResolvedWebViewConfig) -> Result<()> {
        tracing::warn!("NativeConsentSdk::apply_web_view_config called on stub seam");
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn set_att_status(&self, _status: AttStatus) -> Result<()> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn check_and_open(&self, _jump_to_settings: bool) -> Result<bool> {
        tracing::warn!("NativeConsentSdk::check_and_open called on stub seam");
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn force_open(&self, _jump_to_settings: bool) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn user_status(&self) -> Result<UserStatus> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn is_consent_required(&self) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn status_for_purpose(&self, _purpose_id: &str) -> Result<String> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn status_for_vendor(&self, _vendor_id: &str) -> Result<String> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn google_consent_mode_status(&self) -> Result<GoogleConsentModeStatus> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn export_cmp_info(&self) -> Result<String> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn import_cmp_info(&self, _cmp_info: &str) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn reset_consent_data(&self) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn accept_vendors(&self, _vendors: &[String]) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn reject_vendors(&self, _vendors: &[String]) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn accept_purposes(&self, _purposes: &[String], _update_vendors: bool) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn reject_purposes(&self, _purposes: &[String], _update_vendors: bool) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn accept_all(&self) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }

    async fn reject_all(&self) -> Result<bool> {
        Err(ConsentryError::PlatformUnavailable)
    }
}
