// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The consent call surface.
//
// `ConsentService` wraps an explicitly owned SDK handle rather than a
// process-wide global, so tests and hosts can substitute their own.
// Validation and normalization run synchronously here; only valid payloads
// cross the native seam. Everything downstream is pass-through marshaling:
// no batching, no retries, no timeouts, and no serialization of concurrent
// calls — back-to-back calls race inside the shared SDK with undefined
// ordering, exactly as the SDK itself behaves.

use std::sync::Arc;

use tracing::debug;

use consentry_bridge::traits::NativeConsentSdk;
use consentry_core::error::Result;
use consentry_core::types::{AttStatus, GoogleConsentModeStatus, UrlConfig, UserStatus};
use consentry_core::webview::{PlatformCapabilities, WebViewConfig};

/// Injectable facade over the native consent SDK.
pub struct ConsentService {
    sdk: Arc<dyn NativeConsentSdk>,
    capabilities: PlatformCapabilities,
}

impl ConsentService {
    /// Compose the service from an SDK handle and the platform's
    /// capabilities (usually `NativeScreen::capabilities()`).
    pub fn new(sdk: Arc<dyn NativeConsentSdk>, capabilities: PlatformCapabilities) -> Self {
        Self { sdk, capabilities }
    }

    /// Point the SDK at its remote consent-rule source.
    pub async fn set_url_config(&self, config: UrlConfig) -> Result<()> {
        debug!(id = %config.id, domain = %config.domain, "setting URL config");
        self.sdk.set_url_config(config).await
    }

    /// Normalize and apply a WebView configuration.
    ///
    /// Caller errors (missing custom rect, missing or unresolvable color)
    /// surface here, before anything crosses the seam.
    pub async fn set_web_view_config(&self, config: WebViewConfig) -> Result<()> {
        let resolved = config.normalize(&self.capabilities)?;
        debug!(position = ?resolved.position, "setting WebView config");
        self.sdk.apply_web_view_config(resolved).await
    }

    /// Report the ATT status to the SDK. Rejects integers outside 0..=3.
    pub async fn set_att_status(&self, status: i32) -> Result<()> {
        let status = AttStatus::try_from(status)?;
        debug!(?status, "setting ATT status");
        self.sdk.set_att_status(status).await
    }

    /// Show the consent layer if the SDK decides consent is required.
    pub async fn check_and_open(&self, jump_to_settings: bool) -> Result<bool> {
        debug!(jump_to_settings, "checkAndOpen");
        self.sdk.check_and_open(jump_to_settings).await
    }

    /// Show the consent layer unconditionally.
    pub async fn force_open(&self, jump_to_settings: bool) -> Result<bool> {
        debug!(jump_to_settings, "forceOpen");
        self.sdk.force_open(jump_to_settings).await
    }

    /// Read-only snapshot of the user's consent state.
    pub async fn user_status(&self) -> Result<UserStatus> {
        self.sdk.user_status().await
    }

    /// Whether the applicable regulation requires a consent decision.
    pub async fn is_consent_required(&self) -> Result<bool> {
        self.sdk.is_consent_required().await
    }

    /// Grant state for a single purpose id.
    pub async fn status_for_purpose(&self, purpose_id: &str) -> Result<String> {
        self.sdk.status_for_purpose(purpose_id).await
    }

    /// Grant state for a single vendor id.
    pub async fn status_for_vendor(&self, vendor_id: &str) -> Result<String> {
        self.sdk.status_for_vendor(vendor_id).await
    }

    /// Google Consent Mode v2 grant states.
    pub async fn google_consent_mode_status(&self) -> Result<GoogleConsentModeStatus> {
        self.sdk.google_consent_mode_status().await
    }

    /// Export the SDK's consent state. The returned string is opaque and
    /// passes through unaltered.
    pub async fn export_cmp_info(&self) -> Result<String> {
        self.sdk.export_cmp_info().await
    }

    /// Import a previously exported consent state, unaltered.
    pub async fn import_cmp_info(&self, cmp_info: &str) -> Result<bool> {
        self.sdk.import_cmp_info(cmp_info).await
    }

    /// Wipe all locally stored consent data.
    pub async fn reset_consent_data(&self) -> Result<bool> {
        debug!("resetting consent management data");
        self.sdk.reset_consent_data().await
    }

    pub async fn accept_vendors(&self, vendors: &[String]) -> Result<bool> {
        debug!(count = vendors.len(), "accepting vendors");
        self.sdk.accept_vendors(vendors).await
    }

    pub async fn reject_vendors(&self, vendors: &[String]) -> Result<bool> {
        debug!(count = vendors.len(), "rejecting vendors");
        self.sdk.reject_vendors(vendors).await
    }

    pub async fn accept_purposes(&self, purposes: &[String], update_vendors: bool) -> Result<bool> {
        debug!(count = purposes.len(), update_vendors, "accepting purposes");
        self.sdk.accept_purposes(purposes, update_vendors).await
    }

    pub async fn reject_purposes(&self, purposes: &[String], update_vendors: bool) -> Result<bool> {
        debug!(count = purposes.len(), update_vendors, "rejecting purposes");
        self.sdk.reject_purposes(purposes, update_vendors).await
    }

    pub async fn accept_all(&self) -> Result<bool> {
        debug!("accepting all");
        self.sdk.accept_all().await
    }

    pub async fn reject_all(&self) -> Result<bool> {
        debug!("rejecting all");
        self.sdk.reject_all().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use consentry_core::error::ConsentryError;
    use consentry_core::types::{ConsentStatus, Regulation, UserChoice};
    use consentry_core::webview::{
        ResolvedBackgroundStyle, ResolvedWebViewConfig, WebViewPosition,
    };
    use consentry_core::Rgba;

    use super::*;

    /// Records every call that crosses the seam.
    #[derive(Default)]
    struct RecordingSdk {
        calls: Mutex<Vec<String>>,
        web_view_config: Mutex<Option<ResolvedWebViewConfig>>,
        imported: Mutex<Option<String>>,
    }

    impl RecordingSdk {
        fn record(&self, name: &str) {
            self.calls.lock().unwrap().push(name.to_owned());
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl NativeConsentSdk for RecordingSdk {
        async fn set_url_config(&self, _config: UrlConfig) -> Result<()> {
            self.record("set_url_config");
            Ok(())
        }

        async fn apply_web_view_config(&self, config: ResolvedWebViewConfig) -> Result<()> {
            self.record("apply_web_view_config");
            *self.web_view_config.lock().unwrap() = Some(config);
            Ok(())
        }

        async fn set_att_status(&self, _status: AttStatus) -> Result<()> {
            self.record("set_att_status");
            Ok(())
        }

        async fn check_and_open(&self, _jump_to_settings: bool) -> Result<bool> {
            self.record("check_and_open");
            Ok(true)
        }

        async fn force_open(&self, _jump_to_settings: bool) -> Result<bool> {
            self.record("force_open");
            Ok(true)
        }

        async fn user_status(&self) -> Result<UserStatus> {
            self.record("user_status");
            Ok(UserStatus {
                status: UserChoice::ChoiceExists,
                vendors: Default::default(),
                purposes: Default::default(),
                tcf: String::new(),
                addtl_consent: String::new(),
                regulation: Regulation::Gdpr,
            })
        }

        async fn is_consent_required(&self) -> Result<bool> {
            self.record("is_consent_required");
            Ok(true)
        }

        async fn status_for_purpose(&self, _purpose_id: &str) -> Result<String> {
            self.record("status_for_purpose");
            Ok(ConsentStatus::Granted.to_string())
        }

        async fn status_for_vendor(&self, _vendor_id: &str) -> Result<String> {
            self.record("status_for_vendor");
            Ok(ConsentStatus::Denied.to_string())
        }

        async fn google_consent_mode_status(&self) -> Result<GoogleConsentModeStatus> {
            self.record("google_consent_mode_status");
            Ok(GoogleConsentModeStatus {
                analytics_storage: ConsentStatus::Granted,
                ad_storage: ConsentStatus::Denied,
                ad_user_data: ConsentStatus::Denied,
                ad_personalization: ConsentStatus::Denied,
            })
        }

        async fn export_cmp_info(&self) -> Result<String> {
            self.record("export_cmp_info");
            Ok("Q1FERkE3QUZBQkl=#_gdpr".to_owned())
        }

        async fn import_cmp_info(&self, cmp_info: &str) -> Result<bool> {
            self.record("import_cmp_info");
            *self.imported.lock().unwrap() = Some(cmp_info.to_owned());
            Ok(true)
        }

        async fn reset_consent_data(&self) -> Result<bool> {
            self.record("reset_consent_data");
            Ok(true)
        }

        async fn accept_vendors(&self, _vendors: &[String]) -> Result<bool> {
            self.record("accept_vendors");
            Ok(true)
        }

        async fn reject_vendors(&self, _vendors: &[String]) -> Result<bool> {
            self.record("reject_vendors");
            Ok(true)
        }

        async fn accept_purposes(&self, _purposes: &[String], _update: bool) -> Result<bool> {
            self.record("accept_purposes");
            Ok(true)
        }

        async fn reject_purposes(&self, _purposes: &[String], _update: bool) -> Result<bool> {
            self.record("reject_purposes");
            Ok(true)
        }

        async fn accept_all(&self) -> Result<bool> {
            self.record("accept_all");
            Ok(true)
        }

        async fn reject_all(&self) -> Result<bool> {
            self.record("reject_all");
            Ok(true)
        }
    }

    fn service_with(sdk: Arc<RecordingSdk>) -> ConsentService {
        ConsentService::new(sdk, PlatformCapabilities::ALL)
    }

    #[tokio::test]
    async fn web_view_config_is_normalized_before_forwarding() {
        let sdk = Arc::new(RecordingSdk::default());
        let service = service_with(sdk.clone());

        let config = WebViewConfig {
            position: Some(WebViewPosition::HalfScreenBottom),
            ..Default::default()
        };
        service.set_web_view_config(config).await.unwrap();

        let received = sdk.web_view_config.lock().unwrap().unwrap();
        assert_eq!(received.position, WebViewPosition::HalfScreenBottom);
        assert_eq!(received.corner_radius, 5.0);
        assert!(received.respects_safe_area);
        assert!(received.allows_orientation_changes);
        assert_eq!(
            received.background_style,
            ResolvedBackgroundStyle::Dimmed {
                color: Rgba::BLACK,
                opacity: 0.5,
            }
        );
    }

    #[tokio::test]
    async fn invalid_web_view_config_never_crosses_the_seam() {
        let sdk = Arc::new(RecordingSdk::default());
        let service = service_with(sdk.clone());

        let config = WebViewConfig {
            position: Some(WebViewPosition::Custom),
            ..Default::default()
        };
        let result = service.set_web_view_config(config).await;

        assert!(matches!(result, Err(ConsentryError::MissingCustomRect)));
        assert_eq!(sdk.call_count(), 0);
    }

    #[tokio::test]
    async fn att_status_is_validated_before_forwarding() {
        let sdk = Arc::new(RecordingSdk::default());
        let service = service_with(sdk.clone());

        assert!(matches!(
            service.set_att_status(4).await,
            Err(ConsentryError::InvalidAttStatus(4))
        ));
        assert!(matches!(
            service.set_att_status(-1).await,
            Err(ConsentryError::InvalidAttStatus(-1))
        ));
        assert_eq!(sdk.call_count(), 0);

        service.set_att_status(3).await.unwrap();
        assert_eq!(sdk.call_count(), 1);
    }

    #[tokio::test]
    async fn export_import_round_trip_leaves_the_string_untouched() {
        let sdk = Arc::new(RecordingSdk::default());
        let service = service_with(sdk.clone());

        let exported = service.export_cmp_info().await.unwrap();
        assert!(service.import_cmp_info(&exported).await.unwrap());

        let imported = sdk.imported.lock().unwrap().clone().unwrap();
        assert_eq!(imported, exported);
    }

    #[tokio::test]
    async fn action_calls_pass_through() {
        let sdk = Arc::new(RecordingSdk::default());
        let service = service_with(sdk.clone());

        let vendors = vec!["s2789".to_owned()];
        assert!(service.accept_vendors(&vendors).await.unwrap());
        assert!(service.reject_vendors(&vendors).await.unwrap());

        let purposes = vec!["c51".to_owned(), "c52".to_owned()];
        assert!(service.accept_purposes(&purposes, true).await.unwrap());
        assert!(service.reject_purposes(&purposes, false).await.unwrap());

        assert!(service.accept_all().await.unwrap());
        assert!(service.reject_all().await.unwrap());

        assert_eq!(
            *sdk.calls.lock().unwrap(),
            vec![
                "accept_vendors",
                "reject_vendors",
                "accept_purposes",
                "reject_purposes",
                "accept_all",
                "reject_all",
            ]
        );
    }

    #[tokio::test]
    async fn status_reads_pass_through() {
        let sdk = Arc::new(RecordingSdk::default());
        let service = service_with(sdk.clone());

        assert!(service.is_consent_required().await.unwrap());
        assert_eq!(
            service.status_for_purpose("c51").await.unwrap(),
            "granted"
        );
        assert_eq!(service.status_for_vendor("s2789").await.unwrap(), "denied");

        let status = service.user_status().await.unwrap();
        assert_eq!(status.regulation, Regulation::Gdpr);

        let gcm = service.google_consent_mode_status().await.unwrap();
        assert_eq!(gcm.analytics_storage, ConsentStatus::Granted);
    }
}
