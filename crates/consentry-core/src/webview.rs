// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Declarative WebView surface configuration and its normalization.
//
// The scripting layer hands over a partially-populated `WebViewConfig`.
// Normalization fills platform defaults, resolves colors, and rejects
// caller errors synchronously — before anything crosses the native seam.
// Platform-capability gaps are not errors: they log an advisory and the
// native layer applies the documented fallback at render time.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{ConsentryError, Result};

/// Where the consent layer is placed on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebViewPosition {
    #[default]
    FullScreen,
    HalfScreenTop,
    HalfScreenBottom,
    /// Caller-supplied rectangle; requires [`WebViewConfig::custom_rect`].
    Custom,
}

/// Blur material used by [`WebViewBackgroundStyle::Blur`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlurStyle {
    #[default]
    Dark,
    Light,
    ExtraLight,
}

/// Logical-coordinate rectangle, pre-safe-area adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WebViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Safe-area insets reported by the platform, in logical points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Screen dimensions plus safe-area insets, as read by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub width: f64,
    pub height: f64,
    pub insets: EdgeInsets,
}

/// What the target platform can honour at render time.
///
/// Plain data so the normalizer's advisory rules are testable without a
/// native platform behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub supports_custom_rect: bool,
    pub supports_blur: bool,
    pub supports_background_styles: bool,
}

impl PlatformCapabilities {
    /// Everything supported (iOS).
    pub const ALL: Self = Self {
        supports_custom_rect: true,
        supports_blur: true,
        supports_background_styles: true,
    };

    /// Nothing supported (desktop stub).
    pub const NONE: Self = Self {
        supports_custom_rect: false,
        supports_blur: false,
        supports_background_styles: false,
    };
}

/// Caller-facing background style, tagged union.
///
/// The factory constructors fill defaults only — validation (missing color,
/// unresolvable color) happens during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebViewBackgroundStyle {
    Dimmed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
    Color {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    Blur {
        #[serde(default)]
        style: BlurStyle,
    },
    None,
}

impl WebViewBackgroundStyle {
    /// Dimmed backdrop; color and opacity resolved later (black, 0.5).
    pub fn dimmed() -> Self {
        Self::Dimmed {
            color: None,
            opacity: None,
        }
    }

    /// Dimmed backdrop with explicit color and opacity.
    pub fn dimmed_with(color: impl Into<String>, opacity: f64) -> Self {
        Self::Dimmed {
            color: Some(color.into()),
            opacity: Some(opacity),
        }
    }

    /// Solid color backdrop. The color is required semantically; a missing
    /// one is rejected by the normalizer, not here.
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Color {
            color: Some(color.into()),
        }
    }

    /// Blur backdrop, defaulting to the dark material.
    pub fn blur(style: Option<BlurStyle>) -> Self {
        Self::Blur {
            style: style.unwrap_or_default(),
        }
    }

    /// No backdrop.
    pub fn none() -> Self {
        Self::None
    }
}

/// Partially-populated WebView configuration, as handed over by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebViewConfig {
    pub position: Option<WebViewPosition>,
    pub custom_rect: Option<WebViewRect>,
    pub corner_radius: Option<f64>,
    pub respects_safe_area: Option<bool>,
    pub allows_orientation_changes: Option<bool>,
    pub background_style: Option<WebViewBackgroundStyle>,
}

/// Background style after normalization: colors resolved, defaults filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResolvedBackgroundStyle {
    Dimmed { color: Rgba, opacity: f64 },
    Color { color: Rgba },
    Blur { style: BlurStyle },
    None,
}

/// Fully-populated WebView configuration, ready to cross the native seam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedWebViewConfig {
    pub position: WebViewPosition,
    /// Present only for [`WebViewPosition::Custom`]. The platform layer
    /// clears it (and renders full-screen) when custom rects are
    /// unsupported there.
    pub custom_rect: Option<WebViewRect>,
    pub corner_radius: f64,
    pub respects_safe_area: bool,
    pub allows_orientation_changes: bool,
    pub background_style: ResolvedBackgroundStyle,
}

impl WebViewConfig {
    /// Validate and fill this configuration against the given platform.
    ///
    /// Caller errors (missing custom rect, missing or unresolvable color)
    /// surface here, synchronously. Capability gaps only log an advisory:
    /// the platform layer substitutes the documented fallback at render
    /// time (full-screen for custom rects, dimmed for blur).
    pub fn normalize(self, capabilities: &PlatformCapabilities) -> Result<ResolvedWebViewConfig> {
        let position = self.position.unwrap_or_default();

        let custom_rect = match position {
            WebViewPosition::Custom => {
                let rect = self.custom_rect.ok_or(ConsentryError::MissingCustomRect)?;
                if !capabilities.supports_custom_rect {
                    tracing::warn!(
                        "custom rect is not supported on this platform; the consent layer renders full-screen"
                    );
                }
                Some(rect)
            }
            _ => None,
        };

        let requested = self
            .background_style
            .unwrap_or_else(WebViewBackgroundStyle::dimmed);
        let background_style = match requested {
            WebViewBackgroundStyle::Dimmed { color, opacity } => ResolvedBackgroundStyle::Dimmed {
                color: Rgba::resolve(color.as_deref().unwrap_or("black"))?,
                opacity: opacity.unwrap_or(0.5),
            },
            WebViewBackgroundStyle::Color { color } => {
                let color = color.ok_or(ConsentryError::MissingColor)?;
                ResolvedBackgroundStyle::Color {
                    color: Rgba::resolve(&color)?,
                }
            }
            WebViewBackgroundStyle::Blur { style } => {
                if !capabilities.supports_blur {
                    tracing::warn!(
                        ?style,
                        "blur is not supported on this platform; the consent layer falls back to dimmed"
                    );
                }
                ResolvedBackgroundStyle::Blur { style }
            }
            WebViewBackgroundStyle::None => ResolvedBackgroundStyle::None,
        };

        if !capabilities.supports_background_styles {
            tracing::warn!(
                "background styles are not supported on this platform; dimmed is used regardless"
            );
        }

        Ok(ResolvedWebViewConfig {
            position,
            custom_rect,
            corner_radius: self.corner_radius.unwrap_or(5.0),
            respects_safe_area: self.respects_safe_area.unwrap_or(true),
            allows_orientation_changes: self.allows_orientation_changes.unwrap_or(true),
            background_style,
        })
    }
}
