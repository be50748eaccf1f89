// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screen-frame resolution for the consent layer.
//
// Pure math shared by all platforms: the normalized position plus the
// platform's screen metrics become a concrete frame. Safe-area insets
// shrink the usable region first when the configuration asks for it.

use consentry_core::webview::{
    EdgeInsets, ResolvedWebViewConfig, ScreenMetrics, WebViewPosition, WebViewRect,
};

/// Compute the concrete frame for the consent layer.
///
/// Half-screen positions split the usable height exactly in half, anchored
/// top or bottom. A custom rect is adjusted inward by the safe-area insets
/// on each edge. A custom position whose rect the platform layer cleared
/// (custom rects unsupported there) renders full-screen.
pub fn resolve_frame(config: &ResolvedWebViewConfig, screen: &ScreenMetrics) -> WebViewRect {
    let insets = if config.respects_safe_area {
        screen.insets
    } else {
        EdgeInsets::default()
    };

    let usable_x = insets.left;
    let usable_y = insets.top;
    let usable_width = (screen.width - insets.left - insets.right).max(0.0);
    let usable_height = (screen.height - insets.top - insets.bottom).max(0.0);

    match config.position {
        WebViewPosition::FullScreen => WebViewRect {
            x: usable_x,
            y: usable_y,
            width: usable_width,
            height: usable_height,
        },
        WebViewPosition::HalfScreenTop => WebViewRect {
            x: usable_x,
            y: usable_y,
            width: usable_width,
            height: usable_height / 2.0,
        },
        WebViewPosition::HalfScreenBottom => WebViewRect {
            x: usable_x,
            y: usable_y + usable_height / 2.0,
            width: usable_width,
            height: usable_height / 2.0,
        },
        WebViewPosition::Custom => match config.custom_rect {
            Some(rect) => WebViewRect {
                x: rect.x + insets.left,
                y: rect.y + insets.top,
                width: (rect.width - insets.left - insets.right).max(0.0),
                height: (rect.height - insets.top - insets.bottom).max(0.0),
            },
            None => WebViewRect {
                x: usable_x,
                y: usable_y,
                width: usable_width,
                height: usable_height,
            },
        },
    }
}
