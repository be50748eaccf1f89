// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS screen reads via objc2.
//
// Requires compilation with the iOS SDK (Xcode). UIKit geometry may only be
// read on the main thread. When called off-main, `screen_metrics` enqueues
// the read on the main dispatch queue and blocks on an mpsc rendezvous
// until the main run loop services it. Calling it from within a main-thread
// callback that is itself blocking would never complete — callers must not
// invoke it from UI-thread callbacks already in progress.

#![cfg(target_os = "ios")]

use std::ffi::c_void;
use std::sync::mpsc;

use objc2::rc::Retained;
use objc2::{MainThreadMarker, msg_send};
use objc2_ui_kit::{UIApplication, UIEdgeInsets, UIScreen, UIWindow};

use consentry_core::error::{ConsentryError, Result};
use consentry_core::webview::{EdgeInsets, PlatformCapabilities, ScreenMetrics};

use crate::traits::NativeScreen;

// ---------------------------------------------------------------------------
// libdispatch FFI
// ---------------------------------------------------------------------------
// Grand Central Dispatch is a C API. We only need "run this function on the
// main queue": dispatch_async_f with the main-queue global.

#[repr(C)]
struct DispatchQueue {
    _priv: [u8; 0],
}

extern "C" {
    /// The serial queue bound to the main thread.
    static _dispatch_main_q: DispatchQueue;

    fn dispatch_async_f(
        queue: *const DispatchQueue,
        context: *mut c_void,
        work: extern "C" fn(*mut c_void),
    );
}

// ---------------------------------------------------------------------------
// Main-thread read
// ---------------------------------------------------------------------------

/// Read screen bounds and safe-area insets. Main thread only.
fn read_metrics_on_main(mtm: MainThreadMarker) -> Result<ScreenMetrics> {
    let screen = UIScreen::mainScreen(mtm);
    let bounds = screen.bounds();

    // Safe-area insets live on the key window. Before a window exists
    // (early app startup) there is no safe area to respect yet.
    let app = UIApplication::sharedApplication(mtm);
    // SAFETY: msg_send! to the well-known keyWindow property. MainThreadMarker
    // guarantees main-thread execution.
    let window: Option<Retained<UIWindow>> = unsafe { msg_send![&app, keyWindow] };

    let insets = match window {
        Some(window) => {
            // SAFETY: safeAreaInsets is a documented UIView property returning
            // a UIEdgeInsets struct by value.
            let raw: UIEdgeInsets = unsafe { msg_send![&window, safeAreaInsets] };
            EdgeInsets {
                top: raw.top,
                bottom: raw.bottom,
                left: raw.left,
                right: raw.right,
            }
        }
        None => EdgeInsets::default(),
    };

    Ok(ScreenMetrics {
        width: bounds.size.width,
        height: bounds.size.height,
        insets,
    })
}

/// Trampoline executed on the main queue by `dispatch_async_f`.
extern "C" fn read_metrics_trampoline(context: *mut c_void) {
    // SAFETY: `context` is the Box<Sender> leaked in `screen_metrics`,
    // delivered to this function exactly once by libdispatch.
    let tx =
        unsafe { Box::from_raw(context as *mut mpsc::Sender<Result<ScreenMetrics>>) };

    let result = match MainThreadMarker::new() {
        Some(mtm) => read_metrics_on_main(mtm),
        // Unreachable on the main queue, but never panic in a dispatch callback.
        None => Err(ConsentryError::Bridge(
            "main-queue work item ran off the main thread".into(),
        )),
    };

    // The receiver may have given up; nothing to do then.
    let _ = tx.send(result);
}

// ---------------------------------------------------------------------------
// IosScreen
// ---------------------------------------------------------------------------

/// Concrete iOS screen reader.
pub struct IosScreen;

impl IosScreen {
    /// Create a new iOS screen reader.
    pub fn new() -> Self {
        Self
    }
}

impl Default for IosScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for IosScreen {
    /// Read screen dimensions and safe-area insets in logical points.
    ///
    /// On the main thread the read happens inline. Off-main it is enqueued
    /// on the main dispatch queue and this call blocks until the main run
    /// loop services it — indefinitely if the main thread hangs.
    fn screen_metrics(&self) -> Result<ScreenMetrics> {
        if let Some(mtm) = MainThreadMarker::new() {
            return read_metrics_on_main(mtm);
        }

        tracing::debug!("iOS: hopping to the main queue for screen metrics");

        let (tx, rx) = mpsc::channel::<Result<ScreenMetrics>>();
        let context = Box::into_raw(Box::new(tx)) as *mut c_void;

        // SAFETY: dispatch_async_f enqueues `read_metrics_trampoline` on the
        // main queue with our boxed sender as context. The trampoline reclaims
        // the box; the queue global is valid for the process lifetime.
        unsafe {
            dispatch_async_f(&_dispatch_main_q, context, read_metrics_trampoline);
        }

        rx.recv().map_err(|e| {
            ConsentryError::Bridge(format!("main-thread rendezvous failed: {e}"))
        })?
    }

    fn capabilities(&self) -> PlatformCapabilities {
        // UIKit honours the full surface: blur materials, custom rects,
        // and every background style.
        PlatformCapabilities::ALL
    }

    fn platform_name(&self) -> &str {
        "iOS"
    }
}
