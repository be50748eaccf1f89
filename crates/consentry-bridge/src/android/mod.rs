// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android screen reads via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Screen dimensions come from the Activity's
// DisplayMetrics; safe-area insets from the decor view's root WindowInsets.
// Pixel values are converted to logical points through the display density.
//
// The insets read should happen after the decor view is attached to a
// window; before that `getRootWindowInsets` returns null and the insets
// are reported as zero.

#![cfg(target_os = "android")]

use jni::objects::JObject;
use jni::JNIEnv;

use consentry_core::error::{ConsentryError, Result};
use consentry_core::webview::{EdgeInsets, PlatformCapabilities, ScreenMetrics};

use crate::traits::NativeScreen;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Obtain a [`JNIEnv`] handle from the global Android context.
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// set by `android_main` or `ANativeActivity_onCreate`, then attaches the
/// current thread if it is not already attached.
fn jni_env() -> Result<JNIEnv<'static>> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| ConsentryError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    vm.attach_current_thread()
        .map_err(|e| ConsentryError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// Obtain the current Android `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(ConsentryError::Bridge(
            "Android context is null — native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `ConsentryError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> ConsentryError {
    ConsentryError::Bridge(format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// AndroidScreen
// ---------------------------------------------------------------------------

/// Android implementation of the screen seam.
///
/// All methods go through JNI to call the Android SDK. The struct is
/// zero-sized; all state lives on the Java side.
pub struct AndroidScreen;

impl AndroidScreen {
    /// Create a new Android screen reader.
    ///
    /// This does **not** touch JNI — the first JNI call happens lazily when
    /// a trait method is invoked.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for AndroidScreen {
    /// Read screen dimensions and safe-area insets in logical points.
    fn screen_metrics(&self) -> Result<ScreenMetrics> {
        let mut env = jni_env()?;
        let activity = activity()?;

        // -- DisplayMetrics: pixel dimensions and density -----------------------
        let resources: JObject = env
            .call_method(
                &activity,
                "getResources",
                "()Landroid/content/res/Resources;",
                &[],
            )
            .map_err(|e| jni_err("getResources", e))?
            .l()
            .map_err(|e| jni_err("getResources->l", e))?;

        let metrics: JObject = env
            .call_method(
                &resources,
                "getDisplayMetrics",
                "()Landroid/util/DisplayMetrics;",
                &[],
            )
            .map_err(|e| jni_err("getDisplayMetrics", e))?
            .l()
            .map_err(|e| jni_err("getDisplayMetrics->l", e))?;

        let width_px = env
            .get_field(&metrics, "widthPixels", "I")
            .map_err(|e| jni_err("widthPixels", e))?
            .i()
            .map_err(|e| jni_err("widthPixels->i", e))?;
        let height_px = env
            .get_field(&metrics, "heightPixels", "I")
            .map_err(|e| jni_err("heightPixels", e))?
            .i()
            .map_err(|e| jni_err("heightPixels->i", e))?;
        let density = env
            .get_field(&metrics, "density", "F")
            .map_err(|e| jni_err("density", e))?
            .f()
            .map_err(|e| jni_err("density->f", e))? as f64;

        if density <= 0.0 {
            return Err(ConsentryError::Bridge(
                "DisplayMetrics reported a non-positive density".into(),
            ));
        }

        // -- WindowInsets: safe-area in pixels ----------------------------------
        let window: JObject = env
            .call_method(&activity, "getWindow", "()Landroid/view/Window;", &[])
            .map_err(|e| jni_err("getWindow", e))?
            .l()
            .map_err(|e| jni_err("getWindow->l", e))?;

        let decor: JObject = env
            .call_method(&window, "getDecorView", "()Landroid/view/View;", &[])
            .map_err(|e| jni_err("getDecorView", e))?
            .l()
            .map_err(|e| jni_err("getDecorView->l", e))?;

        let root_insets: JObject = env
            .call_method(
                &decor,
                "getRootWindowInsets",
                "()Landroid/view/WindowInsets;",
                &[],
            )
            .map_err(|e| jni_err("getRootWindowInsets", e))?
            .l()
            .map_err(|e| jni_err("getRootWindowInsets->l", e))?;

        // Null before the decor view is attached to a window.
        let insets = if root_insets.is_null() {
            tracing::warn!("Android: root window insets unavailable; reporting zero safe area");
            EdgeInsets::default()
        } else {
            let mut inset = |name: &str| -> Result<f64> {
                let px = env
                    .call_method(&root_insets, name, "()I", &[])
                    .map_err(|e| jni_err(name, e))?
                    .i()
                    .map_err(|e| jni_err(name, e))?;
                Ok(f64::from(px) / density)
            };
            EdgeInsets {
                top: inset("getSystemWindowInsetTop")?,
                bottom: inset("getSystemWindowInsetBottom")?,
                left: inset("getSystemWindowInsetLeft")?,
                right: inset("getSystemWindowInsetRight")?,
            }
        };

        Ok(ScreenMetrics {
            width: f64::from(width_px) / density,
            height: f64::from(height_px) / density,
            insets,
        })
    }

    fn capabilities(&self) -> PlatformCapabilities {
        // No UIVisualEffectView equivalent: blur requests fall back to
        // dimmed at render time.
        PlatformCapabilities {
            supports_custom_rect: true,
            supports_blur: false,
            supports_background_styles: true,
        }
    }

    fn platform_name(&self) -> &str {
        "Android"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify the seam reports the correct platform name.
    #[test]
    fn platform_name() {
        let screen = AndroidScreen::new();
        assert_eq!(screen.platform_name(), "Android");
        assert!(!screen.capabilities().supports_blur);
    }

    // Metric reads require a running ART VM and a hosting Activity. They
    // are exercised in the instrumented Android test target rather than
    // via `cargo test`.
}
