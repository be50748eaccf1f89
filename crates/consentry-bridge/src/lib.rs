// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Consentry — Native platform seam.
//
// Defines the traits the consent service is composed from: the async call
// surface into the vendor CMP SDK and the synchronous screen/capability
// reads, plus the pure geometry resolution shared by all platforms.

pub mod geometry;
pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod stub;

/// Retrieves the screen reader for the target operating system.
pub fn platform_screen() -> Box<dyn traits::NativeScreen> {
    #[cfg(target_os = "ios")]
    {
        Box::new(ios::IosScreen::new())
    }
    #[cfg(target_os = "android")]
    {
        Box::new(android::AndroidScreen::new())
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // Desktop/CI: no native consent surface; every read reports
        // unavailability instead of inventing metrics.
        Box::new(stub::StubScreen)
    }
}
