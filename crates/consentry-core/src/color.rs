// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Caller-supplied color strings resolved to a platform-neutral RGBA value.
//
// The scripting layer hands colors over as CSS-style names or hex strings.
// Resolution happens once, during WebView config normalization; the native
// layers convert `Rgba` to UIColor / android.graphics.Color at render time.

use serde::{Deserialize, Serialize};

use crate::error::{ConsentryError, Result};

/// A resolved color, 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Resolve a caller-supplied color string.
    ///
    /// Accepts the named colors the consent layer documents (the same set the
    /// native SDKs resolve through their color lookups) and `#RGB`,
    /// `#RRGGBB`, `#RRGGBBAA` hex notation. Anything else is a caller error.
    pub fn resolve(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::from_hex(hex)
                .ok_or_else(|| ConsentryError::UnresolvableColor(input.to_owned()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::new(255, 0, 0, 255)),
            "green" => Ok(Self::new(0, 255, 0, 255)),
            "blue" => Ok(Self::new(0, 0, 255, 255)),
            "yellow" => Ok(Self::new(255, 255, 0, 255)),
            "gray" | "grey" => Ok(Self::new(128, 128, 128, 255)),
            "orange" => Ok(Self::new(255, 165, 0, 255)),
            "purple" => Ok(Self::new(128, 0, 128, 255)),
            "clear" | "transparent" => Ok(Self::TRANSPARENT),
            _ => Err(ConsentryError::UnresolvableColor(input.to_owned())),
        }
    }

    fn from_hex(hex: &str) -> Option<Self> {
        match hex.len() {
            // #RGB — each nibble doubled
            3 => {
                let value = u16::from_str_radix(hex, 16).ok()?;
                let r = ((value >> 8) & 0xf) as u8;
                let g = ((value >> 4) & 0xf) as u8;
                let b = (value & 0xf) as u8;
                Some(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, 255))
            }
            6 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::new(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                    255,
                ))
            }
            8 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::new(
                    (value >> 24) as u8,
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            _ => None,
        }
    }
}
