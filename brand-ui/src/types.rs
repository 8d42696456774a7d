// SPDX-License-Identifier: MIT OR Apache-2.0

//! Size presets for the brand mark.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pixel `(width, height)` for each [`LogoSize`], indexed by discriminant.
const SIZE_TABLE: [(u32, u32); 5] = [(32, 32), (40, 40), (56, 56), (72, 72), (96, 96)];

/// Named size tier for the brand mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Sm = 0,
    #[default]
    Md = 1,
    Lg = 2,
    Xl = 3,
    Xxl = 4,
}

impl LogoSize {
    /// All tiers, smallest first.
    pub const ALL: [LogoSize; 5] = [
        LogoSize::Sm,
        LogoSize::Md,
        LogoSize::Lg,
        LogoSize::Xl,
        LogoSize::Xxl,
    ];

    /// Rendered `(width, height)` in CSS pixels.
    pub const fn dimensions(self) -> (u32, u32) {
        SIZE_TABLE[self as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LogoSize::Sm => "sm",
            LogoSize::Md => "md",
            LogoSize::Lg => "lg",
            LogoSize::Xl => "xl",
            LogoSize::Xxl => "xxl",
        }
    }
}

impl fmt::Display for LogoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a size name does not match any [`LogoSize`] tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLogoSizeError {
    #[error("invalid logo size {0:?}, expected one of sm, md, lg, xl, xxl")]
    InvalidArgument(String),
}

impl FromStr for LogoSize {
    type Err = ParseLogoSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LogoSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseLogoSizeError::InvalidArgument(s.to_string()))
    }
}
