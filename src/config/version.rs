//! Shopify API version selection.
//!
//! Both endpoints embed the version in their path (`/admin/api/{version}` and
//! `/api/{version}`), so the version is part of the search configuration.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify API version.
///
/// Shopify releases new API versions quarterly (January, April, July, October).
/// Versions this tool has been exercised against have their own variants; any
/// other well-formed `YYYY-MM` release is accepted as [`Custom`](Self::Custom).
///
/// # Example
///
/// ```rust
/// use shopify_price_search::ApiVersion;
///
/// let version: ApiVersion = "2024-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::default());
/// assert_eq!(version.to_string(), "2024-07");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-07 (July 2024)
    #[default]
    V2024_07,
    /// API version 2024-10 (October 2024)
    V2024_10,
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for other release months.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        // Quarterly releases only
        matches!(month, "01" | "04" | "07" | "10")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
