//! Platform identity.
//!
//! Identifiers follow the host convention used by hybrid app shells:
//! `"ios"`, `"android"` and `"web"`, extended with the desktop targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The platform the application is running on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Platform {
    /// Apple iOS / iPadOS.
    Ios,
    /// Android.
    Android,
    /// Apple macOS.
    Macos,
    /// Microsoft Windows.
    Windows,
    /// Linux desktops.
    Linux,
    /// A browser build.
    Web,
    /// Any identifier not listed above, kept verbatim.
    Other(String),
}

impl Platform {
    /// Platform compiled into this binary.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(target_os = "ios")]
        {
            Self::Ios
        }
        #[cfg(target_os = "android")]
        {
            Self::Android
        }
        #[cfg(target_os = "macos")]
        {
            Self::Macos
        }
        #[cfg(target_os = "windows")]
        {
            Self::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Self::Linux
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::Web
        }
        #[cfg(not(any(
            target_os = "ios",
            target_os = "android",
            target_os = "macos",
            target_os = "windows",
            target_os = "linux",
            target_arch = "wasm32"
        )))]
        {
            Self::Other(std::env::consts::OS.to_owned())
        }
    }

    /// Parses an identifier; never fails, unknown values become [`Platform::Other`].
    ///
    /// Matching is exact: `"iOS"` or `" ios"` are other platforms, kept verbatim.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "ios" => Self::Ios,
            "android" => Self::Android,
            "macos" => Self::Macos,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "web" => Self::Web,
            _ => Self::Other(identifier.to_owned()),
        }
    }

    /// The identifier string, e.g. `"ios"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Macos => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Web => "web",
            Self::Other(identifier) => identifier,
        }
    }

    /// Whether this is a native target rather than a browser.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        !matches!(self, Self::Web)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_identifier(s))
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        Self::from_identifier(&value)
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_owned()
    }
}

/// Source of the current platform identifier.
pub trait PlatformIdentity: Send + Sync {
    /// Returns the platform the app is running on.
    fn platform(&self) -> Platform;
}

/// Reports the compile-time target.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformIdentity for HostPlatform {
    fn platform(&self) -> Platform {
        Platform::current()
    }
}

/// Always reports the same platform, regardless of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform(pub Platform);

impl PlatformIdentity for FixedPlatform {
    fn platform(&self) -> Platform {
        self.0.clone()
    }
}

/// Get the current platform identifier.
#[must_use]
pub fn get_platform() -> Platform {
    Platform::current()
}
