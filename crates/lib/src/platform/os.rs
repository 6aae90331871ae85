use std::fmt;

use serde::Serialize;

use super::PlatformError;

/// Host operating systems the build launcher supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HostOs {
  Windows,
  Linux,
  Darwin,
}

impl HostOs {
  pub const ALL: [HostOs; 3] = [HostOs::Windows, HostOs::Linux, HostOs::Darwin];

  /// Detect the current operating system at runtime
  pub fn detect() -> Result<Self, PlatformError> {
    Self::from_system_name(&system_name(std::env::consts::OS))
  }

  /// Validate a system name such as `"Linux"` against the supported hosts.
  ///
  /// Matching is exact; `"linux"` is rejected.
  pub fn from_system_name(name: &str) -> Result<Self, PlatformError> {
    Self::ALL
      .into_iter()
      .find(|os| os.as_str() == name)
      .ok_or_else(|| PlatformError::UnsupportedHost(name.to_string()))
  }

  /// Returns the system name, which is also the build directory segment
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "Windows",
      Self::Linux => "Linux",
      Self::Darwin => "Darwin",
    }
  }
}

impl fmt::Display for HostOs {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Map a Rust target OS identifier to its kernel-style system name.
///
/// Identifiers without a known mapping are returned unchanged so that
/// validation can report exactly what was detected.
pub fn system_name(target_os: &str) -> String {
  match target_os {
    "linux" => "Linux".to_string(),
    "macos" => "Darwin".to_string(),
    "windows" => "Windows".to_string(),
    other => other.to_string(),
  }
}
