pub mod os;

use thiserror::Error;

/// Errors that can occur while inspecting the host
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
  #[error("Unknown Host Operating System \"{0}\".")]
  UnsupportedHost(String),
}

pub use os::HostOs;
