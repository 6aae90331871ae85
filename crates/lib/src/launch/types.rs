//! Types for planning and running a CMake build.
//!
//! This module defines the validated launcher arguments, the two build
//! stages, and the errors that can occur while launching them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Target architecture. Must match the architecture of the host machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arch {
  #[serde(rename = "x64")]
  X64,
  #[serde(rename = "ARM64")]
  Arm64,
}

impl Arch {
  pub const ALL: [Arch; 2] = [Arch::X64, Arch::Arm64];

  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::X64 => "x64",
      Self::Arm64 => "ARM64",
    }
  }
}

/// CMake build type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuildType {
  Debug,
  Release,
  RelWithDebInfo,
  MinSizeRel,
}

impl BuildType {
  pub const ALL: [BuildType; 4] = [
    BuildType::Debug,
    BuildType::Release,
    BuildType::RelWithDebInfo,
    BuildType::MinSizeRel,
  ];

  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
      Self::RelWithDebInfo => "RelWithDebInfo",
      Self::MinSizeRel => "MinSizeRel",
    }
  }
}

/// An argument value outside its allow-list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
  #[error("invalid architecture '{0}' (expected one of: x64, ARM64)")]
  Arch(String),

  #[error("invalid build type '{0}' (expected one of: Debug, Release, RelWithDebInfo, MinSizeRel)")]
  BuildType(String),
}

impl FromStr for Arch {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|arch| arch.as_str() == s)
      .ok_or_else(|| ParseError::Arch(s.to_string()))
  }
}

impl FromStr for BuildType {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|ty| ty.as_str() == s)
      .ok_or_else(|| ParseError::BuildType(s.to_string()))
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// One of the two CMake invocations, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
  Generate,
  Build,
}

impl Stage {
  pub const ORDER: [Stage; 2] = [Stage::Generate, Stage::Build];
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Stage::Generate => write!(f, "Generate"),
      Stage::Build => write!(f, "Build"),
    }
  }
}

/// Errors that can occur while running the build stages.
#[derive(Debug, Error)]
pub enum LaunchError {
  /// The host shell could not be started.
  #[error("failed to spawn shell for {stage} command: {cmd}")]
  Spawn {
    stage: Stage,
    cmd: String,
    #[source]
    source: std::io::Error,
  },

  /// A stage command exited unsuccessfully.
  #[error("CMake ({stage}) failed with exit code {code:?}")]
  StageFailed { stage: Stage, code: Option<i32> },
}

impl LaunchError {
  /// Process exit code the launcher should report for this error.
  ///
  /// Stage failures forward the command's own code; everything else is 1.
  pub fn exit_code(&self) -> u8 {
    match self {
      LaunchError::StageFailed { code: Some(code), .. } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
      _ => 1,
    }
  }
}

/// Outcome of one executed stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
  pub stage: Stage,
  pub success: bool,
  pub code: Option<i32>,
}
