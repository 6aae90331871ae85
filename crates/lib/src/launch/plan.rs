//! Build plan construction.
//!
//! A plan is computed once from the host OS and the two validated arguments
//! and never mutated afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::types::{Arch, BuildType, Stage};
use crate::platform::HostOs;

/// CMake source directory, relative to the working directory.
pub const SOURCE_DIR: &str = ".";

/// Name of the directory collecting all build trees.
pub const BUILD_ROOT: &str = "Build";

/// Knobs that change how the CMake command lines are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOptions {
  /// Program invoked for both stages.
  pub cmake: String,
  /// Optional CMake generator passed with `-G`.
  pub generator: Option<String>,
  /// Optional `--parallel` job count for the build stage.
  pub parallel: Option<u32>,
}

impl Default for PlanOptions {
  fn default() -> Self {
    Self {
      cmake: "cmake".to_string(),
      generator: None,
      parallel: None,
    }
  }
}

/// Returns the build tree for a host/arch/type combination,
/// e.g. `./Build/Linux/x64/Debug`.
pub fn build_dir(os: HostOs, arch: Arch, build_type: BuildType) -> PathBuf {
  Path::new(SOURCE_DIR)
    .join(BUILD_ROOT)
    .join(os.as_str())
    .join(arch.as_str())
    .join(build_type.as_str())
}

/// A single command line handed to the host shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CmakeInvocation(String);

impl CmakeInvocation {
  /// Wrap an already rendered command line.
  pub fn new(line: impl Into<String>) -> Self {
    Self(line.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for CmakeInvocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Everything resolved before the first command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
  pub host: HostOs,
  pub arch: Arch,
  pub build_type: BuildType,
  pub source_dir: PathBuf,
  pub build_dir: PathBuf,
  pub generate: CmakeInvocation,
  pub build: CmakeInvocation,
}

impl BuildPlan {
  pub fn new(host: HostOs, arch: Arch, build_type: BuildType, options: &PlanOptions) -> Self {
    let build_dir = build_dir(host, arch, build_type);
    let program = shell_program(&options.cmake);
    let dir = build_dir.display();

    // CMAKE_BUILD_TYPE serves single-configuration generators, `--config`
    // serves multi-configuration ones.
    let mut generate = format!(
      "{program} -S\"{SOURCE_DIR}\" -B\"{dir}\" -DARCH={arch} -DBUILD_TYPE={build_type} -DCMAKE_BUILD_TYPE={build_type}"
    );
    if let Some(generator) = &options.generator {
      generate.push_str(&format!(" -G\"{generator}\""));
    }

    let mut build = format!("{program} --build \"{dir}\" --config {build_type}");
    if let Some(jobs) = options.parallel {
      build.push_str(&format!(" --parallel {jobs}"));
    }

    Self {
      host,
      arch,
      build_type,
      source_dir: PathBuf::from(SOURCE_DIR),
      build_dir,
      generate: CmakeInvocation(generate),
      build: CmakeInvocation(build),
    }
  }

  /// Command line for a stage.
  pub fn command(&self, stage: Stage) -> &CmakeInvocation {
    match stage {
      Stage::Generate => &self.generate,
      Stage::Build => &self.build,
    }
  }
}

fn shell_program(program: &str) -> String {
  if program.chars().any(char::is_whitespace) {
    format!("\"{}\"", program)
  } else {
    program.to_string()
  }
}
