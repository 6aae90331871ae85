//! Shared test helpers for CLI integration tests.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get a Command for the engine-build binary, isolated from launcher environment overrides.
pub fn build_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("engine-build");
  cmd.env_remove("ENGINE_BUILD_CMAKE").env_remove("ENGINE_BUILD_GENERATOR");
  cmd
}

/// Isolated project directory with a fake `cmake` executable.
///
/// The fake appends its arguments, one invocation per line, to `calls.log`
/// and exits with `fail_code` when its first argument equals `fail_on`.
pub struct FakeCmake {
  pub temp: TempDir,
}

impl FakeCmake {
  pub fn new() -> Self {
    Self::failing_on("never", 0)
  }

  pub fn failing_on(fail_on: &str, fail_code: i32) -> Self {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("cmake");
    let log = temp.path().join("calls.log");
    std::fs::write(
      &script,
      format!(
        "#!/bin/sh\necho \"$*\" >> \"{}\"\nif [ \"$1\" = \"{}\" ]; then exit {}; fi\nexit 0\n",
        log.display(),
        fail_on,
        fail_code
      ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    Self { temp }
  }

  /// Path to the fake executable.
  pub fn program(&self) -> PathBuf {
    self.temp.path().join("cmake")
  }

  /// Recorded invocations, oldest first.
  pub fn calls(&self) -> Vec<String> {
    std::fs::read_to_string(self.temp.path().join("calls.log"))
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Command running the launcher inside the project directory with this fake.
  pub fn launcher(&self) -> Command {
    let mut cmd = build_cmd();
    cmd.current_dir(self.temp.path()).arg("--cmake").arg(self.program());
    cmd
  }
}
