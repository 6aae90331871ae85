//! Stage ordering and failure handling, observed through a fake CMake.

use predicates::prelude::*;
use serial_test::serial;

use engine_build_lib::launch::{Arch, BuildPlan, BuildType, PlanOptions, build_dir};
use engine_build_lib::platform::HostOs;

use crate::common::FakeCmake;

#[test]
#[serial]
fn generate_runs_before_build() {
  let host = HostOs::detect().unwrap();
  let fake = FakeCmake::new();
  let dir = build_dir(host, Arch::X64, BuildType::RelWithDebInfo);

  let output = fake.launcher().args(["x64", "RelWithDebInfo"]).output().unwrap();
  assert!(output.status.success());

  assert_eq!(
    fake.calls(),
    vec![
      format!(
        "-S. -B{} -DARCH=x64 -DBUILD_TYPE=RelWithDebInfo -DCMAKE_BUILD_TYPE=RelWithDebInfo",
        dir.display()
      ),
      format!("--build {} --config RelWithDebInfo", dir.display()),
    ]
  );

  let options = PlanOptions {
    cmake: fake.program().display().to_string(),
    ..PlanOptions::default()
  };
  let plan = BuildPlan::new(host, Arch::X64, BuildType::RelWithDebInfo, &options);

  let stdout = String::from_utf8(output.stdout).unwrap();
  assert_eq!(
    stdout.lines().collect::<Vec<_>>(),
    vec![
      format!("Host Operating System: \"{}\"", host),
      "Architecture: \"x64\"".to_string(),
      "Build Type: \"RelWithDebInfo\"".to_string(),
      format!("CMake Build Directory: \"{}\"", dir.display()),
      format!("CMake Generate Command: \"{}\"", plan.generate),
      format!("CMake Build Command: \"{}\"", plan.build),
      "Calling CMake (Generate)...".to_string(),
      "Calling CMake (Build)...".to_string(),
    ]
  );
}

#[test]
#[serial]
fn failing_generate_skips_build_and_forwards_code() {
  let fake = FakeCmake::failing_on("-S.", 9);

  fake
    .launcher()
    .args(["ARM64", "Debug"])
    .assert()
    .code(9)
    .stdout(predicate::str::contains("Calling CMake (Generate)..."))
    .stdout(predicate::str::contains("Calling CMake (Build)...").not())
    .stderr(predicate::str::contains("CMake (Generate) failed"));

  assert_eq!(fake.calls().len(), 1);
}

#[test]
#[serial]
fn failing_build_forwards_code() {
  let fake = FakeCmake::failing_on("--build", 3);

  fake.launcher().args(["x64", "Release"]).assert().code(3);

  assert_eq!(fake.calls().len(), 2);
}

#[test]
#[serial]
fn keep_going_ignores_failures() {
  let fake = FakeCmake::failing_on("-S.", 9);

  fake
    .launcher()
    .args(["x64", "MinSizeRel", "--keep-going"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Calling CMake (Build)..."))
    .stderr(predicate::str::contains("ignored due to --keep-going"));

  assert_eq!(fake.calls().len(), 2);
}

#[test]
#[serial]
fn cmake_program_from_environment() {
  let fake = FakeCmake::new();

  crate::common::build_cmd()
    .current_dir(fake.temp.path())
    .env("ENGINE_BUILD_CMAKE", fake.program())
    .args(["x64", "Debug", "-j", "2"])
    .assert()
    .success();

  let calls = fake.calls();
  assert_eq!(calls.len(), 2);
  assert!(calls[1].ends_with("--config Debug --parallel 2"));
}

#[test]
#[serial]
fn dry_run_never_invokes_cmake() {
  let fake = FakeCmake::new();

  fake.launcher().args(["x64", "Debug", "--dry-run"]).assert().success();

  assert!(fake.calls().is_empty());
}

#[test]
#[serial]
fn missing_cmake_reports_shell_exit_code() {
  let fake = FakeCmake::new();

  crate::common::build_cmd()
    .current_dir(fake.temp.path())
    .args(["x64", "Debug", "--cmake"])
    .arg(fake.temp.path().join("no-such-cmake"))
    .assert()
    .code(127);
}
