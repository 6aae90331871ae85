//! Implementation of the `Build` command.
//!
//! Resolves the host OS and build directory, prints every resolved value,
//! then runs CMake generate followed by CMake build through the host shell.

use anyhow::Result;
use tracing::debug;

use engine_build_lib::launch::{Arch, BuildPlan, BuildType, ExecuteOptions, PlanOptions, execute};
use engine_build_lib::platform::HostOs;

use crate::output::{OutputFormat, print_json, print_notice, print_success, print_value, print_warning};

/// Everything the command needs from the command line.
#[derive(Debug, Clone)]
pub struct BuildArgs {
  pub arch: Arch,
  pub build_type: BuildType,
  pub plan: PlanOptions,
  pub keep_going: bool,
  pub dry_run: bool,
  pub format: OutputFormat,
}

/// Execute the build command.
///
/// Fails with [`engine_build_lib::platform::PlatformError`] before anything is
/// printed when the host OS is unsupported, and with
/// [`engine_build_lib::launch::LaunchError`] when a stage cannot be spawned or
/// fails without `--keep-going`.
pub fn cmd_build(args: &BuildArgs) -> Result<()> {
  let host = HostOs::detect()?;
  let plan = BuildPlan::new(host, args.arch, args.build_type, &args.plan);
  debug!(?plan, "resolved build plan");

  if args.format.is_json() {
    print_json(&plan)?;
  } else {
    print_plan(&plan);
  }

  if args.dry_run {
    if !args.format.is_json() {
      print_success("Dry run, no commands executed");
    }
    return Ok(());
  }

  let options = ExecuteOptions {
    keep_going: args.keep_going,
  };
  let results = execute(&plan, &options, |stage, _| {
    print_notice(&format!("Calling CMake ({})...", stage));
  })?;

  for failed in results.iter().filter(|r| !r.success) {
    print_warning(&format!(
      "CMake ({}) failed with exit code {:?}, ignored due to --keep-going",
      failed.stage, failed.code
    ));
  }

  Ok(())
}

fn print_plan(plan: &BuildPlan) {
  print_value("Host Operating System", plan.host);
  print_value("Architecture", plan.arch);
  print_value("Build Type", plan.build_type);
  print_value("CMake Build Directory", plan.build_dir.display());
  print_value("CMake Generate Command", &plan.generate);
  print_value("CMake Build Command", &plan.build);
}
