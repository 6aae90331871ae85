//! Planning and running the CMake generate and build stages.
//!
//! Stages run strictly one after another: the build stage is not spawned
//! until the generate stage has exited.

pub mod plan;
pub mod shell;
pub mod types;

use tracing::{info, warn};

pub use plan::{BuildPlan, CmakeInvocation, PlanOptions, build_dir};
pub use types::{Arch, BuildType, LaunchError, ParseError, Stage, StageResult};

/// How external command failures are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
  /// Run every stage and report success even when a command fails.
  pub keep_going: bool,
}

/// Run the stages of `plan` in order.
///
/// `on_stage` is called right before each stage's command is spawned.
/// Without `keep_going`, the first failing stage stops execution and is
/// returned as [`LaunchError::StageFailed`]; with it, failures are logged and
/// recorded in the returned results.
pub fn execute<F>(plan: &BuildPlan, options: &ExecuteOptions, mut on_stage: F) -> Result<Vec<StageResult>, LaunchError>
where
  F: FnMut(Stage, &CmakeInvocation),
{
  let mut results = Vec::with_capacity(Stage::ORDER.len());

  for stage in Stage::ORDER {
    let cmd = plan.command(stage);
    on_stage(stage, cmd);
    info!(stage = %stage, cmd = %cmd, "running cmake");

    let status = shell::run_shell(cmd.as_str()).map_err(|source| LaunchError::Spawn {
      stage,
      cmd: cmd.to_string(),
      source,
    })?;

    let result = StageResult {
      stage,
      success: status.success(),
      code: status.code(),
    };

    if !result.success {
      if !options.keep_going {
        return Err(LaunchError::StageFailed {
          stage,
          code: result.code,
        });
      }
      warn!(stage = %stage, code = ?result.code, "cmake failed, continuing");
    }

    results.push(result);
  }

  Ok(results)
}
