mod cmd;
mod output;

use std::process::ExitCode;

use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use tracing_subscriber::EnvFilter;

use engine_build_lib::launch::{Arch, BuildType, LaunchError, PlanOptions};
use engine_build_lib::platform::PlatformError;

use crate::cmd::BuildArgs;
use crate::output::{OutputFormat, print_error};

/// Configure and build the engine with CMake
#[derive(Parser, Debug)]
#[command(name = "Build", bin_name = "Build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Target architecture, must match architecture of host machine.
  #[arg(value_name = "Arch", value_parser = arch_parser())]
  arch: Arch,

  /// Build type.
  #[arg(value_name = "BuildType", value_parser = build_type_parser())]
  build_type: BuildType,

  /// CMake program used for both stages
  #[arg(long, value_name = "PROGRAM", env = "ENGINE_BUILD_CMAKE", default_value = "cmake")]
  cmake: String,

  /// CMake generator passed to the generate stage
  #[arg(short = 'G', long, value_name = "NAME", env = "ENGINE_BUILD_GENERATOR")]
  generator: Option<String>,

  /// Maximum number of concurrent build jobs
  #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
  parallel: Option<u32>,

  /// Print the resolved values and commands without running CMake
  #[arg(long)]
  dry_run: bool,

  /// Run every stage even if CMake fails, and exit successfully
  #[arg(long)]
  keep_going: bool,

  /// Output format for the resolved values
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

impl From<Cli> for BuildArgs {
  fn from(cli: Cli) -> Self {
    BuildArgs {
      arch: cli.arch,
      build_type: cli.build_type,
      plan: PlanOptions {
        cmake: cli.cmake,
        generator: cli.generator,
        parallel: cli.parallel,
      },
      keep_going: cli.keep_going,
      dry_run: cli.dry_run,
      format: cli.format,
    }
  }
}

fn arch_parser() -> impl TypedValueParser<Value = Arch> {
  PossibleValuesParser::new(Arch::ALL.map(|arch| arch.as_str())).try_map(|s| s.parse::<Arch>())
}

fn build_type_parser() -> impl TypedValueParser<Value = BuildType> {
  PossibleValuesParser::new(BuildType::ALL.map(|ty| ty.as_str())).try_map(|s| s.parse::<BuildType>())
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  // Logs go to stderr; stdout carries the resolved values and CMake output.
  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cmd::cmd_build(&cli.into()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => ExitCode::from(report(&err)),
  }
}

/// Print an error and pick the process exit code for it.
fn report(err: &anyhow::Error) -> u8 {
  if let Some(platform) = err.downcast_ref::<PlatformError>() {
    print_error(&format!("Error: {}", platform));
    return 1;
  }

  if let Some(launch) = err.downcast_ref::<LaunchError>() {
    print_error(&format!("{:#}", err));
    return launch.exit_code();
  }

  print_error(&format!("{:#}", err));
  1
}
