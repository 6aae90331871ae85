//! Host shell invocation.
//!
//! Command lines are handed to the platform shell verbatim, so quoting in
//! the rendered CMake invocations is interpreted by that shell.

use std::process::{Command, ExitStatus};

use tracing::debug;

/// Get the shell command and arguments for the current platform.
///
/// Returns a tuple of (shell_command, shell_arguments); the command line
/// to run follows the arguments.
pub fn get_shell() -> (&'static str, &'static [&'static str]) {
  #[cfg(unix)]
  {
    ("/bin/sh", &["-c"])
  }

  #[cfg(windows)]
  {
    ("cmd.exe", &["/S", "/C"])
  }
}

/// Raw argument string for `cmd.exe`.
///
/// With `/S`, cmd strips exactly the outer pair of quotes and runs the rest
/// unchanged, so quotes inside `line` reach the tool as written.
#[cfg_attr(not(windows), allow(dead_code))]
fn cmd_exe_arguments(line: &str) -> String {
  format!("/S /C \"{}\"", line)
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
  let (shell, args) = get_shell();
  let mut command = Command::new(shell);
  command.args(args).arg(line);
  command
}

// `Command::arg` would apply MSVC escaping and turn every `"` into `\"`,
// which cmd.exe does not understand.
#[cfg(windows)]
fn shell_command(line: &str) -> Command {
  use std::os::windows::process::CommandExt;

  let (shell, _) = get_shell();
  let mut command = Command::new(shell);
  command.raw_arg(cmd_exe_arguments(line));
  command
}

/// Run a command line through the host shell and wait for it to exit.
///
/// Standard streams are inherited so tool output reaches the terminal
/// unchanged.
pub fn run_shell(cmd: &str) -> std::io::Result<ExitStatus> {
  let (shell, _) = get_shell();
  debug!(shell = %shell, cmd = %cmd, "spawning process");

  let status = shell_command(cmd).status()?;

  debug!(code = ?status.code(), "process exited");
  Ok(status)
}
