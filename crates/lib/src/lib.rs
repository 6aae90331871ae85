//! engine-build-lib: Core types and logic for the engine build launcher
//!
//! This crate provides everything the `Build` command needs short of argument
//! parsing:
//! - `HostOs`: detection and validation of the host operating system
//! - `Arch` / `BuildType`: the validated positional arguments
//! - `BuildPlan`: the build directory plus the CMake generate and build invocations
//! - `execute`: running the invocations in order through the host shell

pub mod launch;
pub mod platform;
