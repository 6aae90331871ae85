//! Integration tests that run the launcher against a fake CMake.

#![cfg(unix)]

mod common;
mod launch_tests;
