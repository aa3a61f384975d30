//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a fake
//! command runner for driving the adapter in-process, and a fake `zypper`
//! executable for driving the `suseconnect` binary.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use suseconnect::core::{Zypper, ZypperConfig};
use suseconnect::error::ConnectError;
use suseconnect::infra::process::{CommandOutput, CommandRunner};
use tempfile::TempDir;

/// Read a file from `tests/fixtures`
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}

/// Command runner replaying canned output and recording every command line
///
/// Unknown command lines succeed with empty output.
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<String>>,
    responses: RefCell<HashMap<String, CommandOutput>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `command_line` with `output`
    pub fn respond(&self, command_line: &str, output: CommandOutput) {
        self.responses
            .borrow_mut()
            .insert(command_line.to_string(), output);
    }

    /// Reply to `command_line` with the content of a fixture file
    pub fn respond_with_fixture(&self, command_line: &str, name: &str) {
        self.respond(command_line, CommandOutput::success(fixture(name)));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, command_line: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == command_line)
            .count()
    }
}

impl CommandRunner for FakeRunner {
    fn capture(&self, command_line: &str) -> Result<CommandOutput, ConnectError> {
        self.calls.borrow_mut().push(command_line.to_string());
        Ok(self
            .responses
            .borrow()
            .get(command_line)
            .cloned()
            .unwrap_or_default())
    }
}

const CREDENTIALS_SUBDIR: &str = "etc/zypp/credentials.d";

/// Temporary filesystem root for one test
pub struct TestRoot {
    /// Temporary directory used as `--root`
    pub dir: TempDir,
}

impl TestRoot {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Adapter targeting this root through `runner`
    pub fn adapter<'a>(&self, runner: &'a FakeRunner) -> Zypper<&'a FakeRunner> {
        Zypper::with_runner(ZypperConfig::with_root(self.path()), runner)
    }

    /// Adapter without a root override, keeping credentials below this root
    pub fn unrooted_adapter<'a>(&self, runner: &'a FakeRunner) -> Zypper<&'a FakeRunner> {
        let config = ZypperConfig {
            credentials_dir: self.path().join(CREDENTIALS_SUBDIR),
            ..ZypperConfig::default()
        };
        Zypper::with_runner(config, runner)
    }

    /// Path of a credentials file below this root
    pub fn credentials_path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(CREDENTIALS_SUBDIR).join(file_name)
    }

    /// Create a credentials file below this root
    pub fn create_credentials(&self, file_name: &str, content: &str) {
        let path = self.credentials_path(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create credentials directory");
        }
        std::fs::write(path, content).expect("Failed to write credentials file");
    }

    pub fn read_credentials(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.credentials_path(file_name))
            .expect("Failed to read credentials file")
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// Fake `zypper` executable that logs its arguments and prints fixtures
const FAKE_ZYPPER: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_ZYPPER_LOG"
case "$*" in
  *"products -i"*) cat "$FAKE_ZYPPER_FIXTURES/products_sle12.xml" ;;
  *"repos -d"*) cat "$FAKE_ZYPPER_FIXTURES/repos.xml" ;;
  *"services -d"*) cat "$FAKE_ZYPPER_FIXTURES/services.xml" ;;
  *"modifyrepo"*"Missing-Repo"*)
    echo "Repository 'Missing-Repo' not found by its alias, number, or URI." >&2
    exit 3 ;;
  *"refresh-services"*)
    if [ -n "$FAKE_ZYPPER_LOCKED" ]; then
      echo "System management is locked by the application with pid 4242 (zypper)." >&2
      exit 7
    fi ;;
  *"targetos"*) echo "sle-12-x86_64" ;;
esac
exit 0
"#;

/// Sandbox for running the `suseconnect` binary against a fake zypper
pub struct CliSandbox {
    pub dir: TempDir,
}

impl CliSandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let bin = dir.path().join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        std::fs::create_dir_all(dir.path().join("root")).expect("Failed to create root directory");

        let zypper = bin.join("zypper");
        std::fs::write(&zypper, FAKE_ZYPPER).expect("Failed to write fake zypper");
        std::fs::set_permissions(&zypper, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake zypper executable");

        Self { dir }
    }

    /// Filesystem root handed to `--root`
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    pub fn credentials_path(&self, file_name: &str) -> PathBuf {
        self.root().join(CREDENTIALS_SUBDIR).join(file_name)
    }

    /// Configuration file handed to `--config`; absent unless a test writes it
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("suseconnect.toml")
    }

    /// Argument lines the fake zypper received, in order
    pub fn zypper_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("zypper.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Base command with the sandbox environment and global flags
    pub fn command(&self) -> Command {
        let path = std::env::var("PATH").unwrap_or_default();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_suseconnect"));
        cmd.env("PATH", format!("{}:{path}", self.dir.path().join("bin").display()))
            .env("FAKE_ZYPPER_LOG", self.dir.path().join("zypper.log"))
            .env(
                "FAKE_ZYPPER_FIXTURES",
                Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
            )
            .env_remove("SUSECONNECT_FS_ROOT")
            .env_remove("SUSECONNECT_CONFIG")
            .env_remove("SUSECONNECT_PASSWORD")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path())
            .arg("--root")
            .arg(self.root());
        cmd
    }

    /// Run `suseconnect` with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute suseconnect")
    }
}

impl Default for CliSandbox {
    fn default() -> Self {
        Self::new()
    }
}
