//! Test utilities
//!
//! A recording [`CommandRunner`] and proptest generators.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::ConnectError;
use crate::infra::process::{CommandOutput, CommandRunner};

/// Command runner that records every command line and replays canned output
///
/// Unknown command lines succeed with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<String>>,
    responses: RefCell<HashMap<String, CommandOutput>>,
    invocation_failures: RefCell<HashSet<String>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `command_line` with `output`
    pub fn respond(&self, command_line: &str, output: CommandOutput) {
        self.responses
            .borrow_mut()
            .insert(command_line.to_string(), output);
    }

    /// Make `command_line` fail to run at all
    pub fn fail_invocation(&self, command_line: &str) {
        self.invocation_failures
            .borrow_mut()
            .insert(command_line.to_string());
    }

    /// Command lines run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How often `command_line` was run
    pub fn count(&self, command_line: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == command_line)
            .count()
    }
}

impl CommandRunner for RecordingRunner {
    fn capture(&self, command_line: &str) -> Result<CommandOutput, ConnectError> {
        self.calls.borrow_mut().push(command_line.to_string());

        if self.invocation_failures.borrow().contains(command_line) {
            return Err(ConnectError::ToolInvocation {
                command: command_line.to_string(),
                error: "No such file or directory (os error 2)".to_string(),
            });
        }

        Ok(self
            .responses
            .borrow()
            .get(command_line)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a zypper alias (alphanumeric with `_`, `-` and `.`)
    pub fn alias() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_.-]{0,30}"
    }

    /// Generate a product version
    pub fn version() -> impl Strategy<Value = String> {
        (10u32..16, proptest::option::of(1u32..6)).prop_map(|(major, sp)| match sp {
            Some(sp) => format!("{major}.{sp}"),
            None => major.to_string(),
        })
    }

    /// Generate an architecture
    pub fn arch() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("x86_64".to_string()),
            Just("aarch64".to_string()),
            Just("ppc64le".to_string()),
            Just("s390x".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_recording_runner_defaults_to_success() {
        let runner = RecordingRunner::new();
        let output = runner.capture("zypper refresh").unwrap();
        assert_eq!(output, CommandOutput::default());
        assert_eq!(runner.calls(), vec!["zypper refresh".to_string()]);
    }

    #[test]
    fn test_recording_runner_invocation_failure() {
        let runner = RecordingRunner::new();
        runner.fail_invocation("zypper refresh");
        assert!(runner.capture("zypper refresh").is_err());
        assert_eq!(runner.count("zypper refresh"), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_alias_generator(alias in alias()) {
            prop_assert!(!alias.is_empty());
            prop_assert!(alias.chars().all(|c| c.is_ascii_alphanumeric() || "_.-".contains(c)));
        }

        #[test]
        fn test_version_generator(version in version()) {
            prop_assert!(version.split('.').all(|part| part.parse::<u32>().is_ok()));
        }

        #[test]
        fn test_arch_generator(arch in arch()) {
            prop_assert!(!arch.is_empty());
        }
    }
}
