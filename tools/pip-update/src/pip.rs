//! Invocation layer for pip
//!
//! pip is always driven as a module of an interpreter, never as a bare
//! `pip` binary, so the right interpreter's site-packages is what gets
//! upgraded. On Windows the `py` launcher resolves the interpreter (and
//! honors a `-X.Y` version selector); elsewhere `python3` is used directly.

use std::path::PathBuf;
use std::sync::Arc;

use cmd_common::runner::{CommandResult, CommandRunner};

/// Windows launcher binary
const LAUNCHER: &str = "py";
/// Interpreter used where no launcher exists
const INTERPRETER: &str = "python3";

/// Handle to a pip installation
pub struct Pip {
    runner: Arc<dyn CommandRunner>,
    version: Option<String>,
}

impl Pip {
    pub fn new(runner: Arc<dyn CommandRunner>, version: Option<String>) -> Self {
        Self { runner, version }
    }

    /// Build the (program, leading args) pair that reaches pip
    fn invocation(&self, pip_args: &[String]) -> (PathBuf, Vec<String>) {
        let mut full_args = Vec::with_capacity(pip_args.len() + 3);

        let program = if cfg!(windows) {
            if let Some(version) = &self.version {
                full_args.push(version.clone());
            }
            PathBuf::from(LAUNCHER)
        } else {
            // The launcher (and with it version selection) is Windows-only
            PathBuf::from(INTERPRETER)
        };

        full_args.push("-m".to_string());
        full_args.push("pip".to_string());
        full_args.extend(pip_args.iter().cloned());

        (program, full_args)
    }

    /// Run a pip command with output streaming to the console
    pub async fn run(&self, pip_args: &[String]) -> CommandResult<()> {
        let (program, full_args) = self.invocation(pip_args);
        self.runner.run(&program, &full_args).await
    }

    /// Run a pip command capturing stdout
    pub async fn run_capturing(&self, pip_args: &[String]) -> CommandResult<String> {
        let (program, full_args) = self.invocation(pip_args);
        self.runner.run_capturing(&program, &full_args).await
    }

    /// List the Python runtimes the launcher knows about
    ///
    /// The launcher's `-0` listing exits nonzero on some versions, so the
    /// exit status is ignored.
    pub async fn list_runtimes(&self) -> CommandResult<i32> {
        self.runner
            .run_unchecked(&PathBuf::from(LAUNCHER), &["-0".to_string()])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmd_common::testing::RecordingRunner;

    fn pip_with(version: Option<&str>) -> (Arc<RecordingRunner>, Pip) {
        let runner = Arc::new(RecordingRunner::new());
        let pip = Pip::new(runner.clone(), version.map(str::to_string));
        (runner, pip)
    }

    #[tokio::test]
    async fn pip_runs_as_an_interpreter_module() {
        let (runner, pip) = pip_with(None);
        pip.run(&["list".to_string()]).await.unwrap();

        let call = &runner.calls()[0];
        let program = call.program.to_string_lossy();
        assert!(program == "py" || program == "python3");
        // pip args always follow `-m pip`
        assert_eq!(
            &call.args[call.args.len() - 3..],
            &["-m".to_string(), "pip".to_string(), "list".to_string()]
        );
    }

    #[cfg(windows)]
    #[tokio::test]
    async fn version_selector_precedes_module_flag_on_windows() {
        let (runner, pip) = pip_with(Some("-3.12"));
        pip.run(&["list".to_string()]).await.unwrap();

        let call = &runner.calls()[0];
        assert_eq!(call.program, PathBuf::from("py"));
        assert_eq!(call.args, vec!["-3.12", "-m", "pip", "list"]);
    }

    #[cfg(not(windows))]
    #[tokio::test]
    async fn version_selector_is_ignored_off_windows() {
        let (runner, pip) = pip_with(Some("-3.12"));
        pip.run(&["list".to_string()]).await.unwrap();

        let call = &runner.calls()[0];
        assert_eq!(call.program, PathBuf::from("python3"));
        assert_eq!(call.args, vec!["-m", "pip", "list"]);
    }
}
