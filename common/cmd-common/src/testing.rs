//! Test doubles for command execution
//!
//! [`RecordingRunner`] implements [`CommandRunner`] without spawning
//! anything: it records every invocation and replays queued responses, so
//! pipeline tests can assert exactly which external commands would have run.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::runner::{CommandError, CommandResult, CommandRunner};

/// How an invocation handled the child's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Output streamed to the console (`run`)
    Streamed,
    /// Stdout captured (`run_capturing`)
    Captured,
    /// Exit status ignored (`run_unchecked`)
    Unchecked,
}

/// One recorded command invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub mode: CaptureMode,
}

/// Fake runner that records invocations and replays queued responses
///
/// Capturing calls pop from the queued outputs (empty string when the queue
/// runs dry); streaming calls pop from the queued run results (`Ok` when the
/// queue runs dry). Unchecked calls always report exit code 0.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    capture_responses: Mutex<VecDeque<CommandResult<String>>>,
    run_responses: Mutex<VecDeque<CommandResult<()>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue stdout text for the next capturing call
    pub fn queue_output(&self, output: impl Into<String>) {
        self.capture_responses
            .lock()
            .unwrap()
            .push_back(Ok(output.into()));
    }

    /// Queue a failure for the next capturing call
    pub fn queue_capture_error(&self, err: CommandError) {
        self.capture_responses.lock().unwrap().push_back(Err(err));
    }

    /// Queue a result for the next streaming call
    pub fn queue_run_result(&self, result: CommandResult<()>) {
        self.run_responses.lock().unwrap().push_back(result);
    }

    /// Snapshot of every invocation so far, in order
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, program: &Path, args: &[String], mode: CaptureMode) {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            mode,
        });
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &Path, args: &[String]) -> CommandResult<()> {
        self.record(program, args, CaptureMode::Streamed);
        self.run_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn run_capturing(&self, program: &Path, args: &[String]) -> CommandResult<String> {
        self.record(program, args, CaptureMode::Captured);
        self.capture_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    async fn run_unchecked(&self, program: &Path, args: &[String]) -> CommandResult<i32> {
        self.record(program, args, CaptureMode::Unchecked);
        Ok(0)
    }
}
