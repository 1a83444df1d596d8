//! Waray driver - runs a parsed program and reports how it went.
//!
//! A run executes every top-level statement against one fresh environment.
//! The first error ends the run: its localized message is written to the
//! output channel as a single line and the run reports failure.

mod config;
mod tracing_setup;

use std::process::ExitCode;

use waray_eval::{stdout_handler, Interpreter, SharedPrintHandler};
use waray_ir::{Stmt, StringInterner};

pub use config::{ConfigError, RunConfig};
pub use tracing_setup::init_tracing;

/// Outcome of a program run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    /// `0` on success, `-1` on failure.
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => -1,
        }
    }

    pub fn is_success(self) -> bool {
        self == RunStatus::Success
    }
}

/// Process exit status; `-1` truncates to `255`.
impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::from(255),
        }
    }
}

/// Run `program`, printing to stdout.
pub fn run_program(program: &[Stmt], interner: &StringInterner, config: &RunConfig) -> RunStatus {
    run_program_with(program, interner, config, stdout_handler())
}

/// Run `program`, printing to `handler`.
pub fn run_program_with(
    program: &[Stmt],
    interner: &StringInterner,
    config: &RunConfig,
    handler: SharedPrintHandler,
) -> RunStatus {
    let mut interpreter = Interpreter::builder(interner)
        .mode(config.mode)
        .lang(config.lang)
        .print_handler(handler)
        .build();

    tracing::debug!(statements = program.len(), mode = %config.mode, "running program");
    match interpreter.run(program) {
        Ok(()) => RunStatus::Success,
        Err(err) => {
            tracing::error!(error = %err, lines = ?err.lines(), "run failed");
            interpreter.report(&err);
            RunStatus::Failure
        }
    }
}
