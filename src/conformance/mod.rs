//! Conformance harness for driving the assembler under test.
//!
//! This module owns everything between "here is a test case" and "here is a
//! verdict": subprocess invocation with a scoped temporary artifact file
//! ([`run`]/[`InvocationSpec`]), the asymmetric pass/fail oracle
//! ([`judge`]/[`OracleConfig`]), and the sequential corpus runner with its
//! summary bookkeeping ([`CorpusRunner`]/[`RunSummary`]).
//!
//! Harness-side faults (the tool cannot be launched, a temp file cannot be
//! created, the tool hangs past its deadline) are [`HarnessError`]s and are
//! kept visibly distinct from oracle mismatches: an infrastructure failure
//! means the harness or environment is broken, not the tool under test.

mod exec;
mod oracle;
mod runner;

pub use exec::{run, ExecutionResult, InvocationSpec};
pub use oracle::{judge, CaseOutcome, OracleConfig, REJECTION_MARKER};
pub use runner::{CaseReport, CorpusRunner, RunSummary};

use std::io;
use thiserror::Error;

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Infrastructure failures of the harness itself.
///
/// None of these are test verdicts. The runner records them per case as
/// [`CaseOutcome::Error`] and continues with the next case; the CLI surfaces
/// them with a distinct `ERROR` label.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The base command line tokenized to nothing.
    #[error("assembler command line is empty")]
    EmptyCommand,

    /// The subprocess could not be started at all (missing executable,
    /// permissions).
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        /// The executable token that failed to launch.
        command: String,
        /// The underlying launch error.
        source: io::Error,
    },

    /// The temporary artifact file could not be created.
    #[error("failed to create temporary artifact file: {0}")]
    TempFile(io::Error),

    /// The program text could not be delivered over stdin.
    #[error("failed to deliver program over stdin: {0}")]
    StdinDelivery(io::Error),

    /// Waiting on the subprocess failed.
    #[error("failed waiting for assembler to terminate: {0}")]
    Wait(io::Error),

    /// The subprocess outlived its deadline and was killed.
    #[error("assembler did not terminate within {limit_ms}ms and was killed")]
    Timeout {
        /// The per-case limit that was exceeded, in milliseconds.
        limit_ms: u128,
    },

    /// The artifact file existed but could not be read back.
    #[error("failed to read artifact file: {0}")]
    ArtifactRead(io::Error),

    /// A corpus group was requested that does not exist.
    #[error("unknown corpus group `{name}` (known groups: {known})")]
    UnknownGroup {
        /// The requested group name.
        name: String,
        /// Comma-separated list of valid group names.
        known: String,
    },
}
