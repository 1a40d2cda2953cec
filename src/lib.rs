//! ea-conformance - Black-box conformance harness for Event Assembler
//! implementations.
//!
//! This crate validates an external assembler (a text-to-binary ROM-patching
//! compiler with a C-like preprocessor) against a fixed corpus of scripted
//! test cases. The assembler is never linked in: it is invoked as a
//! subprocess, fed each case's program over stdin, and judged purely on its
//! observable effects (exit status, stderr text, and the bytes it writes to
//! an output file the harness provides).
//!
//! # Architecture
//!
//! - [`corpus`] - The test-case data model and the built-in vector corpus
//! - [`conformance`] - Subprocess execution, oracle judging, corpus runner
//!
//! # Oracle
//!
//! Each test case expects either an exact artifact byte sequence or a
//! deliberate rejection (nonzero exit, optionally with a recognized
//! diagnostic marker on stderr). The two oracle strictness knobs are
//! explicit configuration, not hard-coded policy; see
//! [`conformance::OracleConfig`].

// Harness code must avoid unwrap/expect/panic: a misbehaving tool under
// test must never take the harness down with it.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod corpus;

// Re-export commonly used types
pub use conformance::{
    judge, run, CaseOutcome, CaseReport, CorpusRunner, ExecutionResult, HarnessError,
    HarnessResult, InvocationSpec, OracleConfig, RunSummary, REJECTION_MARKER,
};
pub use corpus::{Corpus, Expectation, TestCase, TestGroup};
