//! Pass/fail oracle for one observed execution.
//!
//! The oracle is asymmetric: a case expecting bytes is judged on the
//! artifact, a case expecting rejection is judged on the exit status (and,
//! in the stricter configuration, on the diagnostic marker the tool prints
//! when it deliberately refuses input). Both historical strictness variants
//! are supported as explicit configuration rather than hard-coded policy.

use super::ExecutionResult;
use crate::corpus::Expectation;

/// Diagnostic marker the tool under test prints on stderr when it
/// deliberately rejects input, as opposed to crashing for an unrelated
/// reason.
pub const REJECTION_MARKER: &str = "Errors occurred; no changes written.";

/// Oracle strictness configuration.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// For byte-expecting cases, additionally require exit code zero.
    ///
    /// Off by default: the corpus was recorded against a harness that
    /// judged these cases on byte equality alone, so a tool that warns on
    /// stderr (or even exits nonzero) while producing correct bytes still
    /// passes. Turning this on is the stricter historical variant.
    pub require_clean_exit: bool,
    /// For rejection-expecting cases, additionally require
    /// [`rejection_marker`](Self::rejection_marker) on stderr.
    ///
    /// On by default (the stricter variant): it distinguishes "failed for
    /// the expected reason" from "crashed for an unrelated reason".
    pub check_rejection_marker: bool,
    /// Marker substring looked for when
    /// [`check_rejection_marker`](Self::check_rejection_marker) is set.
    pub rejection_marker: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            require_clean_exit: false,
            check_rejection_marker: true,
            rejection_marker: REJECTION_MARKER.to_owned(),
        }
    }
}

/// Verdict for one test case.
#[derive(Debug)]
pub enum CaseOutcome {
    /// Observed behavior matched the expectation.
    Pass,
    /// Observed behavior disagreed with the expectation.
    Fail {
        /// What the case expected, rendered for reporting.
        expected: String,
        /// What the tool actually did, rendered for reporting.
        actual: String,
    },
    /// The harness could not complete the invocation; not a verdict on the
    /// tool under test.
    Error {
        /// The infrastructure failure, rendered for reporting.
        message: String,
    },
}

impl CaseOutcome {
    /// Returns true if this is a passing outcome.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is an oracle mismatch.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    /// Returns true if this is an infrastructure error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Judge one observed execution against a case's expectation.
///
/// Total over the two expectation variants; never returns
/// [`CaseOutcome::Error`] (infrastructure failures are attached by the
/// runner before the oracle is ever consulted).
pub fn judge(
    expectation: &Expectation,
    observed: &ExecutionResult,
    config: &OracleConfig,
) -> CaseOutcome {
    match expectation {
        Expectation::ExactBytes(expected) => {
            if config.require_clean_exit && !observed.success() {
                return CaseOutcome::Fail {
                    expected: format!("exit code 0 and {}", render_bytes(expected)),
                    actual: format!(
                        "{} with {}",
                        render_exit(observed),
                        render_bytes(&observed.artifact)
                    ),
                };
            }
            if observed.artifact == *expected {
                CaseOutcome::Pass
            } else {
                CaseOutcome::Fail {
                    expected: render_bytes(expected),
                    actual: render_bytes(&observed.artifact),
                }
            }
        }
        Expectation::MustFail => {
            if observed.success() {
                return CaseOutcome::Fail {
                    expected: "nonzero exit".to_owned(),
                    actual: format!(
                        "exit code 0 with {}",
                        render_bytes(&observed.artifact)
                    ),
                };
            }
            if config.check_rejection_marker
                && !observed.diagnostics.contains(&config.rejection_marker)
            {
                return CaseOutcome::Fail {
                    expected: format!("stderr containing {:?}", config.rejection_marker),
                    actual: format!("{} without the marker", render_exit(observed)),
                };
            }
            CaseOutcome::Pass
        }
    }
}

fn render_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "0 bytes".to_owned()
    } else {
        format!("{} bytes `{}`", bytes.len(), hex::encode(bytes))
    }
}

fn render_exit(observed: &ExecutionResult) -> String {
    match observed.exit_code() {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_owned(),
    }
}
