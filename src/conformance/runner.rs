//! Sequential corpus runner and result bookkeeping.

use super::{exec, judge, CaseOutcome, InvocationSpec, OracleConfig};
use crate::corpus::{Corpus, TestCase};

/// Recorded outcome for one case, in corpus order.
#[derive(Debug)]
pub struct CaseReport {
    /// Name of the group the case belongs to.
    pub group: String,
    /// Case name (reporting only, not required unique).
    pub name: String,
    /// The verdict.
    pub outcome: CaseOutcome,
}

/// Aggregated results of one corpus run.
///
/// Built incrementally by the runner, finalized once all cases have
/// executed. Oracle mismatches (`failed`) and harness-side infrastructure
/// failures (`errors`) are counted separately.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of cases that passed.
    pub passed: usize,
    /// Number of cases whose observed behavior mismatched the expectation.
    pub failed: usize,
    /// Number of cases the harness could not execute.
    pub errors: usize,
    /// Per-case outcomes, in corpus order.
    pub reports: Vec<CaseReport>,
}

impl RunSummary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one case outcome.
    pub fn record(&mut self, group: &str, name: &str, outcome: CaseOutcome) {
        match &outcome {
            CaseOutcome::Pass => self.passed += 1,
            CaseOutcome::Fail { .. } => self.failed += 1,
            CaseOutcome::Error { .. } => self.errors += 1,
        }
        self.reports.push(CaseReport {
            group: group.to_owned(),
            name: name.to_owned(),
            outcome,
        });
    }

    /// Total number of cases run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors
    }

    /// True if every case passed (no mismatches, no infrastructure errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// One-line summary in the report's final-line format.
    pub fn summary(&self) -> String {
        let verdict = if self.all_passed() {
            "SUCCESS"
        } else {
            "FAILURE"
        };
        format!("{}/{} tests passed {}", self.passed, self.total(), verdict)
    }

    /// Oracle mismatches only.
    pub fn failures(&self) -> Vec<&CaseReport> {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_fail())
            .collect()
    }

    /// Infrastructure errors only.
    pub fn error_details(&self) -> Vec<&CaseReport> {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_error())
            .collect()
    }
}

/// Drives the corpus through the execution adapter and the oracle.
///
/// Execution is strictly sequential, one subprocess at a time, in corpus
/// order; no case's outcome affects another's, and a per-case
/// infrastructure failure is recorded without aborting the run.
pub struct CorpusRunner {
    spec: InvocationSpec,
    oracle: OracleConfig,
}

impl CorpusRunner {
    /// Create a runner for the given invocation and oracle configuration.
    pub fn new(spec: InvocationSpec, oracle: OracleConfig) -> Self {
        Self { spec, oracle }
    }

    /// Run a single case: execution adapter, then oracle.
    ///
    /// Adapter failures become [`CaseOutcome::Error`] rather than
    /// propagating, so the caller's loop continues.
    pub fn run_case(&self, case: &TestCase) -> CaseOutcome {
        match exec::run(&self.spec, &case.program) {
            Ok(observed) => judge(&case.expectation, &observed, &self.oracle),
            Err(e) => CaseOutcome::Error {
                message: e.to_string(),
            },
        }
    }

    /// Run every case in the corpus, in corpus order.
    ///
    /// `observer` fires once per case as it completes, with the 1-based
    /// case index, the corpus size, the case, and its outcome - the hook
    /// the CLI uses to emit its per-case report lines in a stable order.
    pub fn run<F>(&self, corpus: &Corpus, mut observer: F) -> RunSummary
    where
        F: FnMut(usize, usize, &TestCase, &CaseOutcome),
    {
        let total = corpus.len();
        let mut summary = RunSummary::new();
        let mut index = 0usize;

        for group in corpus.groups() {
            for case in &group.cases {
                index += 1;
                let outcome = self.run_case(case);
                observer(index, total, case, &outcome);
                summary.record(group.name, &case.name, outcome);
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_bookkeeping() {
        let mut summary = RunSummary::new();
        summary.record("statements", "ORG Basic", CaseOutcome::Pass);
        summary.record(
            "statements",
            "ORG Overflow",
            CaseOutcome::Fail {
                expected: "nonzero exit".to_owned(),
                actual: "exit code 0 with 1 bytes `01`".to_owned(),
            },
        );
        summary.record(
            "symbols",
            "Label Basic",
            CaseOutcome::Error {
                message: "failed to launch `ea`".to_owned(),
            },
        );

        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.total(), 3);
        assert!(!summary.all_passed());
        assert_eq!(summary.failures().len(), 1);
        assert_eq!(summary.error_details().len(), 1);
        assert_eq!(summary.summary(), "1/3 tests passed FAILURE");
    }

    #[test]
    fn summary_preserves_record_order() {
        let mut summary = RunSummary::new();
        summary.record("a", "first", CaseOutcome::Pass);
        summary.record("a", "second", CaseOutcome::Pass);
        summary.record("b", "third", CaseOutcome::Pass);

        let names: Vec<&str> = summary.reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(summary.summary(), "3/3 tests passed SUCCESS");
    }
}
