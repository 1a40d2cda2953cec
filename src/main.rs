//! ea-conformance CLI.
//!
//! Runs the built-in corpus against an assembler command and reports one
//! line per case, in corpus order, followed by a summary line. The process
//! exit code is zero only if every case passed, so the harness composes in
//! automated pipelines.

use clap::Parser;
use serde_json::json;
use std::process::ExitCode;
use std::time::Duration;

use ea_conformance::{
    CaseOutcome, Corpus, CorpusRunner, HarnessResult, InvocationSpec, OracleConfig, RunSummary,
};

#[derive(Parser)]
#[command(name = "ea-conformance")]
#[command(about = "Black-box conformance harness for Event Assembler implementations")]
#[command(version)]
struct Cli {
    /// Base command used to launch the assembler under test
    /// (whitespace-tokenized, e.g. "dotnet ColorzCore.dll").
    command: String,

    /// Extra parameters appended after the fixed arguments
    /// (whitespace-tokenized).
    #[arg(long)]
    extra_params: Option<String>,

    /// Target platform tag passed through to the assembler.
    #[arg(long, default_value = "A")]
    platform: String,

    /// Target game identifier passed through to the assembler.
    #[arg(long, default_value = "FE6")]
    game: String,

    /// Run only the named corpus group.
    #[arg(long)]
    group: Option<String>,

    /// Per-case deadline in seconds; a tool that exceeds it is killed and
    /// the case is reported as a harness error.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Byte-expecting cases additionally require exit code zero.
    #[arg(long)]
    require_clean_exit: bool,

    /// Rejection-expecting cases pass on any nonzero exit, without
    /// requiring the diagnostic marker on stderr.
    #[arg(long)]
    no_marker_check: bool,

    /// Override the diagnostic marker substring looked for on stderr.
    #[arg(long)]
    marker: Option<String>,

    /// Also emit the run summary as one JSON object on stdout.
    #[arg(long)]
    json: bool,
}

fn build_spec(cli: &Cli) -> HarnessResult<InvocationSpec> {
    let mut spec = InvocationSpec::new(&cli.command)?
        .with_platform(&cli.platform)
        .with_game(&cli.game)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(extra) = &cli.extra_params {
        spec = spec.with_extra_params(extra);
    }
    Ok(spec)
}

fn build_oracle(cli: &Cli) -> OracleConfig {
    let mut oracle = OracleConfig {
        require_clean_exit: cli.require_clean_exit,
        check_rejection_marker: !cli.no_marker_check,
        ..OracleConfig::default()
    };
    if let Some(marker) = &cli.marker {
        oracle.rejection_marker = marker.clone();
    }
    oracle
}

fn outcome_line(outcome: &CaseOutcome) -> String {
    match outcome {
        CaseOutcome::Pass => "SUCCESS".to_owned(),
        CaseOutcome::Fail { expected, actual } => {
            format!("FAILURE (expected {expected}, got {actual})")
        }
        CaseOutcome::Error { message } => format!("ERROR ({message})"),
    }
}

fn summary_json(summary: &RunSummary) -> serde_json::Value {
    let cases: Vec<serde_json::Value> = summary
        .reports
        .iter()
        .map(|report| match &report.outcome {
            CaseOutcome::Pass => json!({
                "group": report.group,
                "name": report.name,
                "status": "pass",
            }),
            CaseOutcome::Fail { expected, actual } => json!({
                "group": report.group,
                "name": report.name,
                "status": "fail",
                "expected": expected,
                "actual": actual,
            }),
            CaseOutcome::Error { message } => json!({
                "group": report.group,
                "name": report.name,
                "status": "error",
                "message": message,
            }),
        })
        .collect();

    json!({
        "total": summary.total(),
        "passed": summary.passed,
        "failed": summary.failed,
        "errors": summary.errors,
        "all_passed": summary.all_passed(),
        "cases": cases,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let spec = match build_spec(&cli) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("ea-conformance: {e}");
            return ExitCode::from(2);
        }
    };

    let corpus = match &cli.group {
        Some(group) => match Corpus::full().select(group) {
            Ok(corpus) => corpus,
            Err(e) => {
                eprintln!("ea-conformance: {e}");
                return ExitCode::from(2);
            }
        },
        None => Corpus::full(),
    };

    let runner = CorpusRunner::new(spec, build_oracle(&cli));
    let summary = runner.run(&corpus, |index, total, case, outcome| {
        println!("[{index}/{total}] {}: {}", case.name, outcome_line(outcome));
    });

    println!("{}", summary.summary());

    if cli.json {
        println!("{}", summary_json(&summary));
    }

    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
