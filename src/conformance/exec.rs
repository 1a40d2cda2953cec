//! Execution adapter - one subprocess invocation per test case.
//!
//! The adapter owns the full lifecycle of a single run of the tool under
//! test: a fresh uniquely-named temporary file for the output artifact, the
//! argument list, stdin delivery of the program text, stderr capture, and
//! termination (including killing a tool that outlives its deadline). The
//! temporary file is a scoped resource: it is deleted on every exit path,
//! including spawn failures and timeouts.

use super::{HarnessError, HarnessResult};
use std::ffi::OsString;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use std::{fs, thread};

/// How often the adapter polls a running subprocess for termination.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Default per-case deadline for the tool under test.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Invocation specification for the tool under test.
///
/// The full argument list for each case is, in order: the base command
/// tokens, the target platform tag, the target game identifier, the
/// `-output:` flag pointing at the adapter's temporary file, and any extra
/// parameters. Platform and game are opaque pass-through constants from the
/// harness's point of view; the defaults are the values the corpus was
/// recorded against.
#[derive(Debug, Clone)]
pub struct InvocationSpec {
    command: Vec<String>,
    platform: String,
    game: String,
    extra_params: Vec<String>,
    timeout: Duration,
    temp_dir: Option<PathBuf>,
}

impl InvocationSpec {
    /// Build a spec from a whitespace-tokenized base command line.
    ///
    /// Fails with [`HarnessError::EmptyCommand`] if the line contains no
    /// tokens.
    pub fn new(command_line: &str) -> HarnessResult<Self> {
        let command: Vec<String> = command_line.split_whitespace().map(str::to_owned).collect();
        if command.is_empty() {
            return Err(HarnessError::EmptyCommand);
        }
        Ok(Self {
            command,
            platform: "A".to_owned(),
            game: "FE6".to_owned(),
            extra_params: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            temp_dir: None,
        })
    }

    /// Override the target platform tag.
    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = platform.to_owned();
        self
    }

    /// Override the target game identifier.
    pub fn with_game(mut self, game: &str) -> Self {
        self.game = game.to_owned();
        self
    }

    /// Append extra parameters, given as one whitespace-tokenized string.
    pub fn with_extra_params(mut self, params: &str) -> Self {
        self.extra_params = params.split_whitespace().map(str::to_owned).collect();
        self
    }

    /// Override the per-case deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create artifact files under `dir` instead of the system temp
    /// directory.
    pub fn with_temp_dir(mut self, dir: &Path) -> Self {
        self.temp_dir = Some(dir.to_owned());
        self
    }

    /// The executable token (first token of the base command).
    pub fn program_name(&self) -> &str {
        &self.command[0]
    }

    fn argv(&self, artifact_path: &Path) -> Vec<OsString> {
        let mut argv: Vec<OsString> = Vec::with_capacity(self.command.len() + 3);
        argv.extend(self.command[1..].iter().map(OsString::from));
        argv.push(OsString::from(&self.platform));
        argv.push(OsString::from(&self.game));
        let mut output_flag = OsString::from("-output:");
        output_flag.push(artifact_path);
        argv.push(output_flag);
        argv.extend(self.extra_params.iter().map(OsString::from));
        argv
    }
}

/// Observed outcome of one subprocess invocation.
///
/// Created fresh per test case and consumed immediately by the oracle. The
/// temporary file backing `artifact` has already been deleted by the time
/// this value is returned.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the subprocess.
    pub status: ExitStatus,
    /// Full contents of the artifact file; empty if the tool never wrote it.
    pub artifact: Vec<u8>,
    /// Captured stderr, lossily decoded as UTF-8.
    pub diagnostics: String,
}

impl ExecutionResult {
    /// Whether the subprocess terminated with exit code zero.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// The exit code, if the subprocess terminated normally.
    ///
    /// A signal-killed subprocess has no code and never counts as success.
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Run the tool under test once with `program` on stdin.
///
/// Stdout is discarded, stderr is captured, and the artifact is read back
/// from the temporary output file after termination. The file is pre-created
/// by the adapter, so a tool that exits without writing still yields an
/// empty artifact rather than a read error.
pub fn run(spec: &InvocationSpec, program: &str) -> HarnessResult<ExecutionResult> {
    // Scoped resource: deleted on drop, on every path out of this function.
    let artifact_file = match &spec.temp_dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir),
        None => tempfile::NamedTempFile::new(),
    }
    .map_err(HarnessError::TempFile)?;

    let mut child = Command::new(&spec.command[0])
        .args(spec.argv(artifact_file.path()))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| HarnessError::Launch {
            command: spec.command[0].clone(),
            source,
        })?;

    // Drain stderr on a helper thread so a chatty tool cannot deadlock
    // against a full pipe buffer while we are still writing its stdin.
    let stderr_pipe = child.stderr.take();
    let drain = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = stderr_pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    });

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(program.as_bytes()) {
            // A tool that rejects its input may exit before consuming all
            // of stdin; that is the tool's verdict, not a harness fault.
            Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                let _ = child.kill();
                let _ = child.wait();
                let _ = drain.join();
                return Err(HarnessError::StdinDelivery(e));
            }
            _ => {}
        }
        // Dropping the handle closes the pipe and signals end of input.
    }

    let status = wait_with_deadline(&mut child, spec.timeout);
    let diagnostics = String::from_utf8_lossy(&drain.join().unwrap_or_default()).into_owned();
    let status = status?;

    let artifact = match fs::read(artifact_file.path()) {
        Ok(bytes) => bytes,
        // The tool may have deleted the pre-created file; absent reads as
        // empty, same as never-written.
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(HarnessError::ArtifactRead(e)),
    };

    Ok(ExecutionResult {
        status,
        artifact,
        diagnostics,
    })
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> HarnessResult<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait().map_err(HarnessError::Wait)? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(HarnessError::Timeout {
                limit_ms: timeout.as_millis(),
            });
        }
        thread::sleep(WAIT_POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_line_is_rejected() {
        assert!(matches!(
            InvocationSpec::new("   "),
            Err(HarnessError::EmptyCommand)
        ));
    }

    #[test]
    fn command_line_is_whitespace_tokenized() {
        let spec = InvocationSpec::new("dotnet  ColorzCore.dll").unwrap();
        assert_eq!(spec.program_name(), "dotnet");
        assert_eq!(spec.command, vec!["dotnet", "ColorzCore.dll"]);
    }

    #[test]
    fn argv_order_is_fixed() {
        let spec = InvocationSpec::new("dotnet ColorzCore.dll")
            .unwrap()
            .with_extra_params("--no-colored-log -D:DEBUG");
        let argv = spec.argv(Path::new("/tmp/out.bin"));
        let argv: Vec<String> = argv
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            argv,
            vec![
                "ColorzCore.dll",
                "A",
                "FE6",
                "-output:/tmp/out.bin",
                "--no-colored-log",
                "-D:DEBUG",
            ]
        );
    }

    #[test]
    fn platform_and_game_are_configurable() {
        let spec = InvocationSpec::new("ea")
            .unwrap()
            .with_platform("B")
            .with_game("FE8");
        let argv = spec.argv(Path::new("/tmp/o"));
        assert_eq!(argv[0], "B");
        assert_eq!(argv[1], "FE8");
    }

    #[test]
    fn launch_failure_is_an_infrastructure_error() {
        let spec = InvocationSpec::new("/nonexistent/assembler-binary").unwrap();
        match run(&spec, "ORG 0 ; BYTE 1") {
            Err(HarnessError::Launch { command, .. }) => {
                assert_eq!(command, "/nonexistent/assembler-binary");
            }
            other => panic!("expected Launch error, got {other:?}"),
        }
    }
}
