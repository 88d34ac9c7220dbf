// src/system/executor.rs

use crate::{CancellationToken, core::compiler::Invocation};
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::process::{Child, Command as StdCommand, ExitStatus, Stdio};
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const READ_CHUNK_SIZE: usize = 8192;

/// A failure to run the external tool.
///
/// Every variant carries the diagnostic command line and whatever combined
/// output was captured, so the tool's own message reaches the operator.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command '{command}' could not be executed: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
        output: Vec<u8>,
    },
    #[error("Command '{command}' failed ({status}):\n{}", lossy(.output))]
    NonZeroExitStatus {
        command: String,
        status: ExitStatus,
        output: Vec<u8>,
    },
    #[error("Command '{command}' could not be awaited: {source}\n{}", lossy(.output))]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
        output: Vec<u8>,
    },
    #[error("Command '{command}' was cancelled by the user.\n{}", lossy(.output))]
    Cancelled { command: String, output: Vec<u8> },
}

impl ExecutionError {
    /// The combined output captured before the failure. Empty if nothing ran.
    pub fn output(&self) -> &[u8] {
        match self {
            Self::Spawn { output, .. }
            | Self::NonZeroExitStatus { output, .. }
            | Self::Wait { output, .. }
            | Self::Cancelled { output, .. } => output,
        }
    }

    /// The exit code of the external tool, if it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::NonZeroExitStatus { status, .. } => status.code(),
            _ => None,
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}

/// Spawns `invocation`, waits for it to exit and returns its combined output.
///
/// Stdout and stderr are drained by two reader threads into a single buffer,
/// so the bytes keep the order in which the reads completed. The call blocks
/// until the process exits. If a `cancellation_token` is given, the wait
/// becomes a polling loop and the child is killed as soon as the token is set.
pub fn execute(
    invocation: &Invocation,
    cwd: Option<&Path>,
    cancellation_token: Option<&CancellationToken>,
) -> Result<Vec<u8>, ExecutionError> {
    let command_line = invocation.to_string();
    log::debug!("Executing: {}", command_line);

    let mut command = StdCommand::new(&invocation.program);
    command
        .args(invocation.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(cwd) = cwd {
        command.current_dir(dunce::simplified(cwd));
    }

    let mut child = command.spawn().map_err(|e| ExecutionError::Spawn {
        command: command_line.clone(),
        source: e,
        output: Vec::new(),
    })?;

    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut readers = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        readers.push(spawn_reader(stdout, Arc::clone(&captured)));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(spawn_reader(stderr, Arc::clone(&captured)));
    }

    let waited = match cancellation_token {
        Some(token) => wait_cancellable(&mut child, token),
        None => child.wait().map(Some),
    };

    // A killed child closes its pipes, but anything it spawned may still hold
    // them open. Only drain the readers to EOF when the child exited normally.
    if matches!(waited, Ok(Some(_))) {
        for reader in readers {
            if reader.join().is_err() {
                log::warn!("Output reader thread for '{}' panicked.", command_line);
            }
        }
    }

    let output = std::mem::take(&mut *captured.lock().unwrap_or_else(PoisonError::into_inner));

    match waited {
        Ok(Some(status)) if status.success() => {
            log::debug!("'{}' finished with {}", command_line, status);
            Ok(output)
        }
        Ok(Some(status)) => {
            log::debug!("'{}' finished with {}", command_line, status);
            Err(ExecutionError::NonZeroExitStatus {
                command: command_line,
                status,
                output,
            })
        }
        Ok(None) => Err(ExecutionError::Cancelled {
            command: command_line,
            output,
        }),
        Err(e) => Err(ExecutionError::Wait {
            command: command_line,
            source: e,
            output,
        }),
    }
}

/// Non-blocking wait loop. Returns `Ok(None)` if the child was cancelled.
fn wait_cancellable(
    child: &mut Child,
    cancellation_token: &CancellationToken,
) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if cancellation_token.load(Ordering::Relaxed) {
            log::debug!(
                "Cancellation requested, killing child process (PID: {})...",
                child.id()
            );
            if let Err(e) = child.kill() {
                log::warn!("Failed to kill child process {}: {}", child.id(), e);
            }
            // Reap the killed process.
            child.wait().ok();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn spawn_reader<R>(mut stream: R, captured: Arc<Mutex<Vec<u8>>>) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    if let Some(bytes) = chunk.get(..n) {
                        captured
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .extend_from_slice(bytes);
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::debug!("Stopped reading child output: {}", e);
                    break;
                }
            }
        }
    })
}
