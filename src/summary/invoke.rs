//! External AI command execution.
//!
//! The command runs without arguments in the meeting directory. The prompt
//! goes in on stdin; stdout and stderr come back as separate buffers because
//! the AI tool mixes diagnostics into stdout and the sanitizer needs it alone.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
use tokio::process::{ChildStderr, ChildStdin, ChildStdout, Command};
use tokio::task::JoinHandle;
use tracing::debug;

use super::error::SummaryError;
use super::prompt::ComposedPrompt;

/// How long a killed command's stderr reader gets to pick up what is
/// already in the pipe.
const STDERR_GRACE: Duration = Duration::from_millis(100);

/// Captured output of a successful AI command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiInvocation {
    pub stdout: String,
    pub stderr: String,
}

/// Run `command` with the prompt on stdin and wait for it to finish.
///
/// Spawn failures, non-zero exits and timeouts all become
/// `SummaryError::AiInvocationFailed` with whatever stderr was captured,
/// including the partial stderr of a command that timed out.
/// The child is killed if the timeout elapses.
pub async fn invoke_ai(
    command: &str,
    prompt: &ComposedPrompt,
    working_dir: &Path,
    timeout: Option<Duration>,
) -> Result<AiInvocation, SummaryError> {
    let mut child = Command::new(command)
        .current_dir(working_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| failure(command, spawn_reason(&e), String::new()))?;

    debug!(
        "Spawned '{}' (pid {:?}) with a {} byte prompt",
        command,
        child.id(),
        prompt.as_str().len()
    );

    // Stderr accumulates in a shared buffer so a timeout can still report it.
    let stderr_buf = Arc::new(Mutex::new(Vec::new()));
    let stderr_task = child
        .stderr
        .take()
        .map(|pipe| tokio::spawn(drain_into(pipe, Arc::clone(&stderr_buf))));

    // Feed stdin while output is being drained so a chatty child never
    // blocks on a full pipe.
    let stdin = child.stdin.take();
    let stdout = child.stdout.take();
    let run = async {
        let (written, stdout, status) = tokio::join!(
            feed_stdin(stdin, prompt.as_str()),
            read_pipe(stdout),
            child.wait()
        );
        if let Err(e) = written {
            debug!("AI command closed stdin early: {e}");
        }
        Ok::<_, std::io::Error>((stdout?, status?))
    };

    let finished = match timeout {
        Some(limit) => match tokio::time::timeout(limit, run).await {
            Ok(finished) => finished,
            Err(elapsed) => {
                if let Err(e) = child.start_kill() {
                    debug!("Failed to kill timed out AI command: {e}");
                }
                finish_stderr(stderr_task, Some(STDERR_GRACE)).await;
                return Err(failure(
                    command,
                    format!(
                        "timed out after {} ({elapsed})",
                        humantime::format_duration(limit)
                    ),
                    captured(&stderr_buf),
                ));
            }
        },
        None => run.await,
    };

    let (stdout, status) = match finished {
        Ok(finished) => finished,
        Err(e) => {
            finish_stderr(stderr_task, Some(STDERR_GRACE)).await;
            return Err(failure(
                command,
                format!("failed to collect output: {e}"),
                captured(&stderr_buf),
            ));
        }
    };

    finish_stderr(stderr_task, None).await;
    let stdout = String::from_utf8_lossy(&stdout).into_owned();
    let stderr = captured(&stderr_buf);

    if !status.success() {
        return Err(failure(command, status.to_string(), stderr));
    }

    Ok(AiInvocation { stdout, stderr })
}

async fn feed_stdin(stdin: Option<ChildStdin>, input: &str) -> std::io::Result<()> {
    if let Some(mut pipe) = stdin {
        pipe.write_all(input.as_bytes()).await?;
        pipe.shutdown().await?;
    }
    Ok(())
}

async fn read_pipe(pipe: Option<ChildStdout>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

async fn drain_into(mut pipe: ChildStderr, sink: Arc<Mutex<Vec<u8>>>) -> std::io::Result<()> {
    let mut chunk = [0_u8; 4096];
    loop {
        let read = pipe.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        if let (Some(bytes), Ok(mut buf)) = (chunk.get(..read), sink.lock()) {
            buf.extend_from_slice(bytes);
        }
    }
}

/// Wait for the stderr reader. With a grace period the reader is aborted
/// once it expires, since a killed command's children may hold the pipe open.
async fn finish_stderr(
    task: Option<JoinHandle<std::io::Result<()>>>,
    grace: Option<Duration>,
) {
    let Some(mut task) = task else {
        return;
    };
    let joined = match grace {
        Some(grace) => match tokio::time::timeout(grace, &mut task).await {
            Ok(joined) => joined,
            Err(_) => {
                task.abort();
                return;
            }
        },
        None => task.await,
    };
    match joined {
        Ok(Err(e)) => debug!("Failed to read AI command stderr: {e}"),
        Err(e) => debug!("AI command stderr reader stopped: {e}"),
        Ok(Ok(())) => {}
    }
}

fn captured(sink: &Mutex<Vec<u8>>) -> String {
    sink.lock()
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}

fn spawn_reason(e: &std::io::Error) -> String {
    if e.kind() == ErrorKind::NotFound {
        "command not found".to_string()
    } else {
        format!("failed to spawn: {e}")
    }
}

fn failure(command: &str, reason: String, stderr: String) -> SummaryError {
    SummaryError::AiInvocationFailed {
        command: command.to_string(),
        reason,
        stderr,
    }
}

#[cfg(all(test, unix))]
#[path = "invoke_tests.rs"]
mod tests;
