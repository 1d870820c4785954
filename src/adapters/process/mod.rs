//! Subprocess adapter
//!
//! Implements `CommandRunner` with a bounded wait. Output pipes are drained
//! on reader threads so a chatty child cannot block on a full pipe while we
//! poll for its exit.
//!
//! On unix the child leads its own process group. When the budget runs out,
//! the whole group is killed, including background processes that still
//! hold the output pipes after the child itself has exited.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::core::ports::{CommandOutput, CommandRunner};
use crate::error::{DocopsError, Result};

/// Default limit for one external command
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long to wait for the pipes to close once the group has been killed
const KILL_GRACE: Duration = Duration::from_secs(2);

/// Runs commands on the local system
#[derive(Debug, Clone)]
pub struct SystemRunner {
    workdir: PathBuf,
    timeout: Duration,
}

impl SystemRunner {
    /// Runner executing in `workdir` with [`DEFAULT_TIMEOUT`]
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self {
            workdir,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Read a pipe to the end on a separate thread
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// Wait up to `budget` for a reader to finish
fn collect(reader: &Receiver<String>, budget: Duration) -> Option<String> {
    reader.recv_timeout(budget).ok()
}

/// Start `command` as the leader of a new process group
#[cfg(unix)]
fn spawn_grouped(command: &mut Command) -> std::io::Result<Child> {
    use std::os::unix::process::CommandExt;
    command.process_group(0).spawn()
}

#[cfg(not(unix))]
fn spawn_grouped(command: &mut Command) -> std::io::Result<Child> {
    command.spawn()
}

/// SIGKILL every process in the group led by `pid`
#[cfg(unix)]
fn kill_group(pid: u32) {
    let group = format!("-{pid}");
    let killed = Command::new("kill")
        .args(["-s", "KILL", "--", &group])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    if killed.is_err() {
        let _ = Command::new("sh")
            .args(["-c", &format!("kill -s KILL -- {group}")])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}

#[cfg(not(unix))]
const fn kill_group(_pid: u32) {}

/// Kill `child` and its group, then reap it
fn terminate(child: &mut Child) {
    kill_group(child.id());
    let _ = child.kill();
    let _ = child.wait();
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command_line = std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
        let subprocess_error = |reason: String| DocopsError::Subprocess {
            command: command_line.clone(),
            reason,
        };

        log::debug!("Running `{command_line}` in {}", self.workdir.display());

        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = spawn_grouped(&mut command).map_err(|e| subprocess_error(e.to_string()))?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let started = Instant::now();
        let status = loop {
            if let Some(status) = child.try_wait().map_err(|e| subprocess_error(e.to_string()))? {
                break status;
            }
            if started.elapsed() >= self.timeout {
                terminate(&mut child);
                return Err(subprocess_error(format!(
                    "timed out after {}s",
                    self.timeout.as_secs()
                )));
            }
            thread::sleep(POLL_INTERVAL);
        };

        // Background descendants may keep the pipes open past the child's exit
        let mut out = collect(&stdout, self.timeout.saturating_sub(started.elapsed()));
        let mut err = collect(&stderr, self.timeout.saturating_sub(started.elapsed()));
        if out.is_none() || err.is_none() {
            log::warn!(
                "`{command_line}` left processes holding its output after {}s; killing them",
                self.timeout.as_secs()
            );
            kill_group(child.id());
            out = out.or_else(|| collect(&stdout, KILL_GRACE));
            err = err.or_else(|| collect(&stderr, KILL_GRACE));
        }

        Ok(CommandOutput {
            success: status.success(),
            code: status.code(),
            stdout: out.unwrap_or_default(),
            stderr: err.unwrap_or_default(),
        })
    }
}
