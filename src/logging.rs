//! Logging setup
//!
//! Log records go through the `log` facade. `env_logger` formats them as
//! `timestamp - docops - LEVEL - message` and writes each line both to stderr
//! and to the append-only `docops/docops.log`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Env, Target};

/// Writer that copies every line to stderr and, when available, a log file
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            // A broken log file must not take the CLI down with it
            if file.write_all(buf).is_err() {
                self.file = None;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Open the text log for appending.
///
/// The log lives inside the project's `docops/` directory; when that
/// directory is missing nothing is created and logging goes to stderr only.
fn open_log_file(path: &Path) -> Option<File> {
    if !path.parent().is_some_and(Path::is_dir) {
        return None;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Initialize the global logger.
///
/// `RUST_LOG` wins over the default level (`debug` when verbose, `info`
/// otherwise). Calling this twice is harmless.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let default_level = if verbose { "debug" } else { "info" };
    let file = log_file.and_then(open_log_file);

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - docops - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .try_init();
}
