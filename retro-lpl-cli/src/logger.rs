//! Console logger for the CLI.
//!
//! Info goes to stdout as plain lines so command output reads like normal
//! program output; warnings and errors go to stderr with a colored marker.
//! `--verbose` adds timestamps and debug messages, `--logfile` mirrors
//! everything to a file with ANSI codes stripped.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

struct CliLogger {
    level: LevelFilter,
    verbose: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        let message = match record.level() {
            Level::Error => format!(
                "{} {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.bright_red()),
                record.args()
            ),
            Level::Warn => format!(
                "{} {}",
                "\u{26A0}".if_supports_color(Stderr, |t| t.yellow()),
                record.args()
            ),
            _ => record.args().to_string(),
        };

        if self.verbose {
            format!(
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            )
        } else {
            message
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the CLI logger as the global `log` backend.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logfile = logfile
        .map(File::create)
        .transpose()?
        .map(Mutex::new);

    let logger = CliLogger {
        level,
        verbose,
        logfile,
    };

    log::set_boxed_logger(Box::new(logger)).map_err(|e| CliError::logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
