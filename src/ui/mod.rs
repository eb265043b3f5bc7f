//! Deployment log presentation layer
//!
//! All deployment output goes through the [`Reporter`] trait so the core never
//! writes to the terminal directly:
//! - [`ConsoleReporter`]: styled terminal output (default)
//! - [`SilentReporter`]: no-op, for scripted usage
//! - [`RecordingReporter`]: keeps every line in memory, used by tests
//!
//! Verbose lines are per-file detail, info lines are per-dependency progress,
//! warnings flag skipped or overwritten units, and success/error mark the
//! terminal outcome of a run.

use std::cell::RefCell;

use console::{Style, Term};

use crate::progress::ProgressDisplay;

/// Leveled log sink for a deployment run
pub trait Reporter {
    /// Per-file detail (skips, copies)
    fn verbose(&self, message: &str);

    /// Per-dependency and overall progress
    fn info(&self, message: &str);

    /// Missing folders, overwrites, skipped dependencies
    fn warning(&self, message: &str);

    /// Successful terminal outcome
    fn success(&self, message: &str);

    /// Failed terminal outcome
    fn error(&self, message: &str);

    /// A run over `total` selected dependencies is starting
    fn begin(&self, _total: usize) {}

    /// Dependency `current` of `total` is being deployed
    fn begin_dependency(&self, _reference: &str, _current: usize, _total: usize) {}

    /// The run is over, `ok` tells whether it succeeded
    fn finish(&self, _ok: bool) {}
}

/// Styled terminal reporter
///
/// Verbose lines are only printed when verbose output was requested.
/// Warnings and errors go to stderr, everything else to stdout. A dependency
/// progress bar is drawn when stdout is a terminal and output is not verbose.
pub struct ConsoleReporter {
    verbose: bool,
    scope: String,
    progress: RefCell<Option<ProgressDisplay>>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            scope: "runtime_deploy".to_string(),
            progress: RefCell::new(None),
        }
    }

    fn prefix(&self) -> String {
        Style::new().bold().apply_to(format!("{}:", self.scope)).to_string()
    }

    fn emit<F: FnOnce()>(&self, f: F) {
        match self.progress.borrow().as_ref() {
            Some(progress) => progress.suspend(f),
            None => f(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn verbose(&self, message: &str) {
        if self.verbose {
            let line = format!("{} {}", self.prefix(), Style::new().dim().apply_to(message));
            self.emit(|| println!("{line}"));
        }
    }

    fn info(&self, message: &str) {
        let line = format!("{} {}", self.prefix(), message);
        self.emit(|| println!("{line}"));
    }

    fn warning(&self, message: &str) {
        let line = format!(
            "{} {}",
            self.prefix(),
            Style::new().yellow().apply_to(format!("WARN: {message}"))
        );
        self.emit(|| eprintln!("{line}"));
    }

    fn success(&self, message: &str) {
        let line = format!("{} {}", self.prefix(), Style::new().green().apply_to(message));
        self.emit(|| println!("{line}"));
    }

    fn error(&self, message: &str) {
        let line = format!(
            "{} {}",
            self.prefix(),
            Style::new().red().bold().apply_to(format!("ERROR: {message}"))
        );
        self.emit(|| eprintln!("{line}"));
    }

    fn begin(&self, total: usize) {
        let progress = if !self.verbose && Term::stdout().is_term() {
            ProgressDisplay::new(total as u64)
        } else {
            ProgressDisplay::hidden(total as u64)
        };
        *self.progress.borrow_mut() = Some(progress);
    }

    fn begin_dependency(&self, reference: &str, current: usize, total: usize) {
        if let Some(progress) = self.progress.borrow().as_ref() {
            progress.update_dependency(reference, current, total);
        }
    }

    fn finish(&self, ok: bool) {
        if let Some(progress) = self.progress.borrow_mut().take() {
            if ok {
                progress.finish();
            } else {
                progress.abandon();
            }
        }
    }
}

/// Reporter that discards everything
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn verbose(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}

    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Severity of a recorded line
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Verbose,
    Info,
    Warning,
    Success,
    Error,
}

/// Reporter that records every line, for assertions in tests
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<(Level, String)>>,
}

#[allow(dead_code)]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines of the given level
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any line of `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn verbose(&self, message: &str) {
        self.push(Level::Verbose, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
