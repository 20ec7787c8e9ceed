//! Sources of sink reports.
//!
//! The parser only consumes text. Obtaining that text is the job of a
//! [`SinkSource`]: normally [`PactlCommand`], which runs `pactl list sinks`,
//! or [`StaticSource`] for a report captured earlier. Any closure returning
//! `Result<String, E>` is a source as well.
//!
//! Source failures surface as [`Error::SourceUnavailable`] and are never
//! retried here.
//!
//! ## Examples
//!
//! ```rust
//! use pactl_sinks::{grab, StaticSource};
//!
//! let source = StaticSource::new("Sink #0\n\tState: SUSPENDED\n");
//! let sinks = grab(&source).unwrap();
//! assert_eq!(sinks.len(), 1);
//!
//! let failing = || -> Result<String, &'static str> { Err("no server") };
//! assert!(grab(&failing).unwrap_err().is_source_error());
//! ```

use crate::{Error, Result};
use std::fmt;
use std::process::Command;

/// Produces the text of a sink report.
pub trait SinkSource {
    /// Fetches one complete report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] when the report cannot be obtained.
    fn fetch_document(&self) -> Result<String>;
}

impl<F, E> SinkSource for F
where
    F: Fn() -> std::result::Result<String, E>,
    E: fmt::Display,
{
    fn fetch_document(&self) -> Result<String> {
        self().map_err(Error::source_unavailable)
    }
}

/// Runs `pactl` and returns its standard output.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::PactlCommand;
///
/// let long = PactlCommand::new();
/// assert_eq!(long.command_line(), "pactl list sinks");
///
/// let short = PactlCommand::short();
/// assert_eq!(short.command_line(), "pactl list short sinks");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PactlCommand {
    program: String,
    args: Vec<String>,
}

impl Default for PactlCommand {
    fn default() -> Self {
        PactlCommand {
            program: "pactl".to_string(),
            args: vec!["list".to_string(), "sinks".to_string()],
        }
    }
}

impl PactlCommand {
    /// `pactl list sinks`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `pactl list short sinks`
    #[must_use]
    pub fn short() -> Self {
        Self::default().with_args(["list", "short", "sinks"])
    }

    /// Sets the program to run, keeping the arguments.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replaces the arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// The command as it would be typed in a shell.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SinkSource for PactlCommand {
    fn fetch_document(&self) -> Result<String> {
        let command_line = self.command_line();
        tracing::debug!(command = %command_line, "running sink report command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                tracing::debug!(command = %command_line, error = %e, "failed to start command");
                Error::source_unavailable(format!("failed to run `{}`: {}", command_line, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::source_unavailable(format!(
                "`{}` exited with {}: {}",
                command_line,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            Error::source_unavailable(format!("`{}` printed invalid UTF-8: {}", command_line, e))
        })
    }
}

/// A fixed report, e.g. one captured from an earlier `pactl` run.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StaticSource(pub String);

impl StaticSource {
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        StaticSource(document.into())
    }
}

impl SinkSource for StaticSource {
    fn fetch_document(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
