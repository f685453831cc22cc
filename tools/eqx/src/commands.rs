//! Line-by-line extraction driver.

use std::fmt;
use std::io::{self, Write};

use eqx_decl::{scan_declaration, scan_type_name, scan_variable_name, ParseError};

/// Which extractor to run on each line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Type,
    Variable,
    Declaration,
}

impl Mode {
    /// Parse a subcommand name.
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "type" => Some(Mode::Type),
            "var" => Some(Mode::Variable),
            "decl" => Some(Mode::Declaration),
            _ => None,
        }
    }

    pub fn extract(self, line: &str) -> Result<String, ParseError> {
        match self {
            Mode::Type => scan_type_name(line),
            Mode::Variable => scan_variable_name(line),
            Mode::Declaration => scan_declaration(line).map(|decl| decl.name().to_owned()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Type => "type",
            Mode::Variable => "var",
            Mode::Declaration => "decl",
        })
    }
}

/// Outcome of a run over a batch of lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub extracted: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Run `mode` over each line. Names go to `out`, one per line; failures go
/// to `err` as `line N: <error>` with `N` counted from 1.
pub fn extract_lines<I, S>(
    mode: Mode,
    lines: I,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Summary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = Summary::default();
    for (index, line) in lines.into_iter().enumerate() {
        match mode.extract(line.as_ref()) {
            Ok(name) => {
                writeln!(out, "{name}")?;
                summary.extracted += 1;
            }
            Err(error) => {
                writeln!(err, "line {}: {error}", index + 1)?;
                summary.failed += 1;
            }
        }
    }
    tracing::debug!(%mode, extracted = summary.extracted, failed = summary.failed, "run complete");
    Ok(summary)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
