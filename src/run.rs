//! The pipeline around the sorters: parse the raw comma-separated text, dispatch
//! to the selected algorithm, time the sort, and chunk the result into display
//! rows. Everything here is a pure function of its inputs; elapsed time travels
//! inside the returned value instead of any ambient state.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::sorts::{bubble, selection};

/// Display rows hold at most this many values.
pub const ROW_WIDTH: usize = 10;

/// The closed set of supported algorithms. Dispatch matches exhaustively, there
/// is no fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Bubble,
    Selection,
}

impl SortMode {
    pub fn name(self) -> &'static str {
        match self {
            SortMode::Bubble => "bubble",
            SortMode::Selection => "selection",
        }
    }
}

impl FromStr for SortMode {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, RunError> {
        match s.trim() {
            "bubble" => Ok(SortMode::Bubble),
            "selection" => Ok(SortMode::Selection),
            other => Err(RunError::UnknownMode(other.to_string())),
        }
    }
}

/// Failures detected before any sorting work starts. Both variants are raised
/// while the input is still untouched, so a failed call has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// A comma-separated token did not parse as a base-10 integer. Carries the
    /// offending token; the user-facing message stays generic.
    InvalidInteger(String),
    /// Mode string outside the closed algorithm set. An empty string means no
    /// mode was selected at all.
    UnknownMode(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::InvalidInteger(_) => {
                write!(f, "Invalid input: please enter integers separated by commas")
            }
            RunError::UnknownMode(mode) if mode.is_empty() => {
                write!(f, "Please select a sort type")
            }
            RunError::UnknownMode(mode) => write!(f, "Unknown sort type: {mode}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Sorted values chunked into rows of at most [`ROW_WIDTH`] elements, plus the
/// wall-clock time the sort itself took.
#[derive(Debug, Clone)]
pub struct SortOutput {
    rows: Vec<Vec<i64>>,
    elapsed: Duration,
}

impl SortOutput {
    fn new(sorted: Vec<i64>, elapsed: Duration) -> Self {
        let rows = sorted.chunks(ROW_WIDTH).map(<[i64]>::to_vec).collect();
        Self { rows, elapsed }
    }

    /// Row-chunked sorted values. Every row but possibly the last holds exactly
    /// [`ROW_WIDTH`] elements; concatenated in order they reproduce the sorted
    /// sequence.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Time spent inside the sorter call, excluding parsing and formatting.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for SortOutput {
    /// One bracketed, comma-separated row per line: `[1, 2, 3]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row:?}")?;
        }
        Ok(())
    }
}

/// Splits on `,`, trims each token, parses base-10. The first bad token fails
/// the whole list. An empty or whitespace-only input yields a single empty
/// token and is therefore rejected, matching the reference behavior rather
/// than being treated as an empty sequence.
fn parse_values(raw: &str) -> Result<Vec<i64>, RunError> {
    raw.split(',')
        .map(str::trim)
        .map(|tok| {
            tok.parse::<i64>()
                .map_err(|_| RunError::InvalidInteger(tok.to_string()))
        })
        .collect()
}

/// Parses `raw`, sorts it with `mode` and chunks the result into rows. Parse
/// failures short-circuit before the sorter runs, so the reported elapsed time
/// always covers exactly one sorter invocation.
pub fn run(raw: &str, mode: SortMode) -> Result<SortOutput, RunError> {
    let mut values = parse_values(raw)?;

    let start = Instant::now();
    match mode {
        SortMode::Bubble => bubble::sort(&mut values),
        SortMode::Selection => selection::sort(&mut values),
    }
    let elapsed = start.elapsed();

    Ok(SortOutput::new(values, elapsed))
}
