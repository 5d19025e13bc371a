//! Demo and interactive sessions
//!
//! Drives the factorial core the way the console front end needs it:
//! - a fixed demonstration sequence
//! - an interactive loop reading whitespace-separated integers until the
//!   sentinel, end of input, or a token that is not an integer
//!
//! Nothing here writes to a terminal. Progress is reported through
//! [`SessionEvent`] callbacks so the binary decides how to render it.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::error::XfactResult;
use crate::models::{Evaluation, Width};

/// Default demonstration sequence
pub const DEMO_INPUTS: [i64; 7] = [0, 1, 5, 10, 12, 20, -1];

/// Default interactive stop value
pub const DEFAULT_SENTINEL: i64 = -1;

/// Default interactive prompt
pub const DEFAULT_PROMPT: &str = "Enter a number to compute its factorial (or -1 to quit): ";

/// Session progress, in the order it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// About to wait for the next token
    Prompt,
    /// An integer was read and evaluated
    Evaluated(Evaluation),
    /// The session ended
    Stopped(StopReason),
}

/// Why an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The sentinel value was entered
    Sentinel,
    /// The input stream closed
    EndOfInput,
    /// A token did not parse as an integer
    InvalidInput { token: String },
}

impl StopReason {
    pub fn name(&self) -> &'static str {
        match self {
            StopReason::Sentinel => "sentinel",
            StopReason::EndOfInput => "end_of_input",
            StopReason::InvalidInput { .. } => "invalid_input",
        }
    }
}

/// Interactive session options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveOptions {
    pub width: Width,
    pub sentinel: i128,
}

impl Default for InteractiveOptions {
    fn default() -> Self {
        Self {
            width: Width::default(),
            sentinel: DEFAULT_SENTINEL.into(),
        }
    }
}

/// Counts for a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub evaluated: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub stop: StopReason,
}

/// Evaluate every input of the demonstration sequence in order.
///
/// Failures are part of the report; they never cut the sequence short.
pub fn run_demo(inputs: &[i128], width: Width) -> Vec<Evaluation> {
    inputs.iter().map(|&n| Evaluation::new(n, width)).collect()
}

/// Whitespace-separated tokens pulled lazily from a reader, one line at a time.
///
/// Input is split on ASCII whitespace as raw bytes. A token that is not
/// valid UTF-8 comes back lossily decoded, so it simply fails to parse.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the reader is exhausted
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|t| !t.is_empty())
                    .map(|t| String::from_utf8_lossy(t).into_owned()),
            );
        }
    }
}

/// Run the interactive loop over `reader`.
///
/// `on_event` sees a `Prompt` before every read, an `Evaluated` for every
/// integer other than the sentinel, and exactly one final `Stopped`.
/// Errors from the reader or from `on_event` end the session.
pub fn run_interactive<R, F>(
    reader: R,
    options: InteractiveOptions,
    mut on_event: F,
) -> XfactResult<SessionSummary>
where
    R: BufRead,
    F: FnMut(&SessionEvent) -> io::Result<()>,
{
    let mut tokens = Tokens::new(reader);
    let mut evaluated = 0;
    let mut succeeded = 0;

    let stop = loop {
        on_event(&SessionEvent::Prompt)?;

        let Some(token) = tokens.next_token()? else {
            break StopReason::EndOfInput;
        };

        let n = match token.parse::<i128>() {
            Ok(n) => n,
            Err(_) => break StopReason::InvalidInput { token },
        };

        if n == options.sentinel {
            break StopReason::Sentinel;
        }

        let evaluation = Evaluation::new(n, options.width);
        evaluated += 1;
        if evaluation.is_success() {
            succeeded += 1;
        }
        on_event(&SessionEvent::Evaluated(evaluation))?;
    };

    on_event(&SessionEvent::Stopped(stop.clone()))?;

    Ok(SessionSummary {
        evaluated,
        succeeded,
        failed: evaluated - succeeded,
        stop,
    })
}
