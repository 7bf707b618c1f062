//! Interpreter - the read / parse / dispatch / print loop
//!
//! # Architecture
//!
//! The interpreter is a state machine over [`Session`]:
//!
//! ```text
//! AwaitingInitialCreate ──create n──▶ Running(lot) ──park/leave──▶ Running(lot')
//!         │                              │  ▲
//!         └──────exit / EOF───▶ Terminated ◀─exit / EOF
//! ```
//!
//! [`Session::step`] is pure: it consumes the current session and one input
//! line and returns the next session together with the lines to print.
//! [`run`] owns the only live session as a loop-local binding and rebinds it
//! after every line.
//!
//! When `record_log` is set, every processed line is appended to a
//! [`TransitionLog`].

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::{InterpreterConfig, InvalidCommandPolicy};
use crate::lot::LotState;
use crate::parser::{parse_command, Command};
use crate::query;
use crate::transition::{self, LeaveOutcome, ParkOutcome};
use crate::Result;

/// Printed for any input other than `create`/`exit` before a lot exists
pub const NO_LOT_MESSAGE: &str = "Sorry, a parking lot has not been created.";

/// Printed for unparseable input once a lot exists (reprompt policy)
pub const INVALID_COMMAND_MESSAGE: &str = "Sorry, that is not a valid command.";

// ── Session ───────────────────────────────────────────────

/// Interpreter state between two input lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No lot has been created yet
    AwaitingInitialCreate,
    /// A lot exists and accepts commands
    Running(LotState),
    /// `exit`, end of input, or a fatal invalid command was seen
    Terminated,
}

/// What a single step did, independent of its wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Created,
    Parked,
    ParkingFull,
    Left,
    SpotAlreadyEmpty,
    Status,
    Found,
    EmptyQueryResult,
    NoLot,
    InvalidCommand,
    Exited,
    /// Line fed to an already terminated session
    Skipped,
}

/// Result of feeding one line to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub command: Option<Command>,
    pub outcome: Outcome,
    pub output: Vec<String>,
}

impl Step {
    fn new(session: Session, command: Option<Command>, outcome: Outcome) -> Self {
        Step {
            session,
            command,
            outcome,
            output: Vec::new(),
        }
    }

    fn say(mut self, line: impl Into<String>) -> Self {
        self.output.push(line.into());
        self
    }
}

impl Session {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Session::Terminated)
    }

    /// Current lot, if one has been created
    pub fn lot(&self) -> Option<&LotState> {
        match self {
            Session::Running(lot) => Some(lot),
            _ => None,
        }
    }

    /// Feed one input line, producing the next session and its output
    pub fn step(self, line: &str, config: &InterpreterConfig) -> Step {
        let parsed = parse_command(line);
        match self {
            Session::Terminated => Step::new(Session::Terminated, None, Outcome::Skipped),
            Session::AwaitingInitialCreate => match parsed {
                Ok(Command::CreateLot { capacity }) => create(capacity),
                Ok(Command::Exit) => {
                    Step::new(Session::Terminated, Some(Command::Exit), Outcome::Exited)
                }
                Ok(other) => {
                    debug!(command = %other, "command before any lot exists");
                    Step::new(Session::AwaitingInitialCreate, Some(other), Outcome::NoLot)
                        .say(NO_LOT_MESSAGE)
                }
                Err(e) => {
                    warn!(error = %e, "rejected input before any lot exists");
                    Step::new(Session::AwaitingInitialCreate, None, Outcome::NoLot)
                        .say(NO_LOT_MESSAGE)
                }
            },
            Session::Running(lot) => match parsed {
                Ok(command) => dispatch(lot, command),
                Err(e) => {
                    warn!(error = %e, policy = ?config.invalid_command, "invalid command");
                    match config.invalid_command {
                        InvalidCommandPolicy::Reprompt => {
                            Step::new(Session::Running(lot), None, Outcome::InvalidCommand)
                                .say(INVALID_COMMAND_MESSAGE)
                        }
                        InvalidCommandPolicy::Terminate => {
                            Step::new(Session::Terminated, None, Outcome::InvalidCommand)
                        }
                    }
                }
            },
        }
    }
}

fn create(capacity: u32) -> Step {
    info!(capacity, "created parking lot");
    Step::new(
        Session::Running(LotState::new(capacity)),
        Some(Command::CreateLot { capacity }),
        Outcome::Created,
    )
    .say(format!("Created a parking lot with {} spots.", capacity))
}

fn dispatch(lot: LotState, command: Command) -> Step {
    debug!(command = %command, occupied = lot.occupied(), "dispatching");
    let logged = Some(command.clone());

    match command {
        Command::CreateLot { capacity } => create(capacity),
        Command::Exit => Step::new(Session::Terminated, logged, Outcome::Exited),
        Command::Park { vehicle } => {
            let outcome = transition::park(&lot, vehicle);
            let message = outcome.message();
            match outcome {
                ParkOutcome::Parked { state, .. } => {
                    Step::new(Session::Running(state), logged, Outcome::Parked).say(message)
                }
                ParkOutcome::Full => {
                    Step::new(Session::Running(lot), logged, Outcome::ParkingFull).say(message)
                }
            }
        }
        Command::Leave { spot } => {
            let outcome = transition::leave(&lot, spot);
            let message = outcome.message();
            match outcome {
                LeaveOutcome::Left { state, .. } => {
                    Step::new(Session::Running(state), logged, Outcome::Left).say(message)
                }
                LeaveOutcome::AlreadyEmpty { .. } => {
                    Step::new(Session::Running(lot), logged, Outcome::SpotAlreadyEmpty)
                        .say(message)
                }
            }
        }
        Command::Status => {
            let lines = query::status(&lot);
            let mut step = Step::new(Session::Running(lot), logged, Outcome::Status);
            step.output = lines;
            step
        }
        Command::RegistrationsByColor { color } => {
            let found = query::registrations_by_color(&lot, &color);
            let outcome = found_or_empty(found.len());
            Step::new(Session::Running(lot), logged, outcome)
                .say(query::render_by_color(&found, &color))
        }
        Command::SpotsByColor { color } => {
            let found = query::spots_by_color(&lot, &color);
            let outcome = found_or_empty(found.len());
            Step::new(Session::Running(lot), logged, outcome)
                .say(query::render_by_color(&found, &color))
        }
        Command::SpotsByRegistration { registration } => {
            let found = query::spots_by_registration(&lot, &registration);
            let outcome = found_or_empty(found.len());
            Step::new(Session::Running(lot), logged, outcome)
                .say(query::render_by_registration(&found, &registration))
        }
    }
}

fn found_or_empty(count: usize) -> Outcome {
    if count == 0 {
        Outcome::EmptyQueryResult
    } else {
        Outcome::Found
    }
}

// ── Transition Log ────────────────────────────────────────

/// One processed input line
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionEntry {
    /// Sequential line number among processed lines (0-indexed)
    pub sequence: u64,
    /// The raw input line, trimmed
    pub input: String,
    /// Parsed command, absent when the line did not parse
    pub command: Option<Command>,
    pub outcome: Outcome,
    /// Lines printed in response
    pub output: Vec<String>,
}

/// Append-only log of everything the interpreter processed
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionLog {
    pub entries: Vec<TransitionEntry>,
}

impl TransitionLog {
    pub fn new() -> Self {
        TransitionLog {
            entries: Vec::new(),
        }
    }

    /// Record a step; skipped lines are not logged
    pub fn record(&mut self, input: &str, step: &Step) {
        if step.outcome == Outcome::Skipped {
            return;
        }
        self.entries.push(TransitionEntry {
            sequence: self.entries.len() as u64,
            input: input.trim().to_string(),
            command: step.command.clone(),
            outcome: step.outcome,
            output: step.output.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Run Loop ──────────────────────────────────────────────

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Exit,
    EndOfInput,
    InvalidCommand,
}

/// Summary of a complete interpreter run
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    pub termination: Termination,
    pub log: TransitionLog,
}

/// Read one line without its `\n` / `\r\n` terminator; `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so the line
/// still reaches the parser and is answered like any other input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Drive the interpreter over every line of `input`, writing to `output`
///
/// Output is flushed after each line so an interactive caller sees the
/// response before the next read. End of input is treated as `exit`.
///
/// # Errors
/// Only I/O failures on the line source or sink are errors; every command
/// outcome, including unparseable input, is reported through `output`.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &InterpreterConfig,
) -> Result<RunReport> {
    let mut session = Session::AwaitingInitialCreate;
    let mut log = TransitionLog::new();
    let mut buf = Vec::new();
    let mut lines: u64 = 0;

    while let Some(line) = read_line(&mut input, &mut buf)? {
        lines += 1;
        let step = session.step(&line, config);

        for out in &step.output {
            writeln!(output, "{}", out)?;
        }
        output.flush()?;
        if config.record_log {
            log.record(&line, &step);
        }

        if step.session.is_terminated() {
            let termination = match step.outcome {
                Outcome::InvalidCommand => Termination::InvalidCommand,
                _ => Termination::Exit,
            };
            debug!(?termination, lines, "session terminated");
            return Ok(RunReport { termination, log });
        }
        session = step.session;
    }

    debug!(lines, "end of input");
    Ok(RunReport {
        termination: Termination::EndOfInput,
        log,
    })
}

// ── Tests ─────────────────────────────────────────────────
