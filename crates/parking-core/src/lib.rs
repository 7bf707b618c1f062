//! Parking Core - command interpreter for a fixed-capacity parking lot
//!
//! Vehicles occupy numbered spots, assigned lowest-first and freed on
//! request, with read-only queries over current occupancy.
//!
//! # Architecture
//!
//! ```text
//! input line → Parser → Command → Interpreter dispatch
//!                                      ↓
//!                         Transition (park / leave) or Query
//!                                      ↓
//!                      (new LotState, output lines) → print → next line
//! ```
//!
//! # Guarantees
//!
//! - **Immutable**: every transition derives a new `LotState`
//! - **Total**: every input line is handled or cleanly rejected
//! - **Deterministic**: the same script always produces the same output
//!
//! # Example
//!
//! ```
//! use parking_core::{run, InterpreterConfig};
//!
//! let script = "create 2\npark KA01HH1234 White\nstatus\n";
//! let mut out = Vec::new();
//! run(script.as_bytes(), &mut out, &InterpreterConfig::default()).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Created a parking lot with 2 spots.\nWhite car parked in spot 1.\n1 KA01HH1234 White\n"
//! );
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod lot;
pub mod parser;
pub mod query;
pub mod transition;

pub use config::{InterpreterConfig, InvalidCommandPolicy};
pub use error::{Error, Result};
pub use interpreter::{run, Outcome, RunReport, Session, Step, Termination, TransitionLog};
pub use lot::{LotState, SpotNumber, Vehicle};
pub use parser::{parse_command, Command};
pub use transition::{leave, park, LeaveOutcome, ParkOutcome};
