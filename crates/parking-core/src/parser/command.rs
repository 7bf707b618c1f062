//! Command types - the typed form of one input line
//!
//! Each variant carries only the data its transition or query needs.
//! `Display` renders the canonical textual form, which `parse_command`
//! accepts back unchanged.

use std::fmt;

use crate::lot::{SpotNumber, Vehicle};

/// One interpreter command
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// `create <n>` - replace the lot with an empty one of `n` spots
    CreateLot { capacity: u32 },
    /// `park <registration> <color>`
    Park { vehicle: Vehicle },
    /// `leave <spot>`
    Leave { spot: SpotNumber },
    /// `status`
    Status,
    /// `reg_by_color <color>`
    RegistrationsByColor { color: String },
    /// `spot_by_color <color>`
    SpotsByColor { color: String },
    /// `spot_by_reg <registration>`
    SpotsByRegistration { registration: String },
    /// `exit`
    Exit,
}

impl Command {
    /// Keyword that introduces this command
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::CreateLot { .. } => keyword::CREATE,
            Command::Park { .. } => keyword::PARK,
            Command::Leave { .. } => keyword::LEAVE,
            Command::Status => keyword::STATUS,
            Command::RegistrationsByColor { .. } => keyword::REG_BY_COLOR,
            Command::SpotsByColor { .. } => keyword::SPOT_BY_COLOR,
            Command::SpotsByRegistration { .. } => keyword::SPOT_BY_REG,
            Command::Exit => keyword::EXIT,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = self.keyword();
        match self {
            Command::CreateLot { capacity } => write!(f, "{} {}", kw, capacity),
            Command::Park { vehicle } => {
                write!(f, "{} {} {}", kw, vehicle.registration, vehicle.color)
            }
            Command::Leave { spot } => write!(f, "{} {}", kw, spot),
            Command::Status | Command::Exit => write!(f, "{}", kw),
            Command::RegistrationsByColor { color } | Command::SpotsByColor { color } => {
                write!(f, "{} {}", kw, color)
            }
            Command::SpotsByRegistration { registration } => write!(f, "{} {}", kw, registration),
        }
    }
}

/// Command keywords, matched case-sensitively
pub mod keyword {
    pub const CREATE: &str = "create";
    pub const PARK: &str = "park";
    pub const LEAVE: &str = "leave";
    pub const STATUS: &str = "status";
    pub const REG_BY_COLOR: &str = "reg_by_color";
    pub const SPOT_BY_COLOR: &str = "spot_by_color";
    pub const SPOT_BY_REG: &str = "spot_by_reg";
    pub const EXIT: &str = "exit";
}
