//! Command parser - converts one input line into a typed [`Command`]
//!
//! Grammar (keywords are case-sensitive, the line is trimmed first):
//!
//! ```text
//! status
//! exit
//! create <non-negative int>
//! park <registration> <color>      split on the first space only
//! leave <int>
//! reg_by_color <color>
//! spot_by_color <color>
//! spot_by_reg <registration>
//! ```
//!
//! Parsing is a pure function of the input string.

pub mod command;

pub use command::{keyword, Command};

use crate::lot::{SpotNumber, Vehicle};
use crate::{Error, Result};

/// Parse a raw input line into a command
///
/// # Errors
/// Returns `InvalidCommand` carrying the trimmed line when it matches no
/// rule, or when a known keyword has a malformed argument.
pub fn parse_command(input: &str) -> Result<Command> {
    let line = input.trim();
    let invalid = || Error::invalid_command(line);

    match line {
        keyword::STATUS => return Ok(Command::Status),
        keyword::EXIT => return Ok(Command::Exit),
        _ => {}
    }

    let (kw, rest) = line.split_once(' ').ok_or_else(invalid)?;
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(invalid());
    }

    match kw {
        keyword::CREATE => {
            let capacity = arg.parse::<u32>().map_err(|_| invalid())?;
            Ok(Command::CreateLot { capacity })
        }
        keyword::PARK => {
            let (registration, color) = arg.split_once(' ').ok_or_else(invalid)?;
            let color = color.trim();
            if color.is_empty() {
                return Err(invalid());
            }
            Ok(Command::Park {
                vehicle: Vehicle::new(registration, color),
            })
        }
        keyword::LEAVE => {
            let spot = arg.parse::<SpotNumber>().map_err(|_| invalid())?;
            Ok(Command::Leave { spot })
        }
        keyword::REG_BY_COLOR => Ok(Command::RegistrationsByColor {
            color: arg.to_string(),
        }),
        keyword::SPOT_BY_COLOR => Ok(Command::SpotsByColor {
            color: arg.to_string(),
        }),
        keyword::SPOT_BY_REG => Ok(Command::SpotsByRegistration {
            registration: arg.to_string(),
        }),
        _ => Err(invalid()),
    }
}
