//! Command-line interface module.
//!
//! Provides argument parsing and the usage text.

pub mod args;

use crate::constants;

/// Usage lines printed when the arguments do not parse.
#[must_use]
pub fn usage() -> String {
    format!(
        "{}\n{}\n{}",
        constants::CLI_MSG_USAGE,
        constants::CLI_MSG_USAGE_PROTOCOL,
        constants::CLI_MSG_USAGE_ACTION
    )
}
