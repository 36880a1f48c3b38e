//! Chat text to commands.

pub mod parser;

pub use parser::{parse_command, Command};
