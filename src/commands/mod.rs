//! Command front end
//!
//! Parses command-line arguments and runs them against the service.

mod handlers;
mod parser;

pub use handlers::{USAGE, handle_command};
pub use parser::{Command, parse_command};
