pub mod commands;

pub use commands::{Command, CommandRunner, OutputFormat};
