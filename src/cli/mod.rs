/// CLI layer: argument parsing and result output.
pub mod args;
pub mod output;

pub use args::{Cli, Command, GlobalArgs};
pub use output::{emit, write_result};
