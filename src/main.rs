//! `spellbound` command-line entry point.
//!
//! Exits with 0 on success, 2 when a query word is rejected and 1 on any
//! other failure.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use spellbound::cli::args::SpellboundArgs;
use spellbound::cli::commands::execute_command;
use spellbound::error::SpellboundError;

fn main() {
    let args = SpellboundArgs::parse();
    init_logger(args.verbosity());

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(exit_code(&e));
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn exit_code(error: &SpellboundError) -> i32 {
    if error.is_invalid_input() { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&SpellboundError::invalid_input("Non-alpha word")), 2);
        assert_eq!(exit_code(&SpellboundError::configuration("dictionary is empty")), 1);
        assert_eq!(exit_code(&SpellboundError::cancelled("two-edit search")), 1);
    }
}
