//! Command line handling.
//!
//! Reads one `address/mask` argument, resolves it and writes the report or
//! the error hint. Nothing here computes subnet properties.

use crate::output::{json, terminal};
use crate::resolver::resolve;
use clap::Parser;
use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

/// Report network, mask, broadcast and host counts for an IPv4 subnet.
#[derive(Parser, Debug, Default)]
#[command(name = "subnet-calculator", version)]
pub struct Args {
    /// Address with prefix length or dotted mask, e.g. 192.168.1.0/24 or 10.0.0.10/255.255.0.0
    #[arg(value_name = "IP_ADDRESS/MASK")]
    pub input: Option<String>,

    /// Print the result as JSON instead of text (implies --no-banner)
    #[arg(long)]
    pub json: bool,

    /// Do not print the banner, which is otherwise always printed first
    #[arg(long)]
    pub no_banner: bool,

    /// Log more to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved,
    UsageShown,
    InvalidInput,
}

impl Outcome {
    /// Usage is a friendly display, only a rejected input is a failure.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Resolved | Outcome::UsageShown => 0,
            Outcome::InvalidInput => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Outcome, Box<dyn Error>> {
    if !args.json && !args.no_banner {
        write!(out, "{}", terminal::banner())?;
    }

    let Some(input) = args.input.as_deref() else {
        log::info!("No input given, showing usage");
        write!(out, "{}", terminal::usage(terminal::PROGRAM_NAME))?;
        return Ok(Outcome::UsageShown);
    };

    log::info!("Resolving {input}");
    let outcome = match resolve(input) {
        Ok(subnet) => {
            if args.json {
                writeln!(out, "{}", json::report(&subnet)?)?;
            } else {
                write!(out, "{}", terminal::report(&subnet))?;
            }
            Outcome::Resolved
        }
        Err(e) => {
            if args.json {
                writeln!(out, "{}", json::error(&e)?)?;
            } else {
                write!(out, "{}", terminal::error_hint(&e))?;
            }
            Outcome::InvalidInput
        }
    };
    out.flush()?;
    Ok(outcome)
}
