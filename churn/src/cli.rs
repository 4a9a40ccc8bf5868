// src/cli.rs
use clap::{ArgAction, Parser};

/// Lists the files git has seen change most often, the usual suspects for
/// the next refactor. Always scans the current directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Branch or revision to count commits on [default: main]
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Glob pattern of paths to skip, relative to the current directory (repeatable)
    #[arg(short, long, action = ArgAction::Append)]
    pub filter: Vec<String>,

    /// Number of files to show [default: 10]
    #[arg(short = 'n', long = "top", value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,

    /// Do not print a line for every directory entered
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
