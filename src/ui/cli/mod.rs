// Wed Jan 15 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, ClassifyArgs, Command, GenerateArgs, HashArgs};
pub use handler::CommandHandler;

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args();
    CommandHandler::new().execute(args)
}
