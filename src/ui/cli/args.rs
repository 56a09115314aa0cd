// Wed Jan 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raw-template-parser")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Turns decompiled subroutine pseudocode into NMSTemplate class stubs", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON file overriding the default configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a class stub for each input
    Generate(GenerateArgs),
    /// Print how each line of an input is classified
    Classify(ClassifyArgs),
    /// Print the fingerprint of a piece of text
    Hash(HashArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub suffix: Option<String>,

    #[arg(long)]
    pub stdout: bool,

    #[arg(long)]
    pub sequential: bool,
}

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct HashArgs {
    pub text: String,
}

impl GenerateArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.output.is_some() && self.inputs.len() > 1 {
            return Err("--output can only be used with a single input".to_string());
        }
        if self.output.is_some() && self.stdout {
            return Err("Cannot specify both --output and --stdout".to_string());
        }
        if let Some(missing) = self.inputs.iter().find(|input| !input.exists()) {
            return Err(format!("Input file does not exist: {:?}", missing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from(["raw-template-parser", "--log-level", "debug", "generate", "a.txt", "b.txt", "--sequential"]).unwrap();
        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Generate(generate) => {
                assert_eq!(generate.inputs.len(), 2);
                assert!(generate.sequential);
                assert!(generate.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_needs_single_input() {
        let args = GenerateArgs {
            inputs: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
            output: Some(PathBuf::from("out.cs")),
            suffix: None,
            stdout: false,
            sequential: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_generate_requires_input() {
        assert!(Args::try_parse_from(["raw-template-parser", "generate"]).is_err());
    }
}
