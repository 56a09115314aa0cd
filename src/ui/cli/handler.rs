// Wed Jan 15 2026 - Alex

use super::args::{Args, ClassifyArgs, Command, GenerateArgs, HashArgs};
use crate::batch::{BatchExecutor, BatchOutcome};
use crate::config::Config;
use crate::source::{FileOutput, FileSource, OutputWriter, SourceLoader, StdoutOutput};
use crate::template::{classify, Directive, LineKind};
use crate::utils::{ContentHasher, Fnv1Hasher, LoggingUtils};
use anyhow::Context;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        self.setup_logging(&args);

        let config = match &args.config {
            Some(path) => Config::load(path).with_context(|| format!("Failed to load config {:?}", path))?,
            None => Config::default(),
        };

        match args.command {
            Command::Generate(gen_args) => self.handle_generate(gen_args, config),
            Command::Classify(classify_args) => self.handle_classify(classify_args),
            Command::Hash(hash_args) => self.handle_hash(hash_args),
        }
    }

    fn setup_logging(&self, args: &Args) {
        if args.no_color {
            LoggingUtils::disable_color();
        }
        LoggingUtils::init(LoggingUtils::effective_level(&args.log_level, args.quiet));
    }

    fn handle_generate(&self, args: GenerateArgs, mut config: Config) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        if let Some(suffix) = &args.suffix {
            config = config.with_output_suffix(suffix.clone());
        }
        if args.sequential || args.stdout {
            config = config.with_parallel(false);
        }
        config.validate().map_err(|e| anyhow::anyhow!(e))?;

        let output: Box<dyn OutputWriter> = if args.stdout {
            Box::new(StdoutOutput)
        } else if let Some(path) = &args.output {
            Box::new(FileOutput::to_path(path))
        } else {
            Box::new(FileOutput::with_suffix(config.output_suffix.clone()))
        };
        let sources: Vec<Box<dyn SourceLoader>> = args
            .inputs
            .iter()
            .map(|path| Box::new(FileSource::new(path)) as Box<dyn SourceLoader>)
            .collect();

        self.status("[*]".blue(), &format!("Parsing {} input(s)...", sources.len()));

        let progress = self.progress_bar(sources.len() as u64, args.stdout);
        let outcomes = BatchExecutor::new(config.clone()).execute(&sources, output.as_ref(), |outcome| {
            progress.set_message(outcome.name.clone());
            progress.inc(1);
        });
        progress.finish_and_clear();

        let failures = outcomes.iter().filter(|outcome| outcome.result.is_err()).count();
        for outcome in &outcomes {
            self.report(outcome, &args, &config);
        }

        if failures > 0 {
            return Err(anyhow::anyhow!("{} of {} input(s) failed", failures, outcomes.len()));
        }
        Ok(())
    }

    fn report(&self, outcome: &BatchOutcome, args: &GenerateArgs, config: &Config) {
        match &outcome.result {
            Ok(Some(template)) => {
                let destination = match &args.output {
                    Some(path) => path.display().to_string(),
                    None if args.stdout => "stdout".to_string(),
                    None => format!("{}{}", outcome.name, config.output_suffix),
                };
                self.status(
                    "[+]".green(),
                    &format!(
                        "{}: {} field(s), {} bytes -> {}",
                        template.class_name, template.parsed_fields, template.accumulated_size, destination
                    ),
                );
            }
            Ok(None) => self.status("[!]".yellow(), &format!("{}: nothing to parse, no output written", outcome.name)),
            Err(e) => eprintln!("{} {}: {}", "[!]".red(), outcome.name, e),
        }
    }

    fn handle_classify(&self, args: ClassifyArgs) -> anyhow::Result<()> {
        let source = FileSource::new(&args.input);
        let lines = source
            .load()
            .with_context(|| format!("Failed to read {:?}", args.input))?;

        for line in &lines {
            let label = if Directive::is_directive(line.text()) {
                "DIRECTIVE".magenta()
            } else {
                paint(classify(line.text()))
            };
            println!("{:>5} {:<9} {}", line.number(), label, line.text());
        }
        Ok(())
    }

    fn handle_hash(&self, args: HashArgs) -> anyhow::Result<()> {
        println!("{:08X}", Fnv1Hasher.fingerprint(&args.text));
        Ok(())
    }

    fn progress_bar(&self, total: u64, hidden: bool) -> ProgressBar {
        if self.quiet || hidden || total < 2 {
            return ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
        }
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    fn status(&self, tag: ColoredString, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", tag, message);
        }
    }
}

fn paint(kind: LineKind) -> ColoredString {
    let name = kind.to_string();
    match kind {
        LineKind::NoOp => name.dimmed(),
        LineKind::Block => name.cyan(),
        LineKind::String => name.green(),
        LineKind::Number => name.yellow(),
        LineKind::Call => name.blue(),
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
