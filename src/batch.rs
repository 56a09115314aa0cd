// Tue Jan 13 2026 - Alex

use crate::config::Config;
use crate::source::{OutputWriter, SourceLoader};
use crate::template::{GeneratedTemplate, Generator, TemplateResult};
use rayon::prelude::*;

/// What happened to one input of a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: TemplateResult<Option<GeneratedTemplate>>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.result, Ok(Some(_)))
    }
}

/// Runs one generator per input, in parallel or in order.
pub struct BatchExecutor {
    config: Config,
    thread_count: usize,
    parallel: bool,
}

impl BatchExecutor {
    pub fn new(config: Config) -> Self {
        Self {
            thread_count: config.max_threads.max(1),
            parallel: config.parallel,
            config,
        }
    }

    pub fn execute<F>(&self, sources: &[Box<dyn SourceLoader>], output: &dyn OutputWriter, on_done: F) -> Vec<BatchOutcome>
    where
        F: Fn(&BatchOutcome) + Send + Sync,
    {
        let run = |source: &Box<dyn SourceLoader>| {
            let outcome = self.process(source.as_ref(), output);
            on_done(&outcome);
            outcome
        };

        if !self.parallel || sources.len() < 2 {
            return sources.iter().map(run).collect();
        }

        match rayon::ThreadPoolBuilder::new().num_threads(self.thread_count).build() {
            Ok(pool) => pool.install(|| sources.par_iter().map(run).collect()),
            Err(e) => {
                log::warn!("failed to build thread pool, running sequentially: {}", e);
                sources.iter().map(run).collect()
            }
        }
    }

    fn process(&self, source: &dyn SourceLoader, output: &dyn OutputWriter) -> BatchOutcome {
        let name = source.name();
        let result = source.load().and_then(|lines| {
            let generated = Generator::new(&self.config).generate(&lines)?;
            if let Some(template) = &generated {
                output.write(&name, &template.text)?;
            }
            Ok(generated)
        });
        BatchOutcome { name, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemoryOutput, MemorySource};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sources() -> Vec<Box<dyn SourceLoader>> {
        vec![
            Box::new(MemorySource::new("a", "void sub_1(a1)\n  *(_DWORD *)(a1 + 0) = 0;\n")),
            Box::new(MemorySource::new("b", "void sub_2(a1)\n  *(_WORD *)(a1 + 2) = 1;\n")),
            Box::new(MemorySource::new("c", "// no body here\n")),
            Box::new(MemorySource::new("d", "#size x\nvoid sub_3(a1)\n")),
        ]
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel_out = MemoryOutput::new();
        let sequential_out = MemoryOutput::new();
        let done = AtomicUsize::new(0);

        let parallel = BatchExecutor::new(Config::default().with_parallel(true)).execute(&sources(), &parallel_out, |_| {
            done.fetch_add(1, Ordering::Relaxed);
        });
        BatchExecutor::new(Config::default().with_parallel(false)).execute(&sources(), &sequential_out, |_| {});

        assert_eq!(done.load(Ordering::Relaxed), 4);
        assert_eq!(parallel.iter().map(|o| o.name.as_str()).collect::<Vec<_>>(), ["a", "b", "c", "d"]);
        assert_eq!(parallel_out.len(), 2);
        assert_eq!(parallel_out.get("a"), sequential_out.get("a"));
        assert_eq!(parallel_out.get("b"), sequential_out.get("b"));
    }

    #[test]
    fn test_outcomes() {
        let outcomes = BatchExecutor::new(Config::default()).execute(&sources(), &MemoryOutput::new(), |_| {});
        assert!(outcomes[0].is_success());
        assert!(matches!(outcomes[2].result, Ok(None)));
        assert!(outcomes[3].result.is_err());
    }
}
