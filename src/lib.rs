// Tue Jan 15 2026 - Alex

pub mod batch;
pub mod config;
pub mod source;
pub mod structure;
pub mod template;
pub mod ui;
pub mod utils;

pub use batch::{BatchExecutor, BatchOutcome};
pub use config::{Config, OutputStyle};
pub use source::{FileOutput, FileSource, MemoryOutput, MemorySource, OutputWriter, SourceLoader, StdoutOutput};
pub use template::{GeneratedTemplate, Generator, InputLine, LineKind, TemplateError, TemplateResult};
