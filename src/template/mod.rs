// Tue Jan 13 2026 - Alex

pub mod classifier;
pub mod context;
pub mod directive;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod line;
pub mod literal;
pub mod reconciler;

pub use classifier::classify;
pub use context::{Behavior, GenerationContext, SubroutineDescriptor};
pub use directive::Directive;
pub use error::{TemplateError, TemplateResult};
pub use generator::{GeneratedTemplate, Generator};
pub use line::{InputLine, LineKind};
