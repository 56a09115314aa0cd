// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("line {line}: malformed directive `{directive}`: {reason}")]
    MalformedDirective {
        line: usize,
        directive: String,
        reason: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
