// Tue Jan 15 2026 - Alex

pub mod block;
pub mod call;
pub mod scalar;
pub mod string;

pub use block::BlockEmitter;
pub use call::CallEmitter;
pub use scalar::ScalarEmitter;
pub use string::StringEmitter;

use crate::structure::{Field, FieldType, Size};
use crate::template::context::GenerationContext;
use crate::template::literal::OffsetToken;
use crate::template::{InputLine, LineKind};

/// Result of handing a classified line to its emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// One or more member declarations, with any padding before them.
    Fields(String),
    /// Audit comment only; the cursor is untouched.
    Comment(String),
    /// Deliberately ignored by a heuristic.
    Skipped(&'static str),
    /// The line had the right shape but could not be decoded.
    Unparsed,
}

pub trait FieldEmitter {
    fn emit(&self, line: &InputLine, next: Option<&InputLine>, ctx: &mut GenerationContext) -> Emission;
}

pub fn emitter_for(kind: LineKind) -> Option<&'static dyn FieldEmitter> {
    match kind {
        LineKind::Number => Some(&ScalarEmitter),
        LineKind::String => Some(&StringEmitter),
        LineKind::Call => Some(&CallEmitter),
        LineKind::Block => Some(&BlockEmitter),
        LineKind::NoOp => None,
    }
}

/// Builds a member named after its offset, flagging offsets that were not literals.
fn member(prefix: &str, token: &OffsetToken, type_info: FieldType, size: u64, ctx: &GenerationContext) -> Field {
    let field = Field::new(ctx.member_name(prefix, token), token.offset(), type_info, Size::new(size));
    match token {
        OffsetToken::Opaque(raw) => field.with_note(format!("offset `{}` is not a literal, placed at 0", raw)),
        OffsetToken::Parsed(_) => field,
    }
}

/// Reconciles the field against the cursor and renders it after any diagnostics.
fn place(ctx: &mut GenerationContext, field: Field) -> String {
    let mut out = ctx.reconcile(field.offset(), field.size());
    out.push_str(&field.to_string());
    out
}
