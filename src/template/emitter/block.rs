// Tue Jan 15 2026 - Alex

use super::{Emission, FieldEmitter};
use crate::structure::MEMBER_INDENT;
use crate::template::context::GenerationContext;
use crate::template::InputLine;

pub struct BlockEmitter;

impl FieldEmitter for BlockEmitter {
    fn emit(&self, line: &InputLine, _next: Option<&InputLine>, _ctx: &mut GenerationContext) -> Emission {
        Emission::Comment(format!(
            "\n{}// comment: 'do/while' loop start/end detected, origin: {}\n",
            MEMBER_INDENT,
            line.trimmed()
        ))
    }
}
