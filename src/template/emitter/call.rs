// Tue Jan 15 2026 - Alex

use super::{member, place, Emission, FieldEmitter};
use crate::structure::FieldType;
use crate::template::classifier::{is_case_normalization_call, is_pointer_assignment};
use crate::template::context::{Behavior, GenerationContext};
use crate::template::literal::{extract_offset, offset_or_zero, OffsetToken};
use crate::template::InputLine;

const PLACEHOLDER_PREFIX: &str = "Subroutine";

/// Emits a member for a call that receives a pointer into the structure.
///
/// Registered subroutines expand to their declared type; anything else becomes a
/// byte array sized by the distance to the next write.
pub struct CallEmitter;

impl FieldEmitter for CallEmitter {
    fn emit(&self, line: &InputLine, next: Option<&InputLine>, ctx: &mut GenerationContext) -> Emission {
        let text = line.text();
        if ctx.is_enabled(Behavior::SKIP_CASE_NORMALIZATION) && is_case_normalization_call(text) {
            return Emission::Skipped("case normalization call");
        }

        let token = offset_or_zero(text);
        let callee = callee_name(text);
        let origin = line.trimmed();

        if let Some(descriptor) = ctx.find_subroutine(text).cloned() {
            let field = member(&descriptor.target_type, &token, FieldType::Named(descriptor.target_type.clone()), descriptor.byte_size, ctx)
                .with_note(format!("call to subroutine: {}, expanded as {}", callee, descriptor.target_type))
                .with_detail(format!("origin: {}", origin));
            return Emission::Fields(format!("\n{}", place(ctx, field)));
        }

        let offset = token.offset();
        let delta = match next.and_then(|next| next_write_offset(next.text())) {
            Some(OffsetToken::Parsed(next_offset)) if next_offset > offset => next_offset.as_i64().checked_sub(offset.as_i64()),
            _ => None,
        };

        let mut field = member(PLACEHOLDER_PREFIX, &token, FieldType::Bytes, delta.unwrap_or(0) as u64, ctx)
            .with_note(format!("call to subroutine: {}", callee))
            .with_note("filling with bytes as there is no way to expand it for now")
            .with_detail(format!("origin: {}", origin));
        if delta.is_none() {
            field = field.with_size_label("unknown");
        }
        Emission::Fields(format!("\n{}", place(ctx, field)))
    }
}

/// Offset the next line writes to; for an assignment only the target side counts.
fn next_write_offset(text: &str) -> Option<OffsetToken> {
    let target = match text.split_once(" = ") {
        Some((lhs, _)) if is_pointer_assignment(text) => lhs,
        _ => text,
    };
    extract_offset(target)
}

/// Identifier directly before the first `(`: `v3 = sub_1400(v1)` gives `sub_1400`.
fn callee_name(text: &str) -> &str {
    let head = text.trim().split('(').next().unwrap_or_default();
    head.rsplit(|c: char| c.is_whitespace() || c == '=')
        .find(|part| !part.is_empty())
        .unwrap_or(head)
}
