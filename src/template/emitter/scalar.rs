// Tue Jan 15 2026 - Alex

use super::{member, place, Emission, FieldEmitter};
use crate::structure::{CastWidth, FieldType};
use crate::template::context::GenerationContext;
use crate::template::literal::{offset_or_zero, parse_float_literal, parse_int_literal, render_f32, IntLiteral, OffsetToken};
use crate::template::InputLine;

const PACKED_COMMENT: &str = "two packed floats in a QWORD";

/// Emits fields for `*(TYPE *)(v1 + N) = VALUE;` writes.
pub struct ScalarEmitter;

/// Decoded pieces of one pointer assignment.
struct Assignment<'a> {
    token: OffsetToken,
    width: CastWidth,
    value: &'a str,
}

impl FieldEmitter for ScalarEmitter {
    fn emit(&self, line: &InputLine, _next: Option<&InputLine>, ctx: &mut GenerationContext) -> Emission {
        let Some(assignment) = split_assignment(line.text()) else {
            return Emission::Unparsed;
        };

        let text = if let Some(literal) = parse_int_literal(assignment.value) {
            emit_integer(ctx, &assignment, literal)
        } else if let Some(value) = parse_float_literal(assignment.value) {
            emit_float_literal(ctx, &assignment, value)
        } else {
            emit_non_literal(ctx, &assignment)
        };
        Emission::Fields(text)
    }
}

fn split_assignment(text: &str) -> Option<Assignment<'_>> {
    let (lhs, rhs) = text.split_once(" = ")?;
    let value = match rhs.rfind(';') {
        Some(end) => &rhs[..end],
        None => rhs,
    }
    .trim();
    if value.is_empty() {
        return None;
    }
    Some(Assignment {
        token: offset_or_zero(lhs),
        width: CastWidth::detect(lhs),
        value,
    })
}

fn emit_integer(ctx: &mut GenerationContext, assignment: &Assignment<'_>, literal: IntLiteral) -> String {
    let origin = assignment.value;
    match assignment.width {
        CastWidth::W16 => single(ctx, assignment, FieldType::Short, 2, format!("origin: {}, parsed: {}", origin, literal.value)),
        CastWidth::W8 => single(ctx, assignment, FieldType::Bool, 1, format!("origin: {}, parsed: {}", origin, literal.value)),
        CastWidth::W128 => single(
            ctx,
            assignment,
            FieldType::Bytes,
            16,
            format!("origin: {}, comment: OWORD write, 16 bytes set at once", origin),
        ),
        width => {
            let rendering = render_f32(literal.value as u32);
            let is_64 = literal.wide || width.is_64();

            if is_64 && rendering.is_plain() {
                let offset = assignment.token.offset();
                if literal.value == 0 && offset.is_aligned(8) {
                    return single(
                        ctx,
                        assignment,
                        FieldType::Long,
                        8,
                        format!("origin: {}, parsed: 0, comment: ambiguous: long, two floats, or two ints", origin),
                    );
                }
                return packed_floats(ctx, assignment, literal, rendering.text());
            }

            if !rendering.is_plain() {
                log::debug!("{} is a poor float ({}), keeping the integer", origin, rendering.text());
                let (type_info, size) = if is_64 { (FieldType::Long, 8) } else { (FieldType::Int, 4) };
                return single(ctx, assignment, type_info, size, format!("origin: {}, parsed: {}", origin, literal.value));
            }

            single(ctx, assignment, FieldType::Float, 4, format!("origin: {}, parsed: {}", origin, rendering.text()))
        }
    }
}

/// A QWORD literal that reads as a float in its low half: two 4-byte floats.
fn packed_floats(ctx: &mut GenerationContext, assignment: &Assignment<'_>, literal: IntLiteral, low: &str) -> String {
    let origin = assignment.value;
    let prefix = ctx.field_prefix().to_string();

    let first = member(&prefix, &assignment.token, FieldType::Float, 4, ctx)
        .with_detail(format!("origin: {}, parsed: {}, comment: {} (1/2 of 2)", origin, low, PACKED_COMMENT));
    let mut out = place(ctx, first);

    let second_token = match &assignment.token {
        OffsetToken::Parsed(offset) => OffsetToken::Parsed(offset.add(4)),
        OffsetToken::Opaque(raw) => OffsetToken::Opaque(format!("{}_plus4", raw)),
    };
    let high = (literal.value as u64 >> 32) as u32;
    let mut detail = format!("origin: {}, parsed: 0, comment: {} (2/2 of 2)", origin, PACKED_COMMENT);
    if high != 0 {
        detail.push_str(&format!(", high dword 0x{:X} not decoded", high));
    }
    let mut second = member(&prefix, &second_token, FieldType::Float, 4, ctx).with_detail(detail);
    if let OffsetToken::Opaque(_) = second_token {
        second = second.with_note("placed 4 bytes after the first half");
    }
    out.push_str(&place(ctx, second));
    out
}

fn emit_float_literal(ctx: &mut GenerationContext, assignment: &Assignment<'_>, value: f64) -> String {
    let (type_info, size) = if assignment.width.is_64() {
        (FieldType::Double, 8)
    } else {
        (FieldType::Float, 4)
    };
    single(ctx, assignment, type_info, size, format!("origin: {}, parsed: {}", assignment.value, value))
}

fn emit_non_literal(ctx: &mut GenerationContext, assignment: &Assignment<'_>) -> String {
    log::debug!("value `{}` is not a literal, typing by cast width", assignment.value);
    let type_info = FieldType::integer_for(assignment.width);
    let size = match assignment.width {
        CastWidth::W128 | CastWidth::Unknown => 4,
        width => width.bytes(),
    };
    single(
        ctx,
        assignment,
        type_info,
        size,
        format!("origin: {}, comment: value is not a literal", assignment.value),
    )
}

fn single(ctx: &mut GenerationContext, assignment: &Assignment<'_>, type_info: FieldType, size: u64, detail: String) -> String {
    let prefix = ctx.field_prefix().to_string();
    let field = member(&prefix, &assignment.token, type_info, size, ctx).with_detail(detail);
    place(ctx, field)
}
