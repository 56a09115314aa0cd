// Tue Jan 15 2026 - Alex

use super::{member, place, Emission, FieldEmitter};
use crate::structure::FieldType;
use crate::template::classifier::is_zero_assignment;
use crate::template::context::{Behavior, GenerationContext};
use crate::template::literal::{offset_or_zero, parse_int_literal};
use crate::template::InputLine;

/// Emits a fixed-size string member for `strncpy(v1 + N, "literal", SIZE);`.
pub struct StringEmitter;

impl FieldEmitter for StringEmitter {
    fn emit(&self, line: &InputLine, next: Option<&InputLine>, ctx: &mut GenerationContext) -> Emission {
        let args: Vec<&str> = line.text().split(',').collect();
        if args.len() != 3 {
            log::debug!("expected 3 strncpy arguments, found {}", args.len());
            return Emission::Unparsed;
        }

        let token = offset_or_zero(args[0]);
        let size_text = args[2].trim().trim_end_matches(';').trim_end_matches(')').trim();
        let origin = args[1].trim();

        let prefix = ctx.field_prefix().to_string();
        let field = match parse_int_literal(size_text) {
            Some(literal) if literal.value >= 0 => {
                member(&prefix, &token, FieldType::String, literal.value as u64, ctx).with_detail(format!("origin: {}", origin))
            }
            _ => member(&prefix, &token, FieldType::String, 0, ctx)
                .with_note(format!("size `{}` is not a literal", size_text))
                .with_size_label("unknown")
                .with_detail(format!("origin: {}", origin)),
        };
        let out = place(ctx, field);

        if ctx.is_enabled(Behavior::SKIP_STRING_NULL) && next.is_some_and(|next| is_zero_assignment(next.text())) {
            ctx.suppress_next();
        }
        Emission::Fields(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::context::LineState;

    const COPY: &str = "  strncpy(v1 + 32, \"abc\", 0x10ui64);";
    const TERMINATOR: &str = "  *(_BYTE *)(v1 + 47) = 0;";

    fn fields(emission: Emission) -> String {
        match emission {
            Emission::Fields(out) => out,
            other => panic!("unexpected emission: {:?}", other),
        }
    }

    #[test]
    fn test_string_field() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        let out = fields(StringEmitter.emit(&InputLine::new(0, COPY), None, &mut ctx));
        assert!(out.contains("[NMS(Size = 0x10, Ignore = false)]"));
        assert!(out.contains("public string Unknown20;"));
        assert!(out.contains("offset: 32, sz: 16, origin: \"abc\""));
        assert_eq!(ctx.cursor().end(), 48);
        assert_eq!(ctx.line_state(), LineState::Normal);
    }

    #[test]
    fn test_terminator_line_is_suppressed() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        let next = InputLine::new(1, TERMINATOR);
        fields(StringEmitter.emit(&InputLine::new(0, COPY), Some(&next), &mut ctx));
        assert_eq!(ctx.line_state(), LineState::SuppressNext);
    }

    #[test]
    fn test_terminator_kept_when_disabled() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        ctx.set_behavior(Behavior::SKIP_STRING_NULL, false);
        let next = InputLine::new(1, TERMINATOR);
        fields(StringEmitter.emit(&InputLine::new(0, COPY), Some(&next), &mut ctx));
        assert_eq!(ctx.line_state(), LineState::Normal);
    }

    #[test]
    fn test_non_terminator_next_line_is_kept() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        let next = InputLine::new(1, "  *(_DWORD *)(v1 + 48) = 0x3F800000;");
        fields(StringEmitter.emit(&InputLine::new(0, COPY), Some(&next), &mut ctx));
        assert_eq!(ctx.line_state(), LineState::Normal);
    }

    #[test]
    fn test_negative_and_missing_addend() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        let out = fields(StringEmitter.emit(&InputLine::new(0, "  strncpy((char *)v1, \"x\", 0x20ui64);"), None, &mut ctx));
        assert!(out.contains("public string Unknown0;"));

        let out = fields(StringEmitter.emit(&InputLine::new(1, "  strncpy(v1 - 16, \"x\", 0x10ui64);"), None, &mut ctx));
        assert!(out.contains("public string Unknownneg10;"));
        assert!(out.contains("offset moved backward"));
    }

    #[test]
    fn test_wrong_argument_count() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        let emission = StringEmitter.emit(&InputLine::new(0, "  strncpy(v1 + 8, \"a,b\", 0x10ui64);"), None, &mut ctx);
        assert_eq!(emission, Emission::Unparsed);
    }
}
