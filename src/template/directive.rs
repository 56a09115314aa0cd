// Tue Jan 13 2026 - Alex

//! Operator directives embedded in the input.
//!
//! Directives are hand-written, so unlike body lines a malformed one aborts
//! the run instead of degrading.

use crate::template::context::{Behavior, GenerationContext, SubroutineDescriptor};
use crate::template::{InputLine, TemplateError, TemplateResult};

const DIRECTIVE_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `#sub <name> <TargetType> <size>`
    Subroutine(SubroutineDescriptor),
    /// `#class <Name>`
    ClassName(String),
    /// `#nostrnull`
    DisableStringNullSkip,
    /// `#nolower`
    DisableCaseNormalizationSkip,
    /// `#size <bytes>`
    TotalSize(u64),
    /// `#logsize`
    LogAccumulatedSize,
    /// `#strfixup`
    EnableStringNullFixup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Subroutine,
    ClassName,
    NoStringNull,
    NoLower,
    Size,
    LogSize,
    StringFixup,
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("sub", Keyword::Subroutine),
    ("class", Keyword::ClassName),
    ("nostrnull", Keyword::NoStringNull),
    ("nolower", Keyword::NoLower),
    ("size", Keyword::Size),
    ("logsize", Keyword::LogSize),
    ("strfixup", Keyword::StringFixup),
];

impl Directive {
    /// Whether the line starts with a recognised directive keyword.
    pub fn is_directive(text: &str) -> bool {
        keyword_of(text).is_some()
    }

    pub fn parse(line: &InputLine) -> TemplateResult<Option<Directive>> {
        let Some((keyword, name)) = keyword_of(line.text()) else {
            return Ok(None);
        };
        let args: Vec<&str> = line.trimmed().split_whitespace().skip(1).collect();
        let malformed = |reason: String| TemplateError::MalformedDirective {
            line: line.number(),
            directive: name.to_string(),
            reason,
        };

        let expected = match keyword {
            Keyword::Subroutine => 3,
            Keyword::ClassName | Keyword::Size => 1,
            _ => 0,
        };
        if args.len() != expected {
            return Err(malformed(format!("expected {} argument(s), found {}", expected, args.len())));
        }

        let directive = match keyword {
            Keyword::Subroutine => Directive::Subroutine(SubroutineDescriptor {
                name: args[0].to_string(),
                target_type: args[1].to_string(),
                byte_size: parse_decimal(args[2]).map_err(malformed)?,
            }),
            Keyword::ClassName => Directive::ClassName(args[0].to_string()),
            Keyword::NoStringNull => Directive::DisableStringNullSkip,
            Keyword::NoLower => Directive::DisableCaseNormalizationSkip,
            Keyword::Size => Directive::TotalSize(parse_decimal(args[0]).map_err(malformed)?),
            Keyword::LogSize => Directive::LogAccumulatedSize,
            Keyword::StringFixup => Directive::EnableStringNullFixup,
        };
        Ok(Some(directive))
    }

    pub fn apply(self, ctx: &mut GenerationContext) {
        match self {
            Directive::Subroutine(descriptor) => ctx.register_subroutine(descriptor),
            Directive::ClassName(name) => ctx.set_class_name(name),
            Directive::DisableStringNullSkip => ctx.set_behavior(Behavior::SKIP_STRING_NULL, false),
            Directive::DisableCaseNormalizationSkip => ctx.set_behavior(Behavior::SKIP_CASE_NORMALIZATION, false),
            Directive::TotalSize(size) => ctx.set_expected_size(size),
            Directive::LogAccumulatedSize => ctx.set_behavior(Behavior::LOG_ACCUMULATED_SIZE, true),
            Directive::EnableStringNullFixup => ctx.set_behavior(Behavior::STRING_NULL_FIXUP, true),
        }
    }
}

/// Applies every directive in the input before any body line is looked at.
pub struct DirectivePreprocessor;

impl DirectivePreprocessor {
    pub fn run(lines: &[InputLine], ctx: &mut GenerationContext) -> TemplateResult<usize> {
        let mut applied = 0;
        for line in lines {
            if let Some(directive) = Directive::parse(line)? {
                log::debug!("lineN: {:<6} | directive {:?}", line.number(), directive);
                directive.apply(ctx);
                applied += 1;
            }
        }
        Ok(applied)
    }
}

fn keyword_of(text: &str) -> Option<(Keyword, &str)> {
    let first = text.trim().split_whitespace().next()?;
    let name = first.strip_prefix(DIRECTIVE_MARKER)?;
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == name)
        .map(|(keyword, kind)| (*kind, *keyword))
}

fn parse_decimal(token: &str) -> Result<u64, String> {
    token
        .parse::<u64>()
        .map_err(|_| format!("`{}` is not a decimal byte count", token))
}
