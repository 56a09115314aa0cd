// Tue Jan 13 2026 - Alex

//! Literal and pointer-arithmetic extraction from decompiler lines.
//!
//! Nothing here evaluates expressions: offsets are read from the three shapes the
//! decompiler prints (`(v1 + N)`, `(v1 - N)` and `((TYPE *)v1 + N)`), values from
//! integer or float literals. Anything else degrades to an opaque token.

use crate::structure::{CastWidth, Offset};
use once_cell::sync::Lazy;
use regex::Regex;

static SCALED_ADDEND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\s*\(\s*([A-Za-z_][A-Za-z0-9_ ]*?)\s*\*\s*\)\s*[av]\d{1,2}\s*([+-])\s*([A-Za-z0-9_]+)\s*\)")
        .expect("scaled addend pattern")
});

static PLAIN_ADDEND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[av]\d{1,2}\s*([+-])\s*([A-Za-z0-9_]+)").expect("plain addend pattern"));

const INT_SUFFIXES: &[&str] = &["ui64", "i64", "ull", "ll", "ul", "u", "l"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLiteral {
    pub value: i64,
    /// Carried an `i64`/`ui64` suffix.
    pub wide: bool,
}

/// Parses `0x40000000i64`, `16`, `-1`, `0x10ui64`, `5u`.
pub fn parse_int_literal(token: &str) -> Option<IntLiteral> {
    let token = token.trim();
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, token),
    };

    let lower = body.to_ascii_lowercase();
    let wide = lower.ends_with("i64");
    let digits = INT_SUFFIXES
        .iter()
        .find_map(|suffix| lower.strip_suffix(suffix))
        .unwrap_or(lower.as_str());

    let magnitude = if let Some(hex) = digits.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()?
    } else {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u64>().ok()?
    };

    let value = magnitude as i64;
    Some(IntLiteral {
        value: if negative { value.wrapping_neg() } else { value },
        wide,
    })
}

/// Parses a decimal float literal such as `1.5`, `0.25f` or `1e-3`.
pub fn parse_float_literal(token: &str) -> Option<f64> {
    let token = token.trim();
    let body = token.strip_suffix(['f', 'F']).unwrap_or(token);
    if !(body.contains('.') || body.contains('e') || body.contains('E')) || body.starts_with("0x") {
        return None;
    }
    body.parse::<f64>().ok()
}

/// Text form of a 32-bit pattern read as a float.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatRendering {
    Plain(String),
    /// Only representable with an exponent or not finite: a poor float guess.
    Exponent(String),
}

impl FloatRendering {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Exponent(text) => text,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }
}

pub fn render_f32(bits: u32) -> FloatRendering {
    let value = f32::from_bits(bits);
    if !value.is_finite() {
        return FloatRendering::Exponent(format!("{:E}", value));
    }
    let magnitude = value.abs();
    if value == 0.0 || (1e-5..1e7).contains(&magnitude) {
        FloatRendering::Plain(format!("{}", value))
    } else {
        FloatRendering::Exponent(format!("{:E}", value))
    }
}

/// Byte offset read from a line, or the raw token when it is not a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetToken {
    Parsed(Offset),
    Opaque(String),
}

impl OffsetToken {
    /// Numeric offset used for reconciliation; opaque tokens count as 0.
    pub fn offset(&self) -> Offset {
        match self {
            Self::Parsed(offset) => *offset,
            Self::Opaque(_) => Offset::zero(),
        }
    }

    pub fn name_suffix(&self) -> String {
        match self {
            Self::Parsed(offset) => offset.name_suffix(),
            Self::Opaque(token) => format!("{}_int", token),
        }
    }
}

/// Finds the addend applied to the tracked pointer, `None` if there is none.
pub fn extract_offset(text: &str) -> Option<OffsetToken> {
    if let Some(caps) = SCALED_ADDEND.captures(text) {
        let width = CastWidth::detect(&caps[1]);
        let token = &caps[3];
        if width == CastWidth::Unknown {
            return Some(OffsetToken::Opaque(token.to_string()));
        }
        return Some(signed_token(&caps[2], token, width.bytes() as i64));
    }

    PLAIN_ADDEND
        .captures(text)
        .map(|caps| signed_token(&caps[1], &caps[2], 1))
}

/// Like [`extract_offset`], defaulting to offset 0 when no addend is present.
pub fn offset_or_zero(text: &str) -> OffsetToken {
    extract_offset(text).unwrap_or(OffsetToken::Parsed(Offset::zero()))
}

fn signed_token(sign: &str, token: &str, scale: i64) -> OffsetToken {
    match parse_int_literal(token) {
        Some(literal) => {
            let magnitude = literal.value.wrapping_mul(scale);
            let value = if sign == "-" { magnitude.wrapping_neg() } else { magnitude };
            OffsetToken::Parsed(Offset::new(value))
        }
        None => OffsetToken::Opaque(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_literals() {
        assert_eq!(parse_int_literal("0x40000000i64"), Some(IntLiteral { value: 0x40000000, wide: true }));
        assert_eq!(parse_int_literal("16"), Some(IntLiteral { value: 16, wide: false }));
        assert_eq!(parse_int_literal("-1"), Some(IntLiteral { value: -1, wide: false }));
        assert_eq!(parse_int_literal("0x10ui64").map(|l| l.value), Some(16));
        assert_eq!(parse_int_literal("0i64"), Some(IntLiteral { value: 0, wide: true }));
        assert_eq!(parse_int_literal("0xFFFFFFFFFFFFFFFFi64").map(|l| l.value), Some(-1));
        assert_eq!(parse_int_literal("v3"), None);
        assert_eq!(parse_int_literal("1.5"), None);
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(parse_float_literal("1.5"), Some(1.5));
        assert_eq!(parse_float_literal("0.25f"), Some(0.25));
        assert_eq!(parse_float_literal("16"), None);
    }

    #[test]
    fn test_float_rendering() {
        assert_eq!(render_f32(0x40000000), FloatRendering::Plain("2".to_string()));
        assert_eq!(render_f32(0x3F000000), FloatRendering::Plain("0.5".to_string()));
        assert_eq!(render_f32(0), FloatRendering::Plain("0".to_string()));
        assert!(!render_f32(5).is_plain());
        assert!(!render_f32(0x7FC00000).is_plain());
        assert_eq!(render_f32(0x4B000000), FloatRendering::Plain("8388608".to_string()));
        assert!(!render_f32(0x55000000).is_plain());
    }

    #[test]
    fn test_plain_offsets() {
        assert_eq!(extract_offset("*(_DWORD *)(v1 + 16)"), Some(OffsetToken::Parsed(Offset::new(16))));
        assert_eq!(extract_offset("sub_1401((__int64 *)(a1 + 0x30));"), Some(OffsetToken::Parsed(Offset::new(48))));
        assert_eq!(extract_offset("strncpy(v1 - 8"), Some(OffsetToken::Parsed(Offset::new(-8))));
        assert_eq!(extract_offset("*(_DWORD *)v1"), None);
        assert_eq!(offset_or_zero("*(_DWORD *)v1"), OffsetToken::Parsed(Offset::zero()));
    }

    #[test]
    fn test_scaled_offsets() {
        assert_eq!(extract_offset("*((_DWORD *)v1 + 3)"), Some(OffsetToken::Parsed(Offset::new(12))));
        assert_eq!(extract_offset("*((_BYTE *)a1 + 20)"), Some(OffsetToken::Parsed(Offset::new(20))));
        assert_eq!(extract_offset("sub_1((_QWORD *)v1 + 6);"), Some(OffsetToken::Parsed(Offset::new(48))));
    }

    #[test]
    fn test_opaque_offsets() {
        let token = extract_offset("*(_DWORD *)(v1 + v3)").unwrap();
        assert_eq!(token, OffsetToken::Opaque("v3".to_string()));
        assert_eq!(token.offset(), Offset::zero());
        assert_eq!(token.name_suffix(), "v3_int");
    }
}
