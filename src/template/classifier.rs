// Tue Jan 13 2026 - Alex

//! Line classification.
//!
//! Every rule is a plain predicate over the raw line text; [`classify`] applies
//! them in a fixed priority order and the first hit decides the [`LineKind`].

use crate::template::LineKind;
use once_cell::sync::Lazy;

/// Synthetic names the decompiler gives the structure pointer: `a0..a15`, `v0..v15`.
static TRACKED_VARIABLES: Lazy<Vec<String>> = Lazy::new(|| {
    ['a', 'v']
        .iter()
        .flat_map(|prefix| (0..=15).map(move |index| format!("{}{}", prefix, index)))
        .collect()
});

const STRING_COPY: &str = "strncpy";
const SUBROUTINE_PREFIX: &str = "sub_";

const CASE_NORMALIZATION_CALLS: &[&str] = &["tolower", "toupper", "_strlwr", "_strupr", "strlwr", "strupr"];

pub fn classify(line: &str) -> LineKind {
    if is_block(line) {
        return LineKind::Block;
    }
    if !touches_tracked_variable(line) {
        return LineKind::NoOp;
    }
    if is_string_copy(line) {
        return LineKind::String;
    }
    if is_pointer_assignment(line) {
        return LineKind::Number;
    }
    if is_call(line) {
        return LineKind::Call;
    }
    LineKind::NoOp
}

/// `  do` as a whole word or `  while` followed by a space or `(`.
pub fn is_block(line: &str) -> bool {
    marker_followed_by(line, "  do", |next| match next {
        None => true,
        Some(c) => c.is_whitespace() || c == '{',
    }) || marker_followed_by(line, "  while", |next| matches!(next, Some(' ') | Some('(')))
}

pub fn touches_tracked_variable(line: &str) -> bool {
    TRACKED_VARIABLES.iter().any(|name| line.contains(name.as_str()))
}

pub fn is_string_copy(line: &str) -> bool {
    line.contains(STRING_COPY)
}

pub fn is_pointer_assignment(line: &str) -> bool {
    line.contains("*(") && line.contains("*)") && line.contains(" = ")
}

pub fn is_call(line: &str) -> bool {
    line.trim_end().ends_with(");") && (line.contains(SUBROUTINE_PREFIX) || line.contains('_'))
}

/// `*(_BYTE *)(v1 + 47) = 0;` as inserted after a fixed-size string copy.
pub fn is_zero_assignment(line: &str) -> bool {
    let trimmed = line.trim();
    is_pointer_assignment(trimmed) && trimmed.ends_with(" = 0;")
}

pub fn is_case_normalization_call(line: &str) -> bool {
    CASE_NORMALIZATION_CALLS.iter().any(|name| line.contains(name))
}

fn marker_followed_by<F>(line: &str, marker: &str, accept: F) -> bool
where
    F: Fn(Option<char>) -> bool,
{
    line.match_indices(marker)
        .any(|(idx, _)| accept(line[idx + marker.len()..].chars().next()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_markers() {
        assert_eq!(classify("  do"), LineKind::Block);
        assert_eq!(classify("  do {"), LineKind::Block);
        assert_eq!(classify("  while ( v3 );"), LineKind::Block);
        assert_eq!(classify("    while (v2 < 4);"), LineKind::Block);
        assert!(!is_block("  double v4;"));
        assert!(!is_block(" do"));
    }

    #[test]
    fn test_block_wins_over_everything() {
        assert_eq!(classify("  do strncpy(v1 + 8, \"a\", 0x10ui64);"), LineKind::Block);
    }

    #[test]
    fn test_untracked_lines_are_noop() {
        assert_eq!(classify("  *(_DWORD *)(rbx + 8) = 0;"), LineKind::NoOp);
        assert_eq!(classify("  result = sub_140001000(b2);"), LineKind::NoOp);
        assert_eq!(classify("{"), LineKind::NoOp);
    }

    #[test]
    fn test_tracked_indices() {
        assert!(touches_tracked_variable("*(_DWORD *)(a15 + 4) = 1;"));
        assert!(touches_tracked_variable("sub_1(v0);"));
        assert!(!touches_tracked_variable("sub_1(x1);"));
    }

    #[test]
    fn test_string_number_call() {
        assert_eq!(classify("  strncpy(v1 + 32, \"abc\", 0x10ui64);"), LineKind::String);
        assert_eq!(classify("  *(_QWORD *)(v1 + 4) = 0x40000000i64;"), LineKind::Number);
        assert_eq!(classify("  sub_140141660(v1 + 48);"), LineKind::Call);
        assert_eq!(classify("  v1[2] = 0;"), LineKind::NoOp);
    }

    #[test]
    fn test_call_requires_terminator_and_underscore() {
        assert_eq!(classify("  foo(v1 + 8);"), LineKind::NoOp);
        assert_eq!(classify("  memset_s(v1 + 8);"), LineKind::Call);
        assert_eq!(classify("  sub_140141660(v1 + 48)"), LineKind::NoOp);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let lines = [
            "  *(_WORD *)(v1 + 2) = 7;",
            "  strncpy(v1 + 32, \"abc\", 0x10ui64);",
            "  sub_1401(v1 + 8);",
            "  do",
            "return v1;",
        ];
        for line in lines {
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn test_helpers() {
        assert!(is_zero_assignment("  *(_BYTE *)(v1 + 47) = 0;"));
        assert!(!is_zero_assignment("  *(_BYTE *)(v1 + 47) = 1;"));
        assert!(is_case_normalization_call("  _strlwr((char *)(v1 + 32));"));
        assert!(!is_case_normalization_call("  sub_1401(v1 + 8);"));
    }
}
