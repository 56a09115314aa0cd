// Tue Jan 13 2026 - Alex

use std::fmt;

/// A source line and its 0-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    index: usize,
    text: String,
}

impl InputLine {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Numbers an ordered sequence of raw lines.
    pub fn from_lines<I, S>(lines: I) -> Vec<InputLine>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, text)| InputLine::new(index, text))
            .collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based number as shown to the operator.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    NoOp,
    Block,
    String,
    Number,
    Call,
}

impl LineKind {
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoOp => "NOP",
            Self::Block => "BLOCK",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Call => "CALL",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers() {
        let lines = InputLine::from_lines(["void sub_1(a1)", ""]);
        assert_eq!(lines[1].index(), 1);
        assert_eq!(lines[1].number(), 2);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_kind_honours_width() {
        assert_eq!(format!("{:<6}|", LineKind::Call), "CALL  |");
        assert_eq!(format!("{:<6}|", LineKind::Number), "NUMBER|");
    }
}
