// Tue Jan 13 2026 - Alex

use crate::structure::{FieldType, Offset, Size};
use std::fmt;

/// Indentation of class members in the generated stub.
pub const MEMBER_INDENT: &str = "\t\t";

/// One member declaration in the generated stub.
///
/// Rendered as optional note lines, the `NMS` size/ignore attribute, then the
/// declaration with its trailing origin comment. Each piece ends with a newline.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    offset: Offset,
    type_info: FieldType,
    size: Size,
    ignore: bool,
    size_label: Option<String>,
    notes: Vec<String>,
    detail: Option<String>,
}

impl Field {
    pub fn new(name: String, offset: Offset, type_info: FieldType, size: Size) -> Self {
        Self {
            name,
            offset,
            type_info,
            size,
            ignore: false,
            size_label: None,
            notes: Vec::new(),
            detail: None,
        }
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Replaces the decimal size in the trailing comment, e.g. with `unknown`.
    pub fn with_size_label(mut self, label: impl Into<String>) -> Self {
        self.size_label = Some(label.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.notes {
            writeln!(f, "{}// {}", MEMBER_INDENT, note)?;
        }
        writeln!(
            f,
            "{}[NMS(Size = {}, Ignore = {})]",
            MEMBER_INDENT,
            self.size.to_hex(),
            self.ignore
        )?;
        write!(
            f,
            "{}public {} {};{}// offset: {}, sz: ",
            MEMBER_INDENT, self.type_info, self.name, MEMBER_INDENT, self.offset
        )?;
        match &self.size_label {
            Some(label) => write!(f, "{}", label)?,
            None => write!(f, "{}", self.size)?,
        }
        if let Some(detail) = &self.detail {
            write!(f, ", {}", detail)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_rendering() {
        let field = Field::new("Unknown10".to_string(), Offset::new(16), FieldType::Float, Size::new(4))
            .with_detail("origin: 0x3F800000, parsed: 1");
        let text = field.to_string();
        assert_eq!(
            text,
            "\t\t[NMS(Size = 0x4, Ignore = false)]\n\t\tpublic float Unknown10;\t\t// offset: 16, sz: 4, origin: 0x3F800000, parsed: 1\n"
        );
    }

    #[test]
    fn test_padding_rendering() {
        let field = Field::new("PaddingA".to_string(), Offset::new(10), FieldType::Bytes, Size::new(6))
            .ignored()
            .with_note("missing 6 bytes at offset 10");
        let text = field.to_string();
        assert!(text.starts_with("\t\t// missing 6 bytes at offset 10\n"));
        assert!(text.contains("[NMS(Size = 0x6, Ignore = true)]"));
        assert!(text.contains("public byte[] PaddingA;"));
    }

    #[test]
    fn test_size_label() {
        let field = Field::new("Subroutine8".to_string(), Offset::new(8), FieldType::Bytes, Size::zero())
            .with_size_label("unknown");
        assert!(field.to_string().contains("offset: 8, sz: unknown"));
    }
}
