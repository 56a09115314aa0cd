// Tue Jan 13 2026 - Alex

use std::fmt;

/// Type keyword of an emitted member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
    Named(String),
}

/// Width implied by the cast in `*(TYPE *)` or `*((TYPE *)base + n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastWidth {
    W8,
    W16,
    W32,
    W64,
    W128,
    Unknown,
}

impl FieldType {
    pub fn keyword(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "byte[]",
            Self::Named(name) => name,
        }
    }

    /// Integer member matching a cast width, used when the value is not decodable.
    pub fn integer_for(width: CastWidth) -> Self {
        match width {
            CastWidth::W8 => Self::Bool,
            CastWidth::W16 => Self::Short,
            CastWidth::W64 => Self::Long,
            CastWidth::W32 | CastWidth::W128 | CastWidth::Unknown => Self::Int,
        }
    }
}

impl CastWidth {
    // Order matters: `__int64` contains `int`, `unsigned __int16` contains `int`.
    const MARKERS: &'static [(&'static str, CastWidth)] = &[
        ("_OWORD", CastWidth::W128),
        ("__int128", CastWidth::W128),
        ("_QWORD", CastWidth::W64),
        ("__int64", CastWidth::W64),
        ("double", CastWidth::W64),
        ("_WORD", CastWidth::W16),
        ("__int16", CastWidth::W16),
        ("short", CastWidth::W16),
        ("_BYTE", CastWidth::W8),
        ("__int8", CastWidth::W8),
        ("char", CastWidth::W8),
        ("bool", CastWidth::W8),
        ("_DWORD", CastWidth::W32),
        ("__int32", CastWidth::W32),
        ("float", CastWidth::W32),
        ("int", CastWidth::W32),
    ];

    /// Detects the first width marker present in `text`.
    pub fn detect(text: &str) -> Self {
        for (marker, width) in Self::MARKERS {
            if text.contains(marker) {
                return *width;
            }
        }
        Self::Unknown
    }

    pub fn bytes(self) -> u64 {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W32 | Self::Unknown => 4,
            Self::W64 => 8,
            Self::W128 => 16,
        }
    }

    pub fn is_64(self) -> bool {
        self == Self::W64
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_prefers_wider_markers() {
        assert_eq!(CastWidth::detect("*(_QWORD *)(v1 + 8)"), CastWidth::W64);
        assert_eq!(CastWidth::detect("*(unsigned __int16 *)(v1 + 8)"), CastWidth::W16);
        assert_eq!(CastWidth::detect("*(_DWORD *)(v1 + 8)"), CastWidth::W32);
        assert_eq!(CastWidth::detect("*(_WORD *)(v1 + 8)"), CastWidth::W16);
        assert_eq!(CastWidth::detect("*(_BYTE *)(v1 + 8)"), CastWidth::W8);
        assert_eq!(CastWidth::detect("*(__int64 *)(a1 + 8)"), CastWidth::W64);
        assert_eq!(CastWidth::detect("*(v1 + 8)"), CastWidth::Unknown);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(FieldType::Bytes.keyword(), "byte[]");
        assert_eq!(FieldType::Named("GcColour".to_string()).keyword(), "GcColour");
        assert_eq!(FieldType::integer_for(CastWidth::W64), FieldType::Long);
    }
}
