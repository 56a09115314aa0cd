// Tue Jan 13 2026 - Alex

use std::fmt;

/// Signed byte offset into the structure under reconstruction.
///
/// Negative values come from `v1 - N` addends and are kept signed all the way
/// through reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset {
    value: i64,
}

impl Offset {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn as_i64(&self) -> i64 {
        self.value
    }

    pub fn is_aligned(&self, alignment: i64) -> bool {
        self.value % alignment == 0
    }

    pub fn add(&self, bytes: i64) -> Self {
        Self::new(self.value.saturating_add(bytes))
    }

    /// Hex suffix used in generated member names, e.g. `30` or `neg8`.
    pub fn name_suffix(&self) -> String {
        if self.value < 0 {
            format!("neg{:X}", self.value.unsigned_abs())
        } else {
            format!("{:X}", self.value)
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for Offset {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_suffix() {
        assert_eq!(Offset::new(48).name_suffix(), "30");
        assert_eq!(Offset::new(-8).name_suffix(), "neg8");
        assert_eq!(Offset::zero().name_suffix(), "0");
    }

    #[test]
    fn test_alignment() {
        assert!(Offset::new(16).is_aligned(8));
        assert!(!Offset::new(4).is_aligned(8));
        assert!(Offset::new(-8).is_aligned(8));
    }
}
