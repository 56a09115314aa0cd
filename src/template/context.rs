// Tue Jan 13 2026 - Alex

use crate::structure::{Offset, Size};
use crate::template::classifier::is_string_copy;
use crate::template::literal::OffsetToken;
use crate::template::reconciler::{Cursor, OffsetReconciler, ReconcileHints};
use crate::template::InputLine;
use bitflags::bitflags;
use indexmap::IndexMap;

bitflags! {
    /// Heuristics that directives can switch on or off per input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Behavior: u32 {
        const SKIP_STRING_NULL = 1 << 0;
        const SKIP_CASE_NORMALIZATION = 1 << 1;
        const LOG_ACCUMULATED_SIZE = 1 << 2;
        const STRING_NULL_FIXUP = 1 << 3;
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self::SKIP_STRING_NULL | Self::SKIP_CASE_NORMALIZATION
    }
}

/// Operator-declared expansion of a called subroutine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubroutineDescriptor {
    pub name: String,
    pub target_type: String,
    pub byte_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    #[default]
    Normal,
    /// The next line is a string terminator write and is not classified.
    SuppressNext,
}

/// Mutable state of a single parse. Never shared between inputs.
#[derive(Debug)]
pub struct GenerationContext {
    reconciler: OffsetReconciler,
    descriptors: IndexMap<String, SubroutineDescriptor>,
    behavior: Behavior,
    expected_size: Option<u64>,
    class_name: Option<String>,
    field_prefix: String,
    previous_line: Option<String>,
    line_state: LineState,
}

impl GenerationContext {
    pub fn new(behavior: Behavior, field_prefix: impl Into<String>) -> Self {
        Self {
            reconciler: OffsetReconciler::new(),
            descriptors: IndexMap::new(),
            behavior,
            expected_size: None,
            class_name: None,
            field_prefix: field_prefix.into(),
            previous_line: None,
            line_state: LineState::Normal,
        }
    }

    pub fn is_enabled(&self, flag: Behavior) -> bool {
        self.behavior.contains(flag)
    }

    pub fn set_behavior(&mut self, flag: Behavior, enabled: bool) {
        self.behavior.set(flag, enabled);
    }

    pub fn register_subroutine(&mut self, descriptor: SubroutineDescriptor) {
        self.descriptors.insert(descriptor.name.clone(), descriptor);
    }

    /// First registered descriptor whose name occurs in `line`.
    ///
    /// Registration order decides when one name is a substring of another.
    pub fn find_subroutine(&self, line: &str) -> Option<&SubroutineDescriptor> {
        self.descriptors.values().find(|descriptor| line.contains(descriptor.name.as_str()))
    }

    pub fn expected_size(&self) -> Option<u64> {
        self.expected_size
    }

    pub fn set_expected_size(&mut self, size: u64) {
        self.expected_size = Some(size);
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn set_class_name(&mut self, name: impl Into<String>) {
        self.class_name = Some(name.into());
    }

    pub fn field_prefix(&self) -> &str {
        &self.field_prefix
    }

    pub fn member_name(&self, prefix: &str, token: &OffsetToken) -> String {
        format!("{}{}", prefix, token.name_suffix())
    }

    pub fn cursor(&self) -> Cursor {
        self.reconciler.cursor()
    }

    pub fn accumulated_size(&self) -> u64 {
        self.reconciler.accumulated()
    }

    pub fn set_previous_line(&mut self, line: &InputLine) {
        self.previous_line = Some(line.text().to_string());
    }

    pub fn previous_was_string(&self) -> bool {
        self.previous_line.as_deref().is_some_and(is_string_copy)
    }

    pub fn suppress_next(&mut self) {
        self.line_state = LineState::SuppressNext;
    }

    pub fn line_state(&self) -> LineState {
        self.line_state
    }

    /// Returns whether the current line is suppressed and resets the state.
    pub fn take_suppressed(&mut self) -> bool {
        std::mem::take(&mut self.line_state) == LineState::SuppressNext
    }

    pub fn reconcile(&mut self, offset: Offset, size: Size) -> String {
        let hints = ReconcileHints {
            previous_was_string: self.previous_was_string(),
            absorb_string_slack: self.is_enabled(Behavior::STRING_NULL_FIXUP)
                && self.is_enabled(Behavior::SKIP_STRING_NULL),
        };
        self.reconciler.reconcile(offset, size, hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, target_type: &str, byte_size: u64) -> SubroutineDescriptor {
        SubroutineDescriptor {
            name: name.to_string(),
            target_type: target_type.to_string(),
            byte_size,
        }
    }

    #[test]
    fn test_default_behavior() {
        let ctx = GenerationContext::new(Behavior::default(), "Unknown");
        assert!(ctx.is_enabled(Behavior::SKIP_STRING_NULL));
        assert!(ctx.is_enabled(Behavior::SKIP_CASE_NORMALIZATION));
        assert!(!ctx.is_enabled(Behavior::STRING_NULL_FIXUP));
        assert_eq!(ctx.line_state(), LineState::Normal);
    }

    #[test]
    fn test_subroutine_lookup_is_first_match() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        ctx.register_subroutine(descriptor("sub_1401", "Short", 8));
        ctx.register_subroutine(descriptor("sub_140141660", "GcGalaxyMarkerSettings", 112));
        let found = ctx.find_subroutine("  sub_140141660(v1 + 48);").unwrap();
        assert_eq!(found.target_type, "Short");
        assert!(ctx.find_subroutine("  sub_99(v1);").is_none());
    }

    #[test]
    fn test_suppression_is_consumed_once() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        assert!(!ctx.take_suppressed());
        ctx.suppress_next();
        assert!(ctx.take_suppressed());
        assert!(!ctx.take_suppressed());
    }

    #[test]
    fn test_previous_string_tracking() {
        let mut ctx = GenerationContext::new(Behavior::default(), "Unknown");
        assert!(!ctx.previous_was_string());
        ctx.set_previous_line(&InputLine::new(3, "  strncpy(v1 + 8, \"a\", 0x10ui64);"));
        assert!(ctx.previous_was_string());
    }
}
