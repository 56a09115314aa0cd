// Tue Jan 13 2026 - Alex

use crate::structure::{Field, FieldType, Offset, Size, MEMBER_INDENT};

/// End of the last placed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub offset: Offset,
    pub size: Size,
}

impl Cursor {
    pub fn end(&self) -> i64 {
        self.offset.as_i64().saturating_add(self.size.as_i64())
    }
}

/// What the caller knows about the line preceding the new field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileHints {
    pub previous_was_string: bool,
    /// Gap after a string may be taken as terminator slack instead of padding.
    pub absorb_string_slack: bool,
}

/// Tracks the cursor and accumulated size, inserting padding for gaps.
#[derive(Debug, Default)]
pub struct OffsetReconciler {
    cursor: Cursor,
    accumulated: u64,
}

impl OffsetReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn accumulated(&self) -> u64 {
        self.accumulated
    }

    /// Moves the cursor to a new field and returns the diagnostics and padding
    /// that must precede it in the output.
    pub fn reconcile(&mut self, offset: Offset, size: Size, hints: ReconcileHints) -> String {
        let mut out = String::new();
        let previous = self.cursor;
        let mut gap = offset.as_i64().saturating_sub(previous.end());

        if offset < previous.offset {
            log::warn!("offset moved backward from {} to {}", previous.offset, offset);
            out.push_str(&format!(
                "{}// WARNING: offset moved backward from {} to {}, overlapping or reordered write\n",
                MEMBER_INDENT, previous.offset, offset
            ));
        } else if gap < 0 {
            log::warn!("offset {} overlaps field at {} by {} bytes", offset, previous.offset, gap.unsigned_abs());
            out.push_str(&format!(
                "{}// WARNING: offset {} overlaps the field at {} (sz: {}) by {} bytes\n",
                MEMBER_INDENT,
                offset,
                previous.offset,
                previous.size,
                gap.unsigned_abs()
            ));
        }

        if gap > 0 && hints.absorb_string_slack && hints.previous_was_string {
            log::debug!(
                "absorbing {} bytes after string at {} as terminator slack",
                gap,
                previous.offset
            );
            self.accumulated = self.accumulated.saturating_add(gap as u64);
            gap = 0;
        }

        if gap > 0 {
            let pad_offset = Offset::new(previous.end());
            let padding = Field::new(
                format!("Padding{}", pad_offset.name_suffix()),
                pad_offset,
                FieldType::Bytes,
                Size::new(gap as u64),
            )
            .ignored()
            .with_note(format!("missing {} bytes at offset {}", gap, pad_offset))
            .with_note(gap_hint(gap, previous.offset, hints.previous_was_string))
            .with_detail("comment: auto padding");
            out.push('\n');
            out.push_str(&padding.to_string());
            out.push('\n');
        }

        self.accumulated = self
            .accumulated
            .saturating_add(size.as_u64())
            .saturating_add(gap.max(0) as u64);
        self.cursor = Cursor { offset, size };
        out
    }
}

fn gap_hint(gap: i64, previous: Offset, previous_was_string: bool) -> String {
    if previous_was_string {
        return format!("string at {} may use fewer bytes than its declared size (string underuse)", previous);
    }
    match gap {
        1 => format!("does {} contain a WORD?", previous),
        2 | 3 => format!("does {} contain a DWORD?", previous),
        6 | 7 => format!("does {} contain a QWORD?", previous),
        _ => "could be padding, a skipped subroutine or an oversized pointer access".to_string(),
    }
}
