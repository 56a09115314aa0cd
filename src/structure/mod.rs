// Tue Jan 15 2026 - Alex

pub mod field;
pub mod offset;
pub mod size;
pub mod type_info;

pub use field::{Field, MEMBER_INDENT};
pub use offset::Offset;
pub use size::Size;
pub use type_info::{CastWidth, FieldType};
