// Tue Jan 13 2026 - Alex

pub mod hash;
pub mod logging;

pub use hash::{ContentHasher, Fnv1Hasher, HashComputer};
pub use logging::LoggingUtils;
