// Tue Jan 15 2026 - Alex

/// Maps text to a 32-bit fingerprint used for provenance and synthesized names.
pub trait ContentHasher: Send + Sync {
    fn fingerprint(&self, text: &str) -> u32;
}

/// Compute hash digests for data
pub struct HashComputer;

impl HashComputer {
    const FNV_PRIME: u32 = 0x811C9DC5;

    /// FNV-1 with a zero basis: multiply, then xor each byte.
    pub fn fnv1_zero_basis(data: impl IntoIterator<Item = u8>) -> u32 {
        let mut hash: u32 = 0;
        for byte in data {
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            hash ^= byte as u32;
        }
        hash
    }
}

/// Hashes each character truncated to its low byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1Hasher;

impl ContentHasher for Fnv1Hasher {
    fn fingerprint(&self, text: &str) -> u32 {
        HashComputer::fnv1_zero_basis(text.chars().map(|c| c as u32 as u8))
    }
}
