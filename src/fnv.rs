//! FNV-1a hashing.
//!
//! Parameters from <http://www.isthe.com/chongo/tech/comp/fnv/index.html#FNV-param>.
//! FNV-1a uses the same offset basis and prime as FNV-1; only the order of
//! the XOR and the multiply differs. Multiplication wraps modulo 2^32 / 2^64.

use core::hash::{BuildHasher, Hasher};

pub const FNV_PRIME_32: u32 = 16_777_619;
pub const FNV_OFFSET_BASIS_32: u32 = 2_166_136_261;

pub const FNV_PRIME_64: u64 = 1_099_511_628_211;
pub const FNV_OFFSET_BASIS_64: u64 = 14_695_981_039_346_656_037;

/// 32-bit FNV-1a digest of `data`. The empty input hashes to the offset basis.
#[inline]
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut h = Fnv1a32::default();
    h.write(data);
    h.digest()
}

/// 64-bit FNV-1a digest of `data`.
#[inline]
pub fn fnv1a_64(data: &[u8]) -> u64 {
    let mut h = Fnv1a64::default();
    h.write(data);
    h.finish()
}

/// Narrow a 32-bit hash to `bits` bits by XOR-folding the excess high bits
/// into the low window: `(h >> bits) ^ (h & mask)`.
///
/// `bits` must be in `1..=32`; 32 returns `hash` unchanged.
pub fn xor_fold(hash: u32, bits: u32) -> u32 {
    assert!((1..=32).contains(&bits), "fold width out of range: {bits}");
    if bits == 32 {
        return hash;
    }
    let mask = (1u32 << bits) - 1;
    (hash >> bits) ^ (hash & mask)
}

/// Streaming 32-bit FNV-1a state.
#[derive(Debug, Copy, Clone)]
pub struct Fnv1a32(u32);

impl Default for Fnv1a32 {
    fn default() -> Self {
        Fnv1a32(FNV_OFFSET_BASIS_32)
    }
}

impl Fnv1a32 {
    /// The 32-bit digest; `finish` widens the same value to `u64`.
    #[inline]
    pub fn digest(&self) -> u32 {
        self.0
    }
}

impl Hasher for Fnv1a32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u32).wrapping_mul(FNV_PRIME_32);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0 as u64
    }
}

/// Streaming 64-bit FNV-1a state.
#[derive(Debug, Copy, Clone)]
pub struct Fnv1a64(u64);

impl Default for Fnv1a64 {
    fn default() -> Self {
        Fnv1a64(FNV_OFFSET_BASIS_64)
    }
}

impl Hasher for Fnv1a64 {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u64).wrapping_mul(FNV_PRIME_64);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

/// `BuildHasher` for plugging FNV-1a (32-bit) into std collections.
#[derive(Debug, Copy, Clone, Default)]
pub struct BuildFnv1a32;

impl BuildHasher for BuildFnv1a32 {
    type Hasher = Fnv1a32;
    fn build_hasher(&self) -> Fnv1a32 {
        Fnv1a32::default()
    }
}

/// `BuildHasher` for plugging FNV-1a (64-bit) into std collections.
#[derive(Debug, Copy, Clone, Default)]
pub struct BuildFnv1a64;

impl BuildHasher for BuildFnv1a64 {
    type Hasher = Fnv1a64;
    fn build_hasher(&self) -> Fnv1a64 {
        Fnv1a64::default()
    }
}
