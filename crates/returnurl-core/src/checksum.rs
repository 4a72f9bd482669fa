/// Trait for computing the 32-bit checksum a token is derived from.
///
/// Implementations must be pure: the same input always yields the same
/// checksum, otherwise previously issued tokens stop resolving.
pub trait Checksum: Send + Sync + 'static {
    fn checksum(&self, data: &[u8]) -> u32;
}

/// CRC-32 (IEEE 802.3) checksum, the default token hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32;

impl Checksum for Crc32 {
    fn checksum(&self, data: &[u8]) -> u32 {
        crc32fast::hash(data)
    }
}
