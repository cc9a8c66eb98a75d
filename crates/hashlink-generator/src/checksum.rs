/// Reduces an arbitrary string to a 32-bit integer.
///
/// Implementations must be deterministic. The reduction is lossy: distinct
/// inputs may share a value, and the stored mapping is the only way back to
/// the original string.
pub trait Checksum: Send + Sync + 'static {
    fn reduce(&self, input: &str) -> u32;
}

/// CRC-32 (IEEE 802.3) checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32;

impl Checksum for Crc32 {
    fn reduce(&self, input: &str) -> u32 {
        crc32fast::hash(input.as_bytes())
    }
}

impl<F> Checksum for F
where
    F: Fn(&str) -> u32 + Send + Sync + 'static,
{
    fn reduce(&self, input: &str) -> u32 {
        self(input)
    }
}
