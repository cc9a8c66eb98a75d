//! Short code derivation.
//!
//! A long URL is reduced to a 32-bit integer by a [`Checksum`], and the
//! integer is rendered as a short string by a salted [`HashId`] encoder.

pub mod checksum;
pub mod error;
pub mod hashid;

pub use checksum::{Checksum, Crc32};
pub use error::EncodingError;
pub use hashid::{HashId, HashIdConfig};

use hashlink_core::ShortCode;

/// Trait for deriving short codes from original URLs.
///
/// Implementations are pure generators that don't interact with storage.
/// The same input always yields the same code, so two URLs whose derivations
/// meet will share a code.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self, original_url: &str) -> Result<ShortCode, EncodingError>;
}

/// Reduces the URL with `C`, then encodes the checksum with a [`HashId`].
#[derive(Debug, Clone)]
pub struct ChecksumGenerator<C> {
    checksum: C,
    hash_id: HashId,
}

impl<C: Checksum> ChecksumGenerator<C> {
    pub fn new(checksum: C, hash_id: HashId) -> Self {
        Self { checksum, hash_id }
    }

    pub fn hash_id(&self) -> &HashId {
        &self.hash_id
    }
}

impl<C: Checksum> Generator for ChecksumGenerator<C> {
    fn generate(&self, original_url: &str) -> Result<ShortCode, EncodingError> {
        let value = self.checksum.reduce(original_url);
        let encoded = self.hash_id.encode(u64::from(value));
        ShortCode::new(encoded).map_err(|e| EncodingError::InvalidOutput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = "tFZ2cQ7U8OQlSWOyZIoFdRusvkFvJh3A";

    fn generator() -> ChecksumGenerator<Crc32> {
        let config = HashIdConfig::builder().salt(SALT).min_length(4).build();
        ChecksumGenerator::new(Crc32, HashId::new(config).unwrap())
    }

    #[test]
    fn same_url_yields_same_code() {
        let generator = generator();

        let first = generator.generate("https://example.com/a").unwrap();
        let second = generator.generate("https://example.com/a").unwrap();

        assert_eq!(first, second);
        assert!(first.as_str().len() >= 4);
    }

    #[test]
    fn code_decodes_to_the_checksum() {
        let generator = generator();
        let url = "https://example.com/a";

        let code = generator.generate(url).unwrap();

        assert_eq!(
            generator.hash_id().decode(code.as_str()),
            Some(u64::from(Crc32.reduce(url)))
        );
    }

    #[test]
    fn different_urls_yield_different_codes() {
        let generator = generator();

        let first = generator.generate("https://example.com/a").unwrap();
        let second = generator.generate("https://example.com/b").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn colliding_checksums_share_a_code() {
        let config = HashIdConfig::builder().salt(SALT).min_length(4).build();
        let generator = ChecksumGenerator::new(|_: &str| 7_u32, HashId::new(config).unwrap());

        let first = generator.generate("https://one.example").unwrap();
        let second = generator.generate("https://two.example").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn min_length_beyond_sixty_four_yields_a_valid_code() {
        let config = HashIdConfig::builder().salt(SALT).min_length(80).build();
        let generator = ChecksumGenerator::new(Crc32, HashId::new(config).unwrap());

        let code = generator.generate("https://example.com/a").unwrap();

        assert!(code.as_str().len() >= 80);
    }

    #[test]
    fn non_url_safe_alphabet_is_reported_as_invalid_output() {
        let hash_id = HashId::new(
            HashIdConfig::builder()
                .salt(SALT)
                .alphabet("!#$%&()*+,./:;<=>?@[]^{|}~")
                .build(),
        )
        .unwrap();
        let generator = ChecksumGenerator::new(Crc32, hash_id);

        let err = generator.generate("https://example.com").unwrap_err();

        assert!(matches!(err, EncodingError::InvalidOutput(_)));
    }
}
