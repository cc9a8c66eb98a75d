//! Salted, reversible integer encoder producing short alphanumeric strings.
//!
//! The scheme follows hashids: the alphabet is split into a working alphabet,
//! separators and guards, each permuted by the salt. A value is rendered in
//! base `len(alphabet)` behind a "lottery" character that reseeds the
//! permutation, and padded with guards and alphabet halves until the output
//! reaches the configured minimum length.
//!
//! Only single values are encoded; separators never appear in the output
//! but still shape the alphabet split, so codes match other hashids
//! implementations configured with the same salt and alphabet.

use crate::error::EncodingError;
use typed_builder::TypedBuilder;

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";
const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";
const MIN_ALPHABET_LENGTH: usize = 16;
const SEPARATOR_DIV: f64 = 3.5;
const GUARD_DIV: f64 = 12.0;

/// Settings for [`HashId`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct HashIdConfig {
    /// Seed for the alphabet permutation. Deployment specific.
    #[builder(default, setter(into))]
    salt: String,
    /// Shorter outputs are padded up to this many characters.
    #[builder(default = 0)]
    min_length: usize,
    #[builder(default = DEFAULT_ALPHABET.to_string(), setter(into))]
    alphabet: String,
}

/// A configured encoder. Construction validates the configuration, so
/// [`HashId::encode`] cannot fail.
#[derive(Debug, Clone)]
pub struct HashId {
    salt: Vec<char>,
    min_length: usize,
    alphabet: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
}

impl HashId {
    pub fn new(config: HashIdConfig) -> Result<Self, EncodingError> {
        let HashIdConfig {
            salt,
            min_length,
            alphabet,
        } = config;

        let mut unique: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            if c.is_whitespace() {
                return Err(EncodingError::AlphabetContainsWhitespace);
            }
            if unique.contains(&c) {
                return Err(EncodingError::DuplicateAlphabetChar(c));
            }
            unique.push(c);
        }
        if unique.len() < MIN_ALPHABET_LENGTH {
            return Err(EncodingError::AlphabetTooShort {
                len: unique.len(),
                min: MIN_ALPHABET_LENGTH,
            });
        }

        let salt: Vec<char> = salt.chars().collect();

        let mut separators: Vec<char> = DEFAULT_SEPARATORS
            .chars()
            .filter(|c| unique.contains(c))
            .collect();
        let mut alphabet: Vec<char> = unique
            .into_iter()
            .filter(|c| !separators.contains(c))
            .collect();
        consistent_shuffle(&mut separators, &salt);

        if separators.is_empty()
            || alphabet.len() as f64 / separators.len() as f64 > SEPARATOR_DIV
        {
            let mut separators_len = (alphabet.len() as f64 / SEPARATOR_DIV).ceil() as usize;
            if separators_len == 1 {
                separators_len = 2;
            }
            if separators_len > separators.len() {
                let diff = (separators_len - separators.len()).min(alphabet.len());
                separators.extend(alphabet.drain(..diff));
            } else {
                separators.truncate(separators_len);
            }
        }

        consistent_shuffle(&mut alphabet, &salt);

        let guard_count = (alphabet.len() as f64 / GUARD_DIV).ceil() as usize;
        let guards: Vec<char> = if alphabet.len() < 3 {
            separators.drain(..guard_count).collect()
        } else {
            alphabet.drain(..guard_count).collect()
        };

        Ok(Self {
            salt,
            min_length,
            alphabet,
            separators,
            guards,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Encodes `value`. The output is at least `min_length` characters and
    /// unique to `value` for this configuration.
    pub fn encode(&self, value: u64) -> String {
        let mut alphabet = self.alphabet.clone();
        let values_hash = value % 100;

        let lottery = alphabet[(values_hash % alphabet.len() as u64) as usize];
        let mut result = vec![lottery];

        self.reseed(&mut alphabet, lottery);
        result.extend(to_digits(value, &alphabet));

        if result.len() < self.min_length {
            let guard_index = (values_hash + result[0] as u64) % self.guards.len() as u64;
            result.insert(0, self.guards[guard_index as usize]);

            if result.len() < self.min_length {
                let guard_index = (values_hash + result[2] as u64) % self.guards.len() as u64;
                result.push(self.guards[guard_index as usize]);
            }
        }

        let half = alphabet.len() / 2;
        while result.len() < self.min_length {
            let salt = alphabet.clone();
            consistent_shuffle(&mut alphabet, &salt);

            let mut padded = Vec::with_capacity(alphabet.len() + result.len());
            padded.extend_from_slice(&alphabet[half..]);
            padded.extend_from_slice(&result);
            padded.extend_from_slice(&alphabet[..half]);
            result = padded;

            let excess = result.len().saturating_sub(self.min_length);
            if excess > 0 {
                let start = excess / 2;
                result = result[start..start + self.min_length].to_vec();
            }
        }

        result.into_iter().collect()
    }

    /// Recovers the value behind `code`.
    ///
    /// Returns `None` for strings this configuration could not have produced,
    /// including non-canonical spellings of a valid value.
    pub fn decode(&self, code: &str) -> Option<u64> {
        let chars: Vec<char> = code.chars().collect();
        let parts: Vec<&[char]> = chars.split(|c| self.guards.contains(c)).collect();
        let breakdown = if parts.len() == 2 || parts.len() == 3 {
            parts[1]
        } else {
            parts[0]
        };

        let (&lottery, digits) = breakdown.split_first()?;
        if digits.is_empty() || digits.iter().any(|c| self.separators.contains(c)) {
            return None;
        }

        let mut alphabet = self.alphabet.clone();
        self.reseed(&mut alphabet, lottery);
        let value = from_digits(digits, &alphabet)?;

        (self.encode(value) == code).then_some(value)
    }

    /// Reshuffles `alphabet` with `(lottery + salt + alphabet)` cut to the
    /// alphabet's length.
    fn reseed(&self, alphabet: &mut [char], lottery: char) {
        let mut buffer = Vec::with_capacity(1 + self.salt.len() + alphabet.len());
        buffer.push(lottery);
        buffer.extend_from_slice(&self.salt);
        buffer.extend_from_slice(alphabet);
        buffer.truncate(alphabet.len());
        consistent_shuffle(alphabet, &buffer);
    }
}

/// Salt-driven permutation. Deterministic for a given salt; empty salt is a
/// no-op.
fn consistent_shuffle(alphabet: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut v = 0;
    let mut p = 0;
    for i in (1..alphabet.len()).rev() {
        let code_point = salt[v] as usize;
        p += code_point;
        let j = (code_point + v + p) % i;
        alphabet.swap(i, j);
        v = (v + 1) % salt.len();
    }
}

fn to_digits(mut value: u64, alphabet: &[char]) -> Vec<char> {
    let base = alphabet.len() as u64;
    let mut digits = Vec::new();
    loop {
        digits.push(alphabet[(value % base) as usize]);
        value /= base;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

fn from_digits(digits: &[char], alphabet: &[char]) -> Option<u64> {
    let base = alphabet.len() as u64;
    digits.iter().try_fold(0_u64, |acc, c| {
        let position = alphabet.iter().position(|a| a == c)? as u64;
        acc.checked_mul(base)?.checked_add(position)
    })
}
