use crate::error::{Result, SimError};
use rand::Rng;
use std::{fmt, str::FromStr};

pub const KEY_LEN: usize = 12;

/// A synthetic 12-digit identifier.
///
/// Digits are stored as values in `0..=9`, so a `Key` can only exist once it
/// has been validated by [`Key::parse`] or produced by [`generate_key`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    pub fn parse(raw: &str) -> Result<Self> {
        let bytes = raw.as_bytes();
        if bytes.len() != KEY_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(SimError::invalid_key(raw));
        }

        let mut digits = [0u8; KEY_LEN];
        for (digit, byte) in digits.iter_mut().zip(bytes) {
            *digit = byte - b'0';
        }
        Ok(Key(digits))
    }

    pub fn digits(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl FromStr for Key {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Key::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({self})")
    }
}

/// Draws twelve independent, uniform decimal digits from `rng`.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> Key {
    let mut digits = [0u8; KEY_LEN];
    for d in &mut digits {
        *d = rng.gen_range(0..10);
    }
    Key(digits)
}
