use super::*;
use crate::error::Result;

/// Splits the key into three 4-digit segments at offsets 0, 4 and 8 and adds
/// them up.
pub struct FoldDigester;
impl Digester for FoldDigester {
    fn digest(&self, key: &Key) -> Digest {
        segments(key)
            .map(|segment| segment_value(segment.iter().copied()))
            .sum()
    }
}

/// Folding digest of a raw candidate key.
///
/// Fails with [`SimError::InvalidKey`](crate::error::SimError::InvalidKey)
/// unless `raw` is exactly 12 decimal digits.
pub fn fold(raw: &str) -> Result<Digest> {
    let key = Key::parse(raw)?;
    Ok(FoldDigester.digest(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn folds_segments() {
        assert_eq!(fold("000000000001"), Ok(1));
        assert_eq!(fold("000100020003"), Ok(6));
        assert_eq!(fold("123456789012"), Ok(1234 + 5678 + 9012));
        assert_eq!(fold("999999999999"), Ok(29997));
    }

    #[test]
    fn rejects_short_key() {
        assert_eq!(
            fold("12345"),
            Err(SimError::InvalidKey {
                value: "12345".into()
            })
        );
    }

    #[test]
    fn rejects_non_digit() {
        match fold("12345678901A") {
            Err(SimError::InvalidKey { value }) => assert_eq!(value, "12345678901A"),
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }
}
