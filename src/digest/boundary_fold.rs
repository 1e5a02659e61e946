use super::*;

/// Boundary folding: like [`FoldDigester`], but the middle segment is read
/// with its digits reversed, as if the key were folded back on itself at the
/// segment boundaries.
pub struct BoundaryFoldDigester;
impl Digester for BoundaryFoldDigester {
    fn digest(&self, key: &Key) -> Digest {
        segments(key)
            .enumerate()
            .map(|(i, segment)| {
                if i % 2 == 1 {
                    segment_value(segment.iter().rev().copied())
                } else {
                    segment_value(segment.iter().copied())
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_middle_segment() {
        let key = Key::parse("000112340001").unwrap();
        assert_eq!(BoundaryFoldDigester.digest(&key), 1 + 4321 + 1);
        assert_eq!(FoldDigester.digest(&key), 1 + 1234 + 1);
    }

    #[test]
    fn palindromic_middle_matches_plain_fold() {
        let key = Key::parse("432112215555").unwrap();
        assert_eq!(
            BoundaryFoldDigester.digest(&key),
            FoldDigester.digest(&key)
        );
    }
}
