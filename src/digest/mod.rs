pub use crate::key::{Key, KEY_LEN};

pub mod boundary_fold;
pub mod fold;

use indexmap::IndexMap;

pub use boundary_fold::BoundaryFoldDigester;
pub use fold::{fold, FoldDigester};

pub type Digest = u32;

/// Width of one folded segment, in digits.
pub const SEGMENT_LEN: usize = 4;

/// Largest digest any folding digester can produce: three segments of 9999.
pub const MAX_DIGEST: Digest = 3 * 9999;

pub trait Digester: Sync {
    fn digest(&self, key: &Key) -> Digest;

    fn boxed(self) -> Box<dyn Digester>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

pub struct DigesterDetail {
    pub digester: Box<dyn Digester>,
    pub description: &'static str,
}

pub fn digesters() -> IndexMap<&'static str, DigesterDetail> {
    let digesters: Vec<(&str, DigesterDetail)> = vec![
        (
            "fold",
            DigesterDetail {
                digester: FoldDigester.boxed(),
                description: "sum of the three 4-digit segments",
            },
        ),
        (
            "boundary-fold",
            DigesterDetail {
                digester: BoundaryFoldDigester.boxed(),
                description: "sum of the segments, middle segment reversed",
            },
        ),
    ];
    digesters.into_iter().collect()
}

/// Reads `digits` as one base-10 number.
pub(crate) fn segment_value(digits: impl IntoIterator<Item = u8>) -> Digest {
    digits
        .into_iter()
        .fold(0, |acc, d| acc * 10 + Digest::from(d))
}

pub(crate) fn segments(key: &Key) -> impl Iterator<Item = &[u8]> {
    key.digits().chunks_exact(SEGMENT_LEN)
}
