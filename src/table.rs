use crate::digest::{Digest, Digester};
use crate::error::{Result, SimError};
use crate::key::Key;

/// `digest mod table_size`.
///
/// # Panics
///
/// Panics if `table_size` is zero; [`ChainedTable::new`] rejects that size
/// before any index is computed.
pub fn bucket_index(digest: Digest, table_size: usize) -> usize {
    digest as usize % table_size
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStats {
    pub occupied: usize,
    pub longest_chain: usize,
}

/// A fixed-size, append-only hash table with separate chaining.
///
/// Every insertion into a bucket that already holds a key counts as exactly
/// one collision, however long that bucket's chain already is.
pub struct ChainedTable<'d> {
    buckets: Vec<Vec<Key>>,
    digester: &'d dyn Digester,
    collisions: usize,
    len: usize,
}

impl<'d> ChainedTable<'d> {
    pub fn new(table_size: usize, digester: &'d dyn Digester) -> Result<Self> {
        let table_size = SimError::check_positive("table_size", table_size)?;
        Ok(ChainedTable {
            buckets: vec![Vec::new(); table_size],
            digester,
            collisions: 0,
            len: 0,
        })
    }

    pub fn insert(&mut self, key: Key) {
        let idx = bucket_index(self.digester.digest(&key), self.buckets.len());
        let bucket = &mut self.buckets[idx];
        if !bucket.is_empty() {
            self.collisions += 1;
        }
        bucket.push(key);
        self.len += 1;
    }

    /// Validates `raw` as a key before inserting it.
    pub fn try_insert(&mut self, raw: &str) -> Result<()> {
        self.insert(Key::parse(raw)?);
        Ok(())
    }

    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket(&self, idx: usize) -> &[Key] {
        &self.buckets[idx]
    }

    pub fn stats(&self) -> TableStats {
        self.buckets
            .iter()
            .filter(|b| !b.is_empty())
            .fold(TableStats::default(), |stats, b| TableStats {
                occupied: stats.occupied + 1,
                longest_chain: stats.longest_chain.max(b.len()),
            })
    }
}
