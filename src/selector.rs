//! Exact-match record selection.
//!
//! A [Criteria] holds one optional value per record field. Set fields must
//! match exactly, unset fields match anything. [select] keeps the source
//! order of the records, which is the order series are plotted in.

use crate::record::BenchmarkRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub implementation: Option<String>,
    pub num_cycles : Option<u64>,
    pub block_size : Option<u64>,
    pub num_blocks : Option<u64>,
    pub num_readers: Option<u64>,
}

impl Criteria {
    /// Matches every record.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn implementation(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = Some(implementation.into());
        self
    }

    #[inline]
    pub fn num_cycles(mut self, num_cycles: u64) -> Self {
        self.num_cycles = Some(num_cycles);
        self
    }

    #[inline]
    pub fn block_size(mut self, block_size: u64) -> Self {
        self.block_size = Some(block_size);
        self
    }

    #[inline]
    pub fn num_blocks(mut self, num_blocks: u64) -> Self {
        self.num_blocks = Some(num_blocks);
        self
    }

    #[inline]
    pub fn num_readers(mut self, num_readers: u64) -> Self {
        self.num_readers = Some(num_readers);
        self
    }

    pub fn matches(&self, record: &BenchmarkRecord) -> bool {
        fn eq<T: PartialEq + ?Sized>(criterion: Option<&T>, value: &T) -> bool {
            criterion.map_or(true, |c| c == value)
        }

        eq(self.implementation.as_deref(), record.implementation.as_str())
            && eq(self.num_cycles.as_ref(),  &record.num_cycles)
            && eq(self.block_size.as_ref(),  &record.block_size)
            && eq(self.num_blocks.as_ref(),  &record.num_blocks)
            && eq(self.num_readers.as_ref(), &record.num_readers)
    }
}

/// Records matching all set `criteria`, in source order.
///
/// Returns an empty `Vec` when nothing matches.
pub fn select<'a>(
    records: impl IntoIterator<Item = &'a BenchmarkRecord>,
    criteria: &Criteria,
) -> Vec<&'a BenchmarkRecord> {
    records.into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
