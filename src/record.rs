use crate::error::{Error, Result};
use crate::selector::{self, Criteria};

/// One measured benchmark configuration.
///
/// Timings are nanoseconds per operation. `readers` holds one timing per
/// concurrent reader, so its length is expected to equal `num_readers`.
/// Nothing enforces this at construction: see [check_readers()].
///
/// [check_readers()]: BenchmarkRecord::check_readers
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRecord {
    pub implementation: String,
    pub num_cycles : u64,
    pub block_size : u64,
    pub num_blocks : u64,
    pub num_readers: u64,
    pub writer : f64,
    pub readers: Vec<f64>,
}

impl BenchmarkRecord {
    /// Fails if `readers` does not hold exactly `num_readers` timings.
    pub fn check_readers(&self) -> Result<()> {
        if self.readers.len() as u64 != self.num_readers {
            return Err(Error::ReaderCountMismatch {
                implementation: self.implementation.clone(),
                block_size: self.block_size,
                declared: self.num_readers,
                actual: self.readers.len(),
            });
        }
        Ok(())
    }
}

/// All records of one benchmarking session, in source order.
///
/// Read-only once built, see [load()](ResultCollection::load).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultCollection {
    records: Vec<BenchmarkRecord>,
}

impl ResultCollection {
    #[inline]
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> {
        self.records.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shorthand for [selector::select] over this collection.
    #[inline]
    pub fn select(&self, criteria: &Criteria) -> Vec<&BenchmarkRecord> {
        selector::select(&self.records, criteria)
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test_record {
    use super::*;

    fn record(num_readers: u64, readers: Vec<f64>) -> BenchmarkRecord {
        BenchmarkRecord {
            implementation: "SeqLock".into(),
            num_cycles: 1000,
            block_size: 64,
            num_blocks: 10,
            num_readers,
            writer: 12.5,
            readers,
        }
    }

    #[test]
    fn test_check_readers() {
        assert!(record(3, vec![1.0, 2.0, 3.0]).check_readers().is_ok());
        assert!(record(0, vec![]).check_readers().is_ok());

        let err = record(3, vec![1.0, 2.0]).check_readers().unwrap_err();
        match err {
            Error::ReaderCountMismatch { declared, actual, block_size, .. } => {
                assert_eq!(declared, 3);
                assert_eq!(actual, 2);
                assert_eq!(block_size, 64);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_collection_keeps_order() {
        let mut records = Vec::new();
        for readers in 1..=4 {
            records.push(record(readers, vec![0.0; readers as usize]));
        }
        let collection = ResultCollection::new(records.clone());
        assert_eq!(collection.len(), 4);
        assert!(!collection.is_empty());
        assert_eq!(collection.records(), records.as_slice());

        let counts: Vec<u64> = (&collection).into_iter().map(|r| r.num_readers).collect();
        assert_eq!(counts, [1, 2, 3, 4]);
    }
}
