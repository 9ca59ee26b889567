//! Shaping selected records into plot-ready series.
//!
//! A [SeriesSet] keeps the records' order: row `i` of every sequence comes
//! from the `i`-th selected record. Nothing is re-sorted, so the x order of a
//! chart line is the order the records had in the results file.

use crate::error::{Error, Result};
use crate::record::BenchmarkRecord;

/// Reader latencies: one row per record, one column per concurrent reader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReaderTable {
    num_columns: usize,
    rows: Vec<Vec<f64>>,
}

impl ReaderTable {
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Latencies of reader `k` across all rows.
    ///
    /// # Panics
    ///
    /// If `k >= num_columns()`.
    pub fn column(&self, k: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(k < self.num_columns, "reader column {k} out of {}", self.num_columns);
        self.rows.iter().map(move |row| row[k])
    }
}

/// Series of one implementation: block sizes with aligned writer
/// and reader latencies.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSet {
    implementation: String,
    block_sizes: Vec<u64>,
    writer: Vec<f64>,
    readers: ReaderTable,
}

impl SeriesSet {
    /// Build from records selected for `implementation`.
    ///
    /// No records gives an empty set. Fails if a record belongs to another
    /// implementation, if its `readers` length disagrees with `num_readers`,
    /// or if records disagree on `num_readers`.
    pub fn build(implementation: &str, records: &[&BenchmarkRecord]) -> Result<Self> {
        let num_readers = records.first().map_or(0, |r| r.num_readers);

        let mut block_sizes = Vec::with_capacity(records.len());
        let mut writer = Vec::with_capacity(records.len());
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            if record.implementation != implementation {
                return Err(Error::MixedImplementation {
                    expected: implementation.to_string(),
                    found: record.implementation.clone(),
                });
            }
            record.check_readers()?;
            if record.num_readers != num_readers {
                return Err(Error::MixedReaderCount {
                    implementation: implementation.to_string(),
                    expected: num_readers,
                    found: record.num_readers,
                });
            }

            block_sizes.push(record.block_size);
            writer.push(record.writer);
            rows.push(record.readers.clone());
        }

        Ok(Self {
            implementation: implementation.to_string(),
            block_sizes,
            writer,
            readers: ReaderTable { num_columns: num_readers as usize, rows },
        })
    }

    #[inline]
    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.block_sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block_sizes.is_empty()
    }

    #[inline]
    pub fn block_sizes(&self) -> &[u64] {
        &self.block_sizes
    }

    #[inline]
    pub fn writer(&self) -> &[f64] {
        &self.writer
    }

    #[inline]
    pub fn readers(&self) -> &ReaderTable {
        &self.readers
    }

    /// `(block_size, writer)` pairs.
    pub fn writer_points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.block_sizes.iter().copied().zip(self.writer.iter().copied())
    }

    /// `(block_size, latency)` pairs of reader `k`.
    pub fn reader_points(&self, k: usize) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.block_sizes.iter().copied().zip(self.readers.column(k))
    }
}
