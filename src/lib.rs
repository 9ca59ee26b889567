//! Benchmark results of shared-memory access strategies, shaped for plotting.
//!
//! Each [BenchmarkRecord] is one measured configuration: an implementation
//! (`Memcpy`, `SeqLock`, `Shared mutex`, `Mutex`, `ZMQ`, ...) run with some
//! block size and reader count, with the time per write and the time per read
//! of every concurrent reader.
//!
//! The flow is: [load](ResultCollection::load) a results file, [select] the
//! records of one implementation with [Criteria], then [build](SeriesSet::build)
//! a [SeriesSet] out of them.
//!
//! ```
//! use shm_results::{Criteria, ResultCollection, SeriesSet};
//!
//! let results = ResultCollection::parse(r#"{"results": [
//!     {"implementation": "SeqLock", "num_cycles": 1000, "block_size": 64,
//!      "num_blocks": 10, "num_readers": 2, "writer": 20.0, "readers": [30.0, 31.0]},
//!     {"implementation": "Mutex", "num_cycles": 1000, "block_size": 64,
//!      "num_blocks": 10, "num_readers": 2, "writer": 90.0, "readers": [80.0, 85.0]}
//! ]}"#)?;
//!
//! let seqlock = results.select(&Criteria::new().implementation("SeqLock").num_readers(2));
//! let series = SeriesSet::build("SeqLock", &seqlock)?;
//! assert_eq!(series.block_sizes(), [64]);
//! assert_eq!(series.readers().num_columns(), 2);
//! # Ok::<(), shm_results::Error>(())
//! ```
//!
//! # Order
//!
//! Selection and series building never reorder records. A series is drawn
//! in the order its records appear in the results file.
//!
//! # Validation
//!
//! Loading checks document structure and field types. The `readers` length
//! of a record is checked against its `num_readers` when the record goes
//! into a [SeriesSet], together with reader count consistency across the set.

mod error;
mod loader;
mod record;
mod selector;
mod series;

pub use error::{Error, Result};
pub use record::{BenchmarkRecord, ResultCollection};
pub use selector::{select, Criteria};
pub use series::{ReaderTable, SeriesSet};
