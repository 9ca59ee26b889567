//! Chart lines out of series sets.
//!
//! Empty series sets produce no lines. Points keep series order.

use crate::implementation::{Datasets, Implementation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Write,
    Read,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotLine {
    pub implementation: Implementation,
    pub operation: Operation,
    /// Only set for the first line of each implementation, so that the
    /// legend shows every implementation once.
    pub legend: Option<&'static str>,
    /// `[block_size, ns]`
    pub points: Vec<[f64; 2]>,
}

/// One line per implementation.
pub fn write_lines(datasets: &Datasets) -> Vec<PlotLine> {
    datasets.iter()
        .filter(|(_, series)| !series.is_empty())
        .map(|(implementation, series)| PlotLine {
            implementation: *implementation,
            operation: Operation::Write,
            legend: Some(implementation.label()),
            points: series.writer_points()
                .map(|(block_size, ns)| [block_size as f64, ns])
                .collect(),
        })
        .collect()
}

/// One line per implementation per reader. Lines are grouped by reader
/// column, the same way for every implementation.
pub fn read_lines(datasets: &Datasets) -> Vec<PlotLine> {
    let num_columns = datasets.iter()
        .map(|(_, series)| series.readers().num_columns())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for k in 0..num_columns {
        for (implementation, series) in datasets {
            if series.is_empty() || k >= series.readers().num_columns() {
                continue;
            }
            lines.push(PlotLine {
                implementation: *implementation,
                operation: Operation::Read,
                legend: (k == 0).then(|| implementation.label()),
                points: series.reader_points(k)
                    .map(|(block_size, ns)| [block_size as f64, ns])
                    .collect(),
            });
        }
    }
    lines
}

#[cfg(test)]
mod test_lines {
    use shm_results::ResultCollection;
    use crate::config::PlotConfig;
    use crate::implementation::datasets;
    use super::*;

    /// Five implementations, block sizes 64/128/256, 3 readers.
    /// Plus 2-reader runs that must not be picked up.
    fn results() -> ResultCollection {
        let mut entries = Vec::new();
        for block_size in [64, 128, 256] {
            for (i, name) in ["Memcpy", "SeqLock", "Shared mutex", "Mutex", "ZMQ"].iter().enumerate() {
                let base = (i + 1) as f64 * block_size as f64;
                entries.push(format!(
                    r#"{{"implementation": "{name}", "num_cycles": 1000000, "block_size": {block_size},
                        "num_blocks": 10, "num_readers": 3, "writer": {base},
                        "readers": [{}, {}, {}]}}"#,
                    base + 1.0, base + 2.0, base + 3.0
                ));
                entries.push(format!(
                    r#"{{"implementation": "{name}", "num_cycles": 1000000, "block_size": {block_size},
                        "num_blocks": 10, "num_readers": 2, "writer": 1, "readers": [1, 1]}}"#
                ));
            }
        }
        let document = format!(r#"{{"results": [{}]}}"#, entries.join(","));
        ResultCollection::parse(&document).unwrap()
    }

    #[test]
    fn test_write_lines_without_zmq() {
        let config = PlotConfig::new("results.json");
        let lines = write_lines(&datasets(&results(), &config).unwrap());
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.operation == Operation::Write));
        assert!(lines.iter().all(|l| l.implementation != Implementation::Zmq));

        let seqlock = &lines[1];
        assert_eq!(seqlock.implementation, Implementation::SeqLock);
        assert_eq!(seqlock.legend, Some("SeqLock"));
        assert_eq!(seqlock.points, [[64.0, 128.0], [128.0, 256.0], [256.0, 512.0]]);
    }

    #[test]
    fn test_zmq_adds_one_line() {
        let config = PlotConfig { include_zmq: true, ..PlotConfig::new("results.json") };
        let all = datasets(&results(), &config).unwrap();

        let write = write_lines(&all);
        assert_eq!(write.len(), 5);
        assert_eq!(write[4].implementation, Implementation::Zmq);
        assert_eq!(write[4].points.len(), 3);

        assert_eq!(read_lines(&all).len(), 5 * 3);
    }

    #[test]
    fn test_read_lines() {
        let config = PlotConfig::new("results.json");
        let lines = read_lines(&datasets(&results(), &config).unwrap());
        assert_eq!(lines.len(), 4 * 3);
        assert!(lines.iter().all(|l| l.operation == Operation::Read));

        // Legend only on reader 0.
        let labelled: Vec<_> = lines.iter().filter_map(|l| l.legend).collect();
        assert_eq!(labelled, ["Baseline", "SeqLock", "Shared mutex", "Mutex"]);
        assert!(lines[..4].iter().all(|l| l.legend.is_some()));

        // Reader 2 of Memcpy.
        let line = &lines[8];
        assert_eq!(line.implementation, Implementation::Baseline);
        assert_eq!(line.points, [[64.0, 67.0], [128.0, 131.0], [256.0, 259.0]]);
    }

    #[test]
    fn test_empty_series_skipped() {
        let results = ResultCollection::parse(r#"{"results": [
            {"implementation": "Mutex", "num_cycles": 1, "block_size": 64,
             "num_blocks": 10, "num_readers": 3, "writer": 5, "readers": [1, 2, 3]}
        ]}"#).unwrap();
        let config = PlotConfig { include_zmq: true, ..PlotConfig::new("results.json") };
        let all = datasets(&results, &config).unwrap();

        let write = write_lines(&all);
        assert_eq!(write.len(), 1);
        assert_eq!(write[0].implementation, Implementation::Mutex);
        assert_eq!(read_lines(&all).len(), 3);
    }

    #[test]
    fn test_nothing_to_plot() {
        let config = PlotConfig::new("results.json");
        let all = datasets(&ResultCollection::default(), &config).unwrap();
        assert!(write_lines(&all).is_empty());
        assert!(read_lines(&all).is_empty());
    }
}
