use anyhow::{Context, Result};
use charming::element::Symbol;
use shm_results::{Criteria, ResultCollection, SeriesSet};
use crate::config::PlotConfig;

/// Compared implementations, with their look on both charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Implementation {
    Baseline,
    SeqLock,
    SharedMutex,
    Mutex,
    Zmq,
}

impl Implementation {
    /// Always plotted, in legend order.
    pub const COMPARED: [Implementation; 4] = [
        Implementation::Baseline,
        Implementation::SeqLock,
        Implementation::SharedMutex,
        Implementation::Mutex,
    ];

    pub fn roster(include_zmq: bool) -> Vec<Implementation> {
        let mut roster = Self::COMPARED.to_vec();
        if include_zmq {
            roster.push(Implementation::Zmq);
        }
        roster
    }

    /// `implementation` value in the results file.
    pub fn record_name(self) -> &'static str {
        match self {
            Implementation::Baseline    => "Memcpy",
            Implementation::SeqLock     => "SeqLock",
            Implementation::SharedMutex => "Shared mutex",
            Implementation::Mutex       => "Mutex",
            Implementation::Zmq         => "ZMQ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Implementation::Baseline    => "Baseline",
            Implementation::SeqLock     => "SeqLock",
            Implementation::SharedMutex => "Shared mutex",
            Implementation::Mutex       => "Mutex",
            Implementation::Zmq         => "ZMQ",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Implementation::Baseline    => "#000000",
            Implementation::SeqLock     => "#d62728",
            Implementation::SharedMutex => "#2ca02c",
            Implementation::Mutex       => "#1f77b4",
            Implementation::Zmq         => "#bf00bf",
        }
    }

    pub fn symbol(self) -> Symbol {
        match self {
            Implementation::Baseline    => Symbol::Circle,
            Implementation::SeqLock     => Symbol::Rect,
            Implementation::SharedMutex => Symbol::Triangle,
            Implementation::Mutex       => Symbol::Diamond,
            Implementation::Zmq         => Symbol::Pin,
        }
    }
}

pub type Datasets = Vec<(Implementation, SeriesSet)>;

/// One series set per rostered implementation, taken at `config.num_readers`.
///
/// Implementations without matching records come back empty.
pub fn datasets(results: &ResultCollection, config: &PlotConfig) -> Result<Datasets> {
    let mut all = Datasets::new();
    for implementation in Implementation::roster(config.include_zmq) {
        let criteria = Criteria::new()
            .implementation(implementation.record_name())
            .num_readers(config.num_readers);
        let selected = results.select(&criteria);
        let series = SeriesSet::build(implementation.record_name(), &selected)
            .with_context(|| format!("{} series", implementation.label()))?;

        if series.is_empty() {
            tracing::warn!(
                implementation = implementation.record_name(),
                num_readers = config.num_readers,
                "no matching results, series skipped"
            );
        } else {
            tracing::info!(
                implementation = implementation.record_name(),
                points = series.len(),
                "series built"
            );
        }
        all.push((implementation, series));
    }
    Ok(all)
}
