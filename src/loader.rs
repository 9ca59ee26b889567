//! Reading a results document into a [ResultCollection].
//!
//! Expected shape:
//! ```text
//! { "results": [ { "implementation": "SeqLock", "num_cycles": 1000000,
//!                  "block_size": 64, "num_blocks": 10, "num_readers": 3,
//!                  "writer": 21.4, "readers": [30.1, 29.8, 31.0] }, ... ] }
//! ```
//! Numeric fields may also be written as strings (`"64"`).

use std::fs;
use std::path::Path;
use json::JsonValue;
use json::number::Number;
use crate::error::{Error, Result};
use crate::record::{BenchmarkRecord, ResultCollection};

impl ResultCollection {
    /// Read and parse results file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), records = collection.len(), "results loaded");
        Ok(collection)
    }

    /// Parse results document text.
    pub fn parse(content: &str) -> Result<Self> {
        let document = json::parse(content)?;
        if !document.is_object() || !document.has_key("results") {
            return Err(Error::MissingResults);
        }
        let results = &document["results"];
        if !results.is_array() {
            return Err(Error::ResultsNotArray);
        }

        let records = results.members()
            .enumerate()
            .map(|(index, value)| parse_record(index, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(ResultCollection::new(records))
    }
}

fn parse_record(index: usize, value: &JsonValue) -> Result<BenchmarkRecord> {
    if !value.is_object() {
        return Err(invalid(index, "results", "entry is not an object"));
    }
    let get = |name| field(index, value, name);

    let implementation = get("implementation")?
        .as_str()
        .ok_or_else(|| invalid(index, "implementation", "is not a string"))?
        .to_string();

    let readers_value = get("readers")?;
    if !readers_value.is_array() {
        return Err(invalid(index, "readers", "is not an array"));
    }
    let readers = readers_value.members()
        .map(|v| as_time(index, "readers", v))
        .collect::<Result<Vec<_>>>()?;

    Ok(BenchmarkRecord {
        implementation,
        num_cycles : as_count(index, "num_cycles",  get("num_cycles")?)?,
        block_size : as_count(index, "block_size",  get("block_size")?)?,
        num_blocks : as_count(index, "num_blocks",  get("num_blocks")?)?,
        num_readers: as_count(index, "num_readers", get("num_readers")?)?,
        writer: as_time(index, "writer", get("writer")?)?,
        readers,
    })
}

fn field<'v>(index: usize, record: &'v JsonValue, name: &'static str) -> Result<&'v JsonValue> {
    if record.has_key(name) {
        Ok(&record[name])
    } else {
        Err(invalid(index, name, "is missing"))
    }
}

/// Non-negative integer, from a JSON integer or a decimal string.
///
/// Numbers are read from their decimal parts, so no precision is lost past
/// 2^53. Integral fractions like `8.0` are accepted.
fn as_count(index: usize, field: &'static str, value: &JsonValue) -> Result<u64> {
    if let Some(s) = value.as_str() {
        return s.trim().parse::<u64>()
            .map_err(|_| invalid(index, field, format!("{s:?} is not a non-negative integer")));
    }
    let number = value.as_number()
        .ok_or_else(|| invalid(index, field, "is not a number"))?;
    exact_u64(number)
        .ok_or_else(|| invalid(index, field, format!("{number} is not a non-negative integer")))
}

/// `mantissa * 10^exponent`, if that is a whole `u64`.
fn exact_u64(number: Number) -> Option<u64> {
    let (positive, mantissa, exponent) = number.as_parts();
    if mantissa == 0 {
        return Some(0);
    }
    if !positive {
        return None;
    }
    let scale = 10u64.checked_pow(u32::from(exponent.unsigned_abs()))?;
    if exponent >= 0 {
        mantissa.checked_mul(scale)
    } else if mantissa % scale == 0 {
        Some(mantissa / scale)
    } else {
        None
    }
}

/// Finite, non-negative time in nanoseconds, from a JSON number or a
/// numeric string.
fn as_time(index: usize, field: &'static str, value: &JsonValue) -> Result<f64> {
    let time = match value.as_str() {
        Some(s) => s.trim().parse::<f64>()
            .map_err(|_| invalid(index, field, format!("{s:?} is not a number")))?,
        None => value.as_f64()
            .ok_or_else(|| invalid(index, field, "is not a number"))?,
    };
    if !time.is_finite() {
        Err(invalid(index, field, "is not finite"))
    } else if time < 0.0 {
        Err(invalid(index, field, format!("{time} is negative")))
    } else {
        Ok(time)
    }
}

#[inline]
fn invalid(index: usize, field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidField { index, field, reason: reason.into() }
}
