//! JSON-lines household datasets.
//!
//! Each non-blank line is one record:
//!
//! ```text
//! {"programs": ["HeadStart"], "labels": ["pass"], "hh": {"members": [...]}}
//! ```


use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use benefitgraph_config::{DatasetConfig, EvaluatorConfig};
use benefitgraph_core::{random_household, seeded_rng, Household, SchemaError, Verdict};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {programs} programs but {labels} labels")]
    LabelCount {
        line: usize,
        programs: usize,
        labels: usize,
    },

    #[error("synthetic household: {0}")]
    Synthetic(#[from] SchemaError),

    #[error("no dataset file or random seed configured")]
    NoSource,
}

/// One household with the programs to check and, optionally, expected verdicts.
///
/// `labels` is either empty or parallel to `programs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub programs: Vec<String>,
    #[serde(default)]
    pub labels: Vec<Verdict>,
    pub hh: Household,
}

impl DatasetRecord {
    pub fn new(hh: Household, programs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            programs: programs.into_iter().map(Into::into).collect(),
            labels: Vec::new(),
            hh,
        }
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Verdict>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    pub fn is_labeled(&self) -> bool {
        !self.labels.is_empty()
    }

    /// The expected verdict for the `i`th program, if labeled.
    pub fn label(&self, i: usize) -> Option<Verdict> {
        self.labels.get(i).copied()
    }
}

/// An ordered collection of dataset records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<DatasetRecord>,
}

impl Dataset {
    pub fn new(records: Vec<DatasetRecord>) -> Self {
        Self { records }
    }

    /// Reads JSON lines, skipping blank lines.
    ///
    /// # Errors
    ///
    /// The first malformed line aborts the read; its 1-based number is
    /// carried in the error.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DatasetError> {
        let mut records = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|source| DatasetError::Io {
                path: PathBuf::from("<reader>"),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_record(&line, line_no)?);
        }
        Ok(Self { records })
    }

    /// Parses a whole JSON-lines document held in memory.
    pub fn from_jsonl_str(s: &str) -> Result<Self, DatasetError> {
        Self::from_reader(s.as_bytes())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            DatasetError::Io { source, .. } => DatasetError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!(
            event = "dataset_loaded",
            path = %path.display(),
            records = dataset.len(),
        );
        Ok(dataset)
    }

    /// Loads the configured file and applies its shift.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, DatasetError> {
        Ok(Self::load(&config.path)?.shifted(config.shift))
    }

    /// Resolves the records a run should use: the configured file when set,
    /// otherwise `count` synthetic households drawn from `random_seed` and
    /// checked against the configured programs.
    pub fn from_evaluator_config(
        config: &EvaluatorConfig,
        count: usize,
    ) -> Result<Self, DatasetError> {
        if let Some(dataset) = &config.dataset {
            return Self::from_config(dataset);
        }
        let seed = config.random_seed.ok_or(DatasetError::NoSource)?;
        let programs: Vec<&str> = config.programs.iter().map(String::as_str).collect();
        debug!(event = "synthetic_dataset", seed, count);
        Self::synthetic(seed, count, &programs)
    }

    /// Unlabeled random households, each checked against `programs`.
    pub fn synthetic(seed: u64, count: usize, programs: &[&str]) -> Result<Self, DatasetError> {
        let mut rng = seeded_rng(seed);
        let records = (0..count)
            .map(|_| {
                random_household(&mut rng).map(|hh| DatasetRecord::new(hh, programs.iter().copied()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    /// Moves the first `shift` records to the end, wrapping past the length.
    pub fn shifted(mut self, shift: usize) -> Self {
        if !self.records.is_empty() {
            let n = shift % self.records.len();
            self.records.rotate_left(n);
        }
        self
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DatasetRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<DatasetRecord> {
        self.records
    }

    /// Serializes back to JSON lines.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DatasetRecord;
    type IntoIter = std::slice::Iter<'a, DatasetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<DatasetRecord, DatasetError> {
    let record: DatasetRecord = serde_json::from_str(line).map_err(|source| DatasetError::Parse {
        line: line_no,
        source,
    })?;
    if record.is_labeled() && record.labels.len() != record.programs.len() {
        return Err(DatasetError::LabelCount {
            line: line_no,
            programs: record.programs.len(),
            labels: record.labels.len(),
        });
    }
    Ok(record)
}
