//! Parallel evaluation of a dataset against the program registry.


use std::collections::BTreeMap;
use std::time::Instant;

use benefitgraph_config::{ConfigError, EvaluatorConfig, Parallelism};
use benefitgraph_core::Verdict;
use benefitgraph_programs::{ProgramError, ProgramRegistry};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::dataset::DatasetRecord;

/// Errors that abort a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("record {record}: {source}")]
    Program {
        record: usize,
        #[source]
        source: ProgramError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// The verdict for one (record, program) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub record: usize,
    pub program: String,
    pub verdict: Verdict,
    pub label: Option<Verdict>,
}

impl Prediction {
    /// `None` when the record carries no label.
    pub fn agrees(&self) -> Option<bool> {
        self.label.map(|label| label == self.verdict)
    }
}

/// Per-program tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgramStats {
    pub evaluated: usize,
    pub labeled: usize,
    pub agreed: usize,
    pub pass: usize,
    pub fail: usize,
    pub indeterminate: usize,
}

impl ProgramStats {
    fn record(&mut self, prediction: &Prediction) {
        self.evaluated += 1;
        match prediction.verdict {
            Verdict::Pass => self.pass += 1,
            Verdict::Fail => self.fail += 1,
            Verdict::Indeterminate => self.indeterminate += 1,
        }
        if let Some(agrees) = prediction.agrees() {
            self.labeled += 1;
            if agrees {
                self.agreed += 1;
            }
        }
    }

    /// Share of labeled evaluations whose verdict matched, if any were labeled.
    pub fn accuracy(&self) -> Option<f64> {
        (self.labeled > 0).then(|| self.agreed as f64 / self.labeled as f64)
    }
}

/// Everything a batch produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// In record order, then program order within a record.
    pub predictions: Vec<Prediction>,
    pub per_program: BTreeMap<String, ProgramStats>,
}

impl BatchReport {
    fn from_predictions(predictions: Vec<Prediction>) -> Self {
        let mut per_program: BTreeMap<String, ProgramStats> = BTreeMap::new();
        for prediction in &predictions {
            per_program
                .entry(prediction.program.clone())
                .or_default()
                .record(prediction);
        }
        Self {
            predictions,
            per_program,
        }
    }

    pub fn evaluations(&self) -> usize {
        self.predictions.len()
    }

    pub fn labeled(&self) -> usize {
        self.per_program.values().map(|s| s.labeled).sum()
    }

    pub fn agreed(&self) -> usize {
        self.per_program.values().map(|s| s.agreed).sum()
    }

    /// Accuracy over every labeled evaluation.
    pub fn accuracy(&self) -> Option<f64> {
        let labeled = self.labeled();
        (labeled > 0).then(|| self.agreed() as f64 / labeled as f64)
    }

    pub fn disagreements(&self) -> impl Iterator<Item = &Prediction> {
        self.predictions
            .iter()
            .filter(|p| p.agrees() == Some(false))
    }

    pub fn stats(&self, program: &str) -> Option<&ProgramStats> {
        self.per_program.get(program)
    }
}

/// Evaluates dataset records against a registry.
///
/// Records fan out over a rayon pool; each record's programs run in order on
/// the worker that picked the record up.
#[derive(Debug, Clone)]
pub struct BatchEvaluator {
    registry: ProgramRegistry,
    programs: Vec<String>,
    parallelism: Parallelism,
}

impl BatchEvaluator {
    /// Runs every program each record lists, with automatic parallelism.
    pub fn new(registry: ProgramRegistry) -> Self {
        Self {
            registry,
            programs: Vec::new(),
            parallelism: Parallelism::Auto,
        }
    }

    /// Applies the configured program subset and parallelism.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or names a program the registry
    /// does not hold.
    pub fn from_config(
        registry: ProgramRegistry,
        config: &EvaluatorConfig,
    ) -> Result<Self, BatchError> {
        config.validate()?;
        registry
            .check_names(config.programs.iter().map(String::as_str))
            .map_err(|source| BatchError::Config(ConfigError::Invalid(source.to_string())))?;
        Ok(Self {
            registry,
            programs: config.programs.clone(),
            parallelism: config.parallelism,
        })
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Restricts evaluation to these programs; records naming others skip them.
    pub fn with_programs(mut self, programs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.programs = programs.into_iter().map(Into::into).collect();
        self
    }

    pub fn registry(&self) -> &ProgramRegistry {
        &self.registry
    }

    fn selected(&self, name: &str) -> bool {
        self.programs.is_empty() || self.programs.iter().any(|p| p == name)
    }

    /// Evaluates every selected (record, program) pair.
    ///
    /// # Errors
    ///
    /// An unknown program name anywhere in the batch fails it before any
    /// evaluation runs. A fatal evaluation error fails it too; missing data
    /// never does.
    pub fn run(&self, records: &[DatasetRecord]) -> Result<BatchReport, BatchError> {
        for (index, record) in records.iter().enumerate() {
            self.registry
                .check_names(record.programs.iter().map(String::as_str))
                .map_err(|source| BatchError::Program {
                    record: index,
                    source,
                })?;
        }

        let start = Instant::now();
        info!(
            event = "batch_start",
            records = records.len(),
            programs = self.registry.len(),
            threads = self.parallelism.thread_count(),
        );

        let per_record = match self.parallelism {
            Parallelism::Sequential => records
                .iter()
                .enumerate()
                .map(|(index, record)| self.run_record(index, record))
                .collect::<Result<Vec<_>, _>>()?,
            Parallelism::Auto => self.run_parallel(records)?,
            Parallelism::Threads(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()?
                .install(|| self.run_parallel(records))?,
        };

        let report = BatchReport::from_predictions(per_record.into_iter().flatten().collect());
        for p in report.disagreements() {
            warn!(
                event = "label_disagreement",
                record = p.record,
                program = %p.program,
                verdict = %p.verdict,
                expected = p.label.map(Verdict::as_str).unwrap_or("none"),
            );
        }
        info!(
            event = "batch_end",
            evaluations = report.evaluations(),
            labeled = report.labeled(),
            agreed = report.agreed(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(report)
    }

    fn run_parallel(&self, records: &[DatasetRecord]) -> Result<Vec<Vec<Prediction>>, BatchError> {
        records
            .par_iter()
            .enumerate()
            .map(|(index, record)| self.run_record(index, record))
            .collect()
    }

    fn run_record(&self, index: usize, record: &DatasetRecord) -> Result<Vec<Prediction>, BatchError> {
        let mut predictions = Vec::with_capacity(record.programs.len());
        for (i, name) in record.programs.iter().enumerate() {
            if !self.selected(name) {
                continue;
            }
            let verdict = self
                .registry
                .verdict(name, &record.hh)
                .map_err(|source| BatchError::Program {
                    record: index,
                    source,
                })?;
            predictions.push(Prediction {
                record: index,
                program: name.clone(),
                verdict,
                label: record.label(i),
            });
        }
        Ok(predictions)
    }
}
