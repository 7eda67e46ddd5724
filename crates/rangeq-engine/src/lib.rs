//! Query-processing driver for rangeq.
//!
//! Picks a [`RangeUpdatePointQuery`] backend, feeds it a parsed [`Workload`]
//! record by record, and collects the point-query answers in record order.
//! This is the coordination layer between the CLI and the structure crates.

use anyhow::{Context, Result};
use rangeq_error::RangeqError;
use rangeq_fenwick::FenwickLedger;
use rangeq_ledger::DeltaLedger;
use rangeq_logging::{LogLevel, Logger};
use rangeq_parse::{Operation, Workload, parse_workload};
use rangeq_ports::RangeUpdatePointQuery;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

const COMPONENT: &str = "engine";

/// Available range-update backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Plain delta ledger: O(1) update, O(k) query.
    Naive,
    /// Fenwick tree over the ledger: O(log n) update and query.
    Fenwick,
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Fenwick
    }
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Naive, Backend::Fenwick];

    /// Builds an empty-ledger structure over `base`.
    pub fn build(self, base: Vec<i64>) -> Result<Box<dyn RangeUpdatePointQuery>, RangeqError> {
        Ok(match self {
            Backend::Naive => Box::new(DeltaLedger::new(base)?),
            Backend::Fenwick => Box::new(FenwickLedger::new(base)?),
        })
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Naive => write!(f, "naive"),
            Backend::Fenwick => write!(f, "fenwick"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naive" => Ok(Backend::Naive),
            "fenwick" | "bit" => Ok(Backend::Fenwick),
            other => Err(format!("unknown backend `{other}` (expected naive or fenwick)")),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub backend: Backend,
    /// Point-query answers in record order.
    pub answers: Vec<i64>,
    pub updates: usize,
    pub queries: usize,
}

pub struct Engine<'a> {
    pub backend: Backend,
    pub logger: &'a Logger,
}

impl<'a> Engine<'a> {
    pub fn new(backend: Backend, logger: &'a Logger) -> Self {
        Self { backend, logger }
    }

    /// Parse `input` and run it.
    pub fn run_input(&self, input: &str) -> Result<RunReport> {
        let workload = parse_workload(input).context("parse range-update input")?;
        self.run(&workload)
    }

    /// Build the configured backend over the workload's base and run every
    /// record in order.
    pub fn run(&self, workload: &Workload) -> Result<RunReport> {
        let mut store = self
            .backend
            .build(workload.base.clone())
            .context("build range-update structure")?;
        self.logger.debug(
            COMPONENT,
            format!("built {} backend over {} values", store.name(), store.len()),
        );
        if workload.query_count() == 0 {
            self.logger
                .warn(COMPONENT, "workload has no point queries; no answers will be written");
        }
        self.logger.info(
            COMPONENT,
            format!(
                "run started: backend={} n={} records={}",
                store.name(),
                store.len(),
                workload.operations.len()
            ),
        );

        let report = self.dispatch(store.as_mut(), &workload.operations)?;

        self.logger.info(
            COMPONENT,
            format!(
                "run finished: updates={} queries={}",
                report.updates, report.queries
            ),
        );
        Ok(report)
    }

    /// Apply `operations` to `store` in order. The first invalid record
    /// aborts the run; nothing after it is applied.
    pub fn dispatch(
        &self,
        store: &mut dyn RangeUpdatePointQuery,
        operations: &[Operation],
    ) -> Result<RunReport> {
        let tracing = self.logger.enabled(LogLevel::Trace, COMPONENT);
        let mut report = RunReport {
            backend: self.backend,
            answers: Vec::new(),
            updates: 0,
            queries: 0,
        };

        for (i, op) in operations.iter().enumerate() {
            if tracing {
                let rendered = serde_json::to_string(op).unwrap_or_else(|_| op.to_record());
                self.logger
                    .trace(COMPONENT, format!("record #{}: {rendered}", i + 1));
            }

            let outcome = match *op {
                Operation::RangeAdd { a, b, u } => store.range_add(a, b, u).map(|()| {
                    report.updates += 1;
                }),
                Operation::PointQuery { k } => store.point_query(k).map(|value| {
                    report.queries += 1;
                    report.answers.push(value);
                }),
            };

            if let Err(err) = outcome {
                self.logger.error(COMPONENT, format!("record #{} rejected: {err}", i + 1));
                return Err(err).with_context(|| {
                    format!("record #{} (`{}`)", i + 1, op.to_record())
                });
            }
        }

        Ok(report)
    }
}

/// Writes one answer per line.
pub fn write_answers(out: &mut impl Write, answers: &[i64]) -> std::io::Result<()> {
    for value in answers {
        writeln!(out, "{value}")?;
    }
    out.flush()
}
