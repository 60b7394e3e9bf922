//! Numbered verdict reports.
//!
//! Reports number inputs from 1 and render one line per input:
//!
//! ```text
//! 1. accepts
//! 2. rejects
//! ```

use crate::core::{AutomatonModel, Verdict};
use crate::eval::Evaluator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Render the report line for the input at 1-based `index`.
pub fn format_line(index: usize, verdict: Verdict) -> String {
    format!("{index}. {verdict}")
}

/// One evaluated input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based position of the input in the batch
    pub index: usize,
    pub input: String,
    pub verdict: Verdict,
}

/// Verdicts for a whole batch of inputs, in input order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub evaluated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl BatchReport {
    /// Pair inputs with their verdicts. Both slices must be in batch order.
    pub fn new<S: AsRef<str>>(inputs: &[S], verdicts: &[Verdict]) -> Self {
        debug_assert_eq!(inputs.len(), verdicts.len());

        let entries = inputs
            .iter()
            .zip(verdicts)
            .enumerate()
            .map(|(i, (input, &verdict))| ReportEntry {
                index: i + 1,
                input: input.as_ref().to_string(),
                verdict,
            })
            .collect();

        Self {
            evaluated_at: Utc::now(),
            entries,
        }
    }

    /// Evaluate `inputs` against `model` and collect the report.
    pub fn evaluate<S: AsRef<str>>(
        evaluator: &Evaluator,
        model: &AutomatonModel,
        inputs: &[S],
    ) -> Self {
        let verdicts = evaluator.evaluate_batch(model, inputs);
        Self::new(inputs, &verdicts)
    }

    pub fn accepted(&self) -> usize {
        self.entries.iter().filter(|e| e.verdict.is_accept()).count()
    }

    pub fn rejected(&self) -> usize {
        self.entries.len() - self.accepted()
    }

    pub fn verdicts(&self) -> Vec<Verdict> {
        self.entries.iter().map(|e| e.verdict).collect()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| format_line(e.index, e.verdict))
    }

    /// Write one line per entry.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}
