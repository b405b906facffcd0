use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::plan::SearchOutcome;

impl SearchOutcome {
    /// Optimization curves of the search: the winning curve, every completed
    /// trial's curve and the failed trials.
    pub fn curves_json(&self) -> Value {
        let failures = self.failures.iter()
            .map(|failure| json!({ "trial": failure.trial, "error": failure.error.to_string() }))
            .collect::<Vec<_>>();

        json!({
            "seed": self.seed,
            "best_trial": self.best_trial,
            "best_z": self.best_z,
            "best_curve": self.best_curve,
            "trials": self.curves,
            "failures": failures,
        })
    }

    /// Write the optimization curves as pretty-printed JSON.
    pub fn write_curves_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[outcome::write_curves_json] Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.curves_json())
            .with_context(|| format!("[outcome::write_curves_json] Failed to write {}", path.display()))
    }
}
