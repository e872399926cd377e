// Fri Oct 16 2026 - Alex

use crate::config::OutputPolicy;
use crate::error::PatchError;
use crate::image;
use crate::patcher::{PatchOutcome, PatternPatcher};
use crate::pattern::RuleSet;
use log::{debug, info};
use std::path::PathBuf;

/// One input image, one rule table, one output.
#[derive(Debug, Clone)]
pub struct PatchJob {
    pub name: String,
    pub input: PathBuf,
    pub rules: RuleSet,
    pub output: OutputPolicy,
}

#[derive(Debug)]
pub struct JobReport {
    pub job: String,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub outcome: PatchOutcome,
    pub error: Option<PatchError>,
    pub dry_run: bool,
}

impl JobReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl PatchJob {
    pub fn new(name: &str, input: PathBuf, rules: RuleSet, output: OutputPolicy) -> Self {
        Self {
            name: name.to_string(),
            input,
            rules,
            output,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        image::output_path(&self.input, &self.output)
    }

    /// Loads a private copy of the input, patches it and writes the result.
    pub fn run(&self, dry_run: bool) -> JobReport {
        info!("[{}] patching {}", self.name, self.input.display());

        let mut report = JobReport {
            job: self.name.clone(),
            input: self.input.clone(),
            output: None,
            outcome: PatchOutcome::new(),
            error: None,
            dry_run,
        };

        match self.execute(dry_run, &mut report.outcome) {
            Ok(output) => report.output = output,
            Err(e) => {
                debug!("[{}] {}", self.name, e);
                report.error = Some(e);
            }
        }

        report
    }

    fn execute(&self, dry_run: bool, outcome: &mut PatchOutcome) -> Result<Option<PathBuf>, PatchError> {
        let mut buffer = image::load(&self.input)?;
        let patcher = PatternPatcher::new(self.rules.clone());

        if dry_run {
            *outcome = patcher.scan(&buffer);
        } else {
            let backup = match self.output {
                OutputPolicy::InPlace { backup: true } => Some(buffer.clone()),
                _ => None,
            };
            *outcome = patcher.apply(&mut buffer);
            if outcome.found() {
                return image::persist(&self.input, backup.as_deref(), &buffer, &self.output).map(Some);
            }
        }

        if !outcome.found() {
            return Err(PatchError::PatternNotFound { path: self.input.clone() });
        }

        Ok(None)
    }
}
