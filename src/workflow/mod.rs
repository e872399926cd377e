// Fri Oct 16 2026 - Alex

pub mod job;

pub use job::{JobReport, PatchJob};

use crate::config::{Config, OutputPolicy};
use crate::error::PatchError;
use crate::pattern::RuleSet;
use indicatif::ProgressBar;
use log::info;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;

pub struct Workflow {
    config: Config,
    progress: Option<ProgressBar>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<JobReport>,
}

impl RunSummary {
    /// Every job has to succeed for the run to count.
    pub fn success(&self) -> bool {
        !self.reports.is_empty() && self.reports.iter().all(|r| r.is_success())
    }

    pub fn failed(&self) -> Vec<&JobReport> {
        self.reports.iter().filter(|r| !r.is_success()).collect()
    }

    pub fn total_matches(&self) -> usize {
        self.reports.iter().map(|r| r.outcome.match_count()).sum()
    }
}

impl Workflow {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn jobs(&self) -> Vec<PatchJob> {
        let mut jobs = Vec::new();

        if let Some(ref library) = self.config.library {
            jobs.push(PatchJob::new(
                "library",
                self.config.resolve(&library.path),
                RuleSet::library(library.limit),
                library.output.clone(),
            ));
        }

        if let Some(ref exe) = self.config.executable {
            let input = self.config.resolve(&exe.path);
            for profile in &exe.profiles {
                jobs.push(PatchJob::new(
                    &format!("executable:{}", profile.name),
                    input.clone(),
                    RuleSet::executable(profile),
                    OutputPolicy::suffixed(&profile.suffix),
                ));
            }
        }

        jobs
    }

    /// Every input has to be readable before anything is written.
    pub fn preflight(&self, jobs: &[PatchJob]) -> Result<(), PatchError> {
        let mut seen = HashSet::new();
        for job in jobs {
            if !seen.insert(job.input.as_path()) {
                continue;
            }
            File::open(&job.input).map_err(|source| PatchError::InputNotFound {
                path: job.input.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn run(&self, dry_run: bool) -> Result<RunSummary, PatchError> {
        let jobs = self.jobs();
        self.preflight(&jobs)?;

        if let Some(ref pb) = self.progress {
            pb.set_length(jobs.len() as u64);
        }

        info!("Running {} job(s){}", jobs.len(), if dry_run { " (dry run)" } else { "" });

        let run_one = |job: &PatchJob| {
            let report = job.run(dry_run);
            if let Some(ref pb) = self.progress {
                pb.inc(1);
            }
            report
        };

        let reports: Vec<JobReport> = if self.config.parallel {
            jobs.par_iter().map(run_one).collect()
        } else {
            jobs.iter().map(run_one).collect()
        };

        if let Some(ref pb) = self.progress {
            pb.finish_and_clear();
        }

        Ok(RunSummary { reports })
    }
}
