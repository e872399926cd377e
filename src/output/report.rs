// Fri Oct 16 2026 - Alex

use crate::patcher::{PatchRecord, RuleHits};
use crate::workflow::{JobReport, RunSummary};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub success: bool,
    pub total_matches: usize,
    pub jobs: Vec<JobEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobEntry {
    pub name: String,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub status: String,
    pub error: Option<String>,
    pub dry_run: bool,
    pub rules: Vec<RuleHits>,
    pub matches: Vec<PatchRecord>,
}

impl From<&JobReport> for JobEntry {
    fn from(report: &JobReport) -> Self {
        Self {
            name: report.job.clone(),
            input: report.input.clone(),
            output: report.output.clone(),
            status: report.error.as_ref().map_or("ok", |e| e.kind()).to_string(),
            error: report.error.as_ref().map(|e| e.to_string()),
            dry_run: report.dry_run,
            rules: report.outcome.rule_hits().to_vec(),
            matches: report.outcome.records().to_vec(),
        }
    }
}

impl From<&RunSummary> for RunReport {
    fn from(summary: &RunSummary) -> Self {
        Self {
            success: summary.success(),
            total_matches: summary.total_matches(),
            jobs: summary.reports.iter().map(JobEntry::from).collect(),
        }
    }
}

impl RunReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self.to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(json.as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use crate::patcher::apply_rules;
    use crate::pattern::PatchRule;

    #[test]
    fn test_report_from_summary() {
        let mut buffer = vec![0x68u8, 0x40, 0x06, 0x00, 0x00];
        let outcome = apply_rules(&mut buffer, &[PatchRule::push_imm32("width", 1600, 3840)]);

        let summary = RunSummary {
            reports: vec![
                JobReport {
                    job: "library".to_string(),
                    input: PathBuf::from("gfx.dll"),
                    output: Some(PathBuf::from("gfx_patched.dll")),
                    outcome,
                    error: None,
                    dry_run: false,
                },
                JobReport {
                    job: "executable:1080p".to_string(),
                    input: PathBuf::from("game.exe"),
                    output: None,
                    outcome: Default::default(),
                    error: Some(PatchError::PatternNotFound { path: PathBuf::from("game.exe") }),
                    dry_run: false,
                },
            ],
        };

        let report = RunReport::from(&summary);
        assert!(!report.success);
        assert_eq!(report.total_matches, 1);
        assert_eq!(report.jobs[0].status, "ok");
        assert_eq!(report.jobs[1].status, "pattern_not_found");

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["jobs"][0]["matches"][0]["offset"], 0);
        assert_eq!(json["jobs"][0]["matches"][0]["new_value"], 3840);
        assert_eq!(json["jobs"][0]["rules"][0]["count"], 1);
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = RunReport::from(&RunSummary::default());
        report.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"success\": false"));
    }
}
