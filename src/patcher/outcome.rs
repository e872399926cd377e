// Fri Oct 16 2026 - Alex

use serde::Serialize;

/// A single substitution made by the patcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchRecord {
    pub rule: String,
    pub offset: usize,
    pub old_value: u32,
    pub new_value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHits {
    pub rule: String,
    pub old_value: u32,
    pub new_value: u32,
    pub count: usize,
}

impl RuleHits {
    pub fn found(&self) -> bool {
        self.count > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    records: Vec<PatchRecord>,
    rule_hits: Vec<RuleHits>,
}

impl PatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin_rule(&mut self, rule: &str, old_value: u32, new_value: u32) {
        self.rule_hits.push(RuleHits {
            rule: rule.to_string(),
            old_value,
            new_value,
            count: 0,
        });
    }

    pub(crate) fn record(&mut self, record: PatchRecord) {
        if let Some(hits) = self.rule_hits.last_mut() {
            hits.count += 1;
        }
        self.records.push(record);
    }

    /// True when at least one rule matched somewhere, even if others did not.
    pub fn found(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[PatchRecord] {
        &self.records
    }

    pub fn rule_hits(&self) -> &[RuleHits] {
        &self.rule_hits
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.offset).collect()
    }

    pub fn hits_for(&self, rule: &str) -> usize {
        self.rule_hits.iter()
            .filter(|h| h.rule == rule)
            .map(|h| h.count)
            .sum()
    }

    pub fn missed_rules(&self) -> Vec<&str> {
        self.rule_hits.iter()
            .filter(|h| !h.found())
            .map(|h| h.rule.as_str())
            .collect()
    }
}
