// Fri Oct 16 2026 - Alex

pub mod outcome;

pub use outcome::{PatchOutcome, PatchRecord, RuleHits};

use crate::pattern::{encode_immediate, PatchRule, RuleSet, SIGNATURE_LEN};
use log::debug;

/// Applies a fixed rule table to raw file images.
#[derive(Debug, Clone)]
pub struct PatternPatcher {
    rules: RuleSet,
}

impl PatternPatcher {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn apply(&self, buffer: &mut [u8]) -> PatchOutcome {
        apply_rules(buffer, self.rules.rules())
    }

    /// Reports what `apply` would do without touching `buffer`.
    pub fn scan(&self, buffer: &[u8]) -> PatchOutcome {
        let mut scratch = buffer.to_vec();
        self.apply(&mut scratch)
    }
}

/// Scans `buffer` once per rule and rewrites every matching immediate in place.
///
/// Scanning resumes at the offset right after each match, so later windows
/// observe bytes already rewritten. The opcode byte is never touched.
pub fn apply_rules(buffer: &mut [u8], rules: &[PatchRule]) -> PatchOutcome {
    let mut outcome = PatchOutcome::new();

    for rule in rules {
        outcome.begin_rule(rule.name(), rule.old_value(), rule.replacement());
        apply_rule(buffer, rule, &mut outcome);
        if outcome.rule_hits().last().map_or(true, |h| !h.found()) {
            debug!("No match for {} ({})", rule.name(), rule.signature());
        }
    }

    outcome
}

fn apply_rule(buffer: &mut [u8], rule: &PatchRule, outcome: &mut PatchOutcome) {
    if buffer.len() < SIGNATURE_LEN {
        return;
    }

    let replacement = encode_immediate(rule.replacement());

    for offset in 0..=(buffer.len() - SIGNATURE_LEN) {
        if !rule.signature().matches(&buffer[offset..]) {
            continue;
        }

        buffer[offset + 1..offset + SIGNATURE_LEN].copy_from_slice(&replacement);

        debug!("{} at 0x{:08x}: {} -> {}", rule.name(), offset, rule.old_value(), rule.replacement());

        outcome.record(PatchRecord {
            rule: rule.name().to_string(),
            offset,
            old_value: rule.old_value(),
            new_value: rule.replacement(),
        });
    }
}
