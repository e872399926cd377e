// Fri Oct 16 2026 - Alex

use crate::config::{LibraryLimit, TargetProfile};
use crate::pattern::PatchSignature;
use std::fmt;

pub const LIBRARY_WIDTH_LIMIT: u32 = 1600;
pub const LIBRARY_HEIGHT_LIMIT: u32 = 1200;
pub const MENU_WIDTH_LIMIT: u32 = 1024;
pub const MENU_HEIGHT_LIMIT: u32 = 768;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRule {
    name: String,
    signature: PatchSignature,
    replacement: u32,
}

impl PatchRule {
    pub fn new(name: &str, signature: PatchSignature, replacement: u32) -> Self {
        Self {
            name: name.to_string(),
            signature,
            replacement,
        }
    }

    /// Rule for a `push imm32` carrying `old`, rewritten to `new`.
    pub fn push_imm32(name: &str, old: u32, new: u32) -> Self {
        Self::new(name, PatchSignature::push_imm32(old), new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &PatchSignature {
        &self.signature
    }

    pub fn old_value(&self) -> u32 {
        self.signature.literal()
    }

    pub fn replacement(&self) -> u32 {
        self.replacement
    }
}

impl fmt::Display for PatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.old_value(), self.replacement)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<PatchRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: PatchRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Width then height limits of the rendering library.
    pub fn library(limit: LibraryLimit) -> Self {
        let (width, height) = limit.dimensions();
        Self::new()
            .with_rule(PatchRule::push_imm32("width", LIBRARY_WIDTH_LIMIT, width))
            .with_rule(PatchRule::push_imm32("height", LIBRARY_HEIGHT_LIMIT, height))
    }

    /// Menu width then height bounds of the executable.
    pub fn executable(profile: &TargetProfile) -> Self {
        Self::new()
            .with_rule(PatchRule::push_imm32("menu width", MENU_WIDTH_LIMIT, profile.width))
            .with_rule(PatchRule::push_imm32("menu height", MENU_HEIGHT_LIMIT, profile.height))
    }

    pub fn rules(&self) -> &[PatchRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatchRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a PatchRule;
    type IntoIter = std::slice::Iter<'a, PatchRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_rules_uhd() {
        let rules = RuleSet::library(LibraryLimit::Uhd);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].old_value(), 1600);
        assert_eq!(rules.rules()[0].replacement(), 3840);
        assert_eq!(rules.rules()[1].old_value(), 1200);
        assert_eq!(rules.rules()[1].replacement(), 2160);
    }

    #[test]
    fn test_library_rules_unlimited() {
        let rules = RuleSet::library(LibraryLimit::Unlimited);
        assert!(rules.iter().all(|r| r.replacement() == 1_000_000));
    }

    #[test]
    fn test_executable_rules_follow_profile() {
        let profile = TargetProfile::new("1440p", 2560, 1440, "_1440p");
        let rules = RuleSet::executable(&profile);
        assert_eq!(rules.rules()[0].signature().bytes(), &[0x68, 0x00, 0x04, 0x00, 0x00]);
        assert_eq!(rules.rules()[0].replacement(), 2560);
        assert_eq!(rules.rules()[1].signature().bytes(), &[0x68, 0x00, 0x03, 0x00, 0x00]);
        assert_eq!(rules.rules()[1].replacement(), 1440);
    }

    #[test]
    fn test_rule_display() {
        let rule = PatchRule::push_imm32("width", 1600, 3840);
        assert_eq!(rule.to_string(), "width: 1600 -> 3840");
    }
}
