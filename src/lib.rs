// Fri Oct 16 2026 - Alex

pub mod config;
pub mod error;
pub mod pattern;
pub mod patcher;
pub mod image;
pub mod workflow;
pub mod output;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use error::PatchError;
pub use pattern::{PatchRule, PatchSignature, RuleSet};
pub use patcher::{apply_rules, PatchOutcome, PatchRecord, PatternPatcher};
pub use workflow::{RunSummary, Workflow};
