// Fri Oct 16 2026 - Alex

pub mod signature;
pub mod rule;

pub use signature::{encode_immediate, PatchSignature, PUSH_IMM32, SIGNATURE_LEN};
pub use rule::{PatchRule, RuleSet};
