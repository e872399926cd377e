// Fri Oct 16 2026 - Alex

pub mod console;
pub mod report;

pub use console::{print_job, print_summary};
pub use report::{JobEntry, RunReport};
