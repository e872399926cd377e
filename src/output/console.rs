// Fri Oct 16 2026 - Alex

use crate::patcher::PatchRecord;
use crate::workflow::{JobReport, RunSummary};
use colored::Colorize;

pub fn format_record(record: &PatchRecord) -> String {
    format!(
        "Found {} limit {} (0x{:x}) at offset: 0x{:08x}\n  Patched to: {} (0x{:x})",
        record.rule, record.old_value, record.old_value, record.offset, record.new_value, record.new_value
    )
}

pub fn print_job(report: &JobReport) {
    println!("{} Target file: {} [{}]", "[*]".blue(), report.input.display(), report.job.cyan());

    for record in report.outcome.records() {
        println!("{}", format_record(record));
    }

    if report.outcome.found() {
        for missed in report.outcome.missed_rules() {
            println!("{} No {} limit found, skipped", "[-]".yellow(), missed);
        }
    }

    match (&report.error, &report.output) {
        (Some(e), _) => eprintln!("{} Error: {}", "[!]".red(), e),
        (None, Some(output)) => println!("{} Successfully created: {}", "[+]".green(), output.display()),
        (None, None) => println!(
            "{} Dry run: {} match(es), nothing written",
            "[+]".green(),
            report.outcome.match_count()
        ),
    }

    println!();
}

pub fn print_summary(summary: &RunSummary) {
    for report in &summary.reports {
        print_job(report);
    }

    println!("{}", "=".repeat(50).cyan());
    if summary.success() {
        println!("{} Patching completed successfully!", "[+]".green());
    } else {
        eprintln!(
            "{} Patching failed! ({} of {} job(s) failed)",
            "[!]".red(),
            summary.failed().len(),
            summary.reports.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let record = PatchRecord {
            rule: "width".to_string(),
            offset: 0x1a2b,
            old_value: 1600,
            new_value: 3840,
        };
        assert_eq!(
            format_record(&record),
            "Found width limit 1600 (0x640) at offset: 0x00001a2b\n  Patched to: 3840 (0xf00)"
        );
    }
}
