use crate::structs::rewrite_outcome::RewriteOutcome;

pub struct RuleReportLogger;

impl RuleReportLogger {
    pub fn print_migration_report(file: &str, outcome: &RewriteOutcome, wrote: bool) {
        log::info!("📊 Rule report for {file}:");

        for report in &outcome.rule_reports {
            if report.match_count > 0 {
                log::info!("   ✅ {} → {} occurrences", report.name, report.match_count);
            }
        }

        // Never-matched rules usually mean the target file drifted away from
        // the pattern text. Surface them instead of masking the mismatch.
        let unmatched = outcome.unmatched_rules();
        if !unmatched.is_empty() {
            log::warn!("⚠️ {} rules never matched: {}", unmatched.len(), unmatched.join(", "));
        }

        if wrote {
            log::info!("✅ {} replacements written to {file}", outcome.replacement_count);
        } else {
            log::info!("ℹ️ No changes, {file} left untouched");
        }
    }

    pub fn print_line_pass_report(file: &str, label: &str, count: usize, wrote: bool) {
        if wrote {
            log::info!("✅ {count} {label} applied to {file}");
        } else {
            log::info!("ℹ️ No {label} needed, {file} left untouched");
        }
    }
}
