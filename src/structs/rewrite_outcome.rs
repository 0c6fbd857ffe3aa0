/// Per-rule match report for one run.
#[derive(Debug, Clone)]
pub struct RuleReport {
    pub name: String,
    pub match_count: usize,
}

/// Result of one pattern-rewrite pass over a document.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub text: String,
    pub replacement_count: usize,
    pub rule_reports: Vec<RuleReport>,
}

impl RewriteOutcome {
    pub fn changed(&self) -> bool {
        self.replacement_count > 0
    }

    /// Rules that never fired, surfaced so pattern drift is visible
    /// instead of silently masked.
    pub fn unmatched_rules(&self) -> Vec<&str> {
        self.rule_reports
            .iter()
            .filter(|report| report.match_count == 0)
            .map(|report| report.name.as_str())
            .collect()
    }
}
