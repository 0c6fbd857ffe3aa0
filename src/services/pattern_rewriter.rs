use crate::structs::rewrite_outcome::{RewriteOutcome, RuleReport};
use crate::structs::rewrite_rule::RewriteRule;

pub struct PatternRewriter;

impl PatternRewriter {
    /// Applies the rules strictly in order, each one against the current
    /// state of the text, so a rule sees the effects of the rules before it.
    ///
    /// Counting is per occurrence: every replaced span increments the total.
    /// A rule with zero matches is a non-error and contributes nothing.
    pub fn rewrite(text: &str, rules: &[RewriteRule]) -> RewriteOutcome {
        let mut current = text.to_string();
        let mut replacement_count = 0;
        let mut rule_reports = Vec::with_capacity(rules.len());

        for rule in rules {
            let match_count = rule.pattern.find_iter(&current).count();

            if match_count > 0 {
                current = rule
                    .pattern
                    .replace_all(&current, rule.replacement.as_str())
                    .into_owned();
                replacement_count += match_count;
            }

            rule_reports.push(RuleReport {
                name: rule.name.clone(),
                match_count,
            });
        }

        RewriteOutcome {
            text: current,
            replacement_count,
            rule_reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::migration_config::RuleConfig;

    fn rule(name: &str, pattern: &str, replacement: &str) -> RewriteRule {
        RewriteRule::compile(&RuleConfig {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn untouched_document_reports_zero_changes() {
        let rules = vec![rule("nope", r"console\.log\('gone'\);", "logger.info('gone');")];
        let text = "function f() {\n  return 1;\n}\n";

        let outcome = PatternRewriter::rewrite(text, &rules);

        assert_eq!(outcome.text, text);
        assert_eq!(outcome.replacement_count, 0);
        assert!(!outcome.changed());
        assert_eq!(outcome.unmatched_rules(), vec!["nope"]);
    }

    #[test]
    fn rules_apply_sequentially_not_simultaneously() {
        let rules = vec![
            rule("first", "A", "X(Y)"),
            rule("second", r"X\(", "Z("),
        ];

        let outcome = PatternRewriter::rewrite("A", &rules);

        assert_eq!(outcome.text, "Z(Y)");
        assert_eq!(outcome.replacement_count, 2);
    }

    #[test]
    fn each_occurrence_counts_once() {
        let rules = vec![rule("status", r"console\.log\('ok'\);", "logger.info('ok');")];
        let text = "console.log('ok');\nother();\nconsole.log('ok');\n";

        let outcome = PatternRewriter::rewrite(text, &rules);

        assert_eq!(outcome.replacement_count, 2);
        assert!(!outcome.text.contains("console.log"));
    }

    #[test]
    fn second_application_is_a_no_op() {
        let rules = vec![rule(
            "cache-ready",
            r"console\.log\('\[Cache\] ready'\);",
            "logger.info('Cache ready', { metadata: { service: 'CacheService' } });",
        )];
        let text = "start();\nconsole.log('[Cache] ready');\n";

        let first = PatternRewriter::rewrite(text, &rules);
        let second = PatternRewriter::rewrite(&first.text, &rules);

        assert_eq!(second.text, first.text);
        assert_eq!(second.replacement_count, 0);
    }

    #[test]
    fn replacement_templates_expand_capture_groups() {
        let rules = vec![rule(
            "service-ready",
            r"console\.log\('\[([A-Za-z]+)Service\] ready'\);",
            "logger.info('Service ready', { metadata: { service: '${1}Service' } });",
        )];

        let outcome = PatternRewriter::rewrite("console.log('[AuthService] ready');", &rules);

        assert_eq!(
            outcome.text,
            "logger.info('Service ready', { metadata: { service: 'AuthService' } });"
        );
        assert_eq!(outcome.replacement_count, 1);
    }
}
