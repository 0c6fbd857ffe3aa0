use regex::Regex;

use crate::errors::{MigrateError, MigrateResult};
use crate::structs::migration_config::RuleConfig;

/// A compiled (pattern, replacement) pair, applied once, in order.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: String,
    pub pattern: Regex,
    pub replacement: String,
}

impl RewriteRule {
    pub fn compile(config: &RuleConfig) -> MigrateResult<Self> {
        let pattern = Regex::new(&config.pattern)
            .map_err(|e| MigrateError::rule_error(&config.name, &e.to_string()))?;

        Ok(Self {
            name: config.name.clone(),
            pattern,
            replacement: config.replacement.clone(),
        })
    }

    pub fn compile_all(configs: &[RuleConfig]) -> MigrateResult<Vec<Self>> {
        configs.iter().map(Self::compile).collect()
    }
}
