use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::constants;
use crate::errors::{MigrateError, MigrateResult};
use crate::structs::migration_config::MigrationConfig;

pub struct ConfigManager;

impl ConfigManager {
    /// Resolves the configuration: explicit path, then `./logmigrate.toml`,
    /// then `~/logmigrate/config.toml`, then built-in defaults.
    pub fn load(explicit_path: Option<&str>) -> MigrateResult<MigrationConfig> {
        if let Some(path) = explicit_path {
            return Self::load_from(Path::new(path));
        }

        let local = PathBuf::from(constants::DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home
                .join(constants::HOME_CONFIG_DIR)
                .join(constants::HOME_CONFIG_FILE);
            if home_config.exists() {
                return Self::load_from(&home_config);
            }
        }

        log::info!("ℹ️ No configuration file found, using built-in defaults");
        Ok(MigrationConfig::default())
    }

    fn load_from(path: &Path) -> MigrateResult<MigrationConfig> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            MigrateError::config_file_error(&path.display().to_string(), &e.to_string())
        })?;
        let config: MigrationConfig = toml::from_str(&content)?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn validate_config(config: &MigrationConfig) -> MigrateResult<()> {
        let mut names = HashSet::new();
        for rule in &config.rules {
            if rule.name.trim().is_empty() {
                return Err(MigrateError::config_error(
                    "A rule is missing its name",
                    Some("Give every [[rules]] entry a unique name"),
                ));
            }
            if rule.pattern.is_empty() {
                return Err(MigrateError::config_error(
                    &format!("Rule '{}' has an empty pattern", rule.name),
                    Some("Every rule needs a regex pattern to match"),
                ));
            }
            if !names.insert(&rule.name) {
                return Err(MigrateError::config_error(
                    &format!("Duplicate rule name: {}", rule.name),
                    Some("Rule names must be unique so per-rule reports stay readable"),
                ));
            }
        }
        Ok(())
    }

    pub fn create_sample_config(path: Option<&str>) -> MigrateResult<PathBuf> {
        let target = path
            .map_or_else(|| PathBuf::from(constants::DEFAULT_CONFIG_FILE), PathBuf::from);

        if target.exists() {
            return Err(MigrateError::config_file_error(
                &target.display().to_string(),
                "file already exists, refusing to overwrite",
            ));
        }

        fs::write(&target, Self::sample_config()).map_err(|e| {
            MigrateError::file_error(&target.display().to_string(), "write", &e.to_string())
        })?;

        Ok(target)
    }

    fn sample_config() -> &'static str {
        r#"# logmigrate rule configuration
#
# Rules are applied strictly in order, each one against the result of the
# previous. Patterns use regex syntax; replacements may reference capture
# groups with ${1}, ${2}, ... and must escape a literal dollar sign as $$.

[migration]
# A file is only migrated when it already contains this marker.
# Set it to "" to skip the check.
require_marker = "import { logger }"

[repair]
# Line containing this substring opens a structured-metadata block.
anchor_marker = "metadata: {"
# Base indentation enforced for repaired lines.
canonical_indent = "      "

[verify]
# Occurrences of this pattern count as unmigrated residue.
residue_pattern = '''console\.'''

[[rules]]
name = "cache-invalidation-by-tags"
pattern = '''console\.log\(`\[UserCache\] Invalidation by tags: \$\{tags\.join\(', '\)\}`\);'''
replacement = '''logger.info('Cache invalidation by tags', {
      metadata: {
        service: 'UserCacheService',
        operation: 'invalidateByTags',
        tags: tags.join(', ')
      }
    });'''

[[rules]]
name = "prewarm-complete"
pattern = '''console\.log\(`\[UserCache\] Prewarming \$\{entityType\} complete: \$\{limit\} contexts generated`\);'''
replacement = '''logger.info('Prewarming complete', {
      metadata: {
        service: 'UserCacheService',
        operation: 'prewarmEntityType',
        entityType,
        count: limit
      }
    });'''

[[rules]]
name = "prewarm-error"
pattern = '''console\.error\(`\[UserCache\] Prewarming error \$\{entityType\}:`, error\);'''
replacement = '''logger.error('Prewarming error', {
      metadata: {
        service: 'UserCacheService',
        operation: 'prewarmEntityType',
        entityType,
        error: error instanceof Error ? error.message : String(error),
        stack: error instanceof Error ? error.stack : undefined
      }
    });'''

[[rules]]
name = "low-hit-rate-warning"
pattern = '''console\.warn\('\[UserCache\] Prewarming effectiveness low'\);'''
replacement = '''logger.warn('Prewarming effectiveness low', {
      metadata: {
        service: 'UserCacheService',
        operation: 'monitorPrewarming'
      }
    });'''

[[rules]]
name = "generic-service-ready"
pattern = '''console\.log\('\[([A-Za-z]+)Service\] ready'\);'''
replacement = '''logger.info('Service ready', {
      metadata: {
        service: '${1}Service',
        operation: 'start'
      }
    });'''
"#
    }
}
