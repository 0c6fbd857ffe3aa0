use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{MigrateError, MigrateResult};
use crate::logger::rule_report_logger::RuleReportLogger;
use crate::services::file_rewriter::FileRewriter;
use crate::services::verifier::Verifier;
use crate::structs::migration_config::MigrationConfig;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub fn run_command(&mut self, command: Commands) -> MigrateResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { path } => Self::init_command(path.as_deref()),
            Commands::Migrate { file, config } => Self::migrate_command(&file, config.as_deref()),
            Commands::Repair { file, config } => Self::repair_command(&file, config.as_deref()),
            Commands::Reflow { file, config } => Self::reflow_command(&file, config.as_deref()),
            Commands::Verify { files, pattern, json } => {
                Self::verify_command(&files, pattern.as_deref(), json)
            }
            Commands::List { config } => Self::list_command(config.as_deref()),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️ Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(path: Option<&str>) -> MigrateResult<()> {
        log::info!("🚀 Initializing logmigrate configuration...");

        let target = ConfigManager::create_sample_config(path)?;

        log::info!("✅ Configuration file created: {}", target.display());
        log::info!("📝 Edit the rule table to match your target files.");
        log::info!("🔧 Run 'logmigrate list' to check the loaded rules.");
        Ok(())
    }

    fn migrate_command(file: &str, config_path: Option<&str>) -> MigrateResult<()> {
        log::info!("🔄 Migrating {file}...");

        let config = ConfigManager::load(config_path)?;
        if config.rules.is_empty() {
            return Err(MigrateError::config_error(
                "No rewrite rules configured",
                Some("Run 'logmigrate init' and fill in the [[rules]] table"),
            ));
        }

        let (outcome, wrote) = FileRewriter::apply_migration(file, &config)?;
        RuleReportLogger::print_migration_report(file, &outcome, wrote);
        Ok(())
    }

    fn repair_command(file: &str, config_path: Option<&str>) -> MigrateResult<()> {
        log::info!("🔧 Repairing indentation in {file}...");

        let config = ConfigManager::load(config_path)?;
        let (correction_count, wrote) = FileRewriter::apply_repair(file, &config)?;
        RuleReportLogger::print_line_pass_report(file, "indentation corrections", correction_count, wrote);
        Ok(())
    }

    fn reflow_command(file: &str, config_path: Option<&str>) -> MigrateResult<()> {
        log::info!("🔧 Reflowing collapsed metadata blocks in {file}...");

        let config = ConfigManager::load(config_path)?;
        let (reflowed_count, wrote) = FileRewriter::apply_reflow(file, &config)?;
        RuleReportLogger::print_line_pass_report(file, "block reflows", reflowed_count, wrote);
        Ok(())
    }

    fn verify_command(files: &[String], pattern: Option<&str>, json: bool) -> MigrateResult<()> {
        if files.is_empty() {
            return Err(MigrateError::config_error(
                "No files given to verify",
                Some("Pass one or more file paths: logmigrate verify src/a.ts src/b.ts"),
            ));
        }

        log::info!("🔍 Verifying {} files...", files.len());

        let residue_pattern = pattern
            .map_or_else(
                || ConfigManager::load(None).map(|c| c.verify.residue_pattern),
                |p| Ok(p.to_string()),
            )?;
        let compiled = Verifier::compile_residue_pattern(&residue_pattern)?;
        let summary = Verifier::verify_files(files, &compiled)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            summary.print_summary();
        }

        Ok(())
    }

    fn list_command(config_path: Option<&str>) -> MigrateResult<()> {
        log::info!("📋 Loading rule configuration...");

        let config = ConfigManager::load(config_path)?;

        if config.rules.is_empty() {
            log::info!("⚠️ No rules configured.");
            log::info!("💡 Run 'logmigrate init' to create a configuration file.");
            return Ok(());
        }

        log::info!("📋 Configured rules:");
        for (i, rule) in config.rules.iter().enumerate() {
            log::info!("{}. ✅ {}", i + 1, rule.name);
            log::info!("   🔍 {}", rule.pattern);
        }

        log::info!("📊 Total rules: {}", config.rules.len());
        Self::print_settings(&config);
        Ok(())
    }

    fn print_settings(config: &MigrationConfig) {
        match config.migration.require_marker.as_deref() {
            Some(marker) if !marker.is_empty() => log::info!("🔒 Required marker: {marker}"),
            _ => log::info!("🔓 Marker check disabled"),
        }
        log::info!("⚓ Repair anchor: {}", config.repair.anchor_marker);
        log::info!("🔍 Residue pattern: {}", config.verify.residue_pattern);
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
