use std::fs;
use std::path::Path;

use crate::errors::{MigrateError, MigrateResult};
use crate::services::indent_repairer::IndentRepairer;
use crate::services::metadata_reflower::MetadataReflower;
use crate::services::pattern_rewriter::PatternRewriter;
use crate::structs::migration_config::MigrationConfig;
use crate::structs::rewrite_outcome::RewriteOutcome;
use crate::structs::rewrite_rule::RewriteRule;

/// Driver for the single-file, read-transform-conditionally-write cycle.
/// There is no dry-run mode and no backup: the whole file is read once and
/// overwritten in place only when a pass changed something.
pub struct FileRewriter;

impl FileRewriter {
    pub fn read_document(path: &str) -> MigrateResult<String> {
        fs::read_to_string(Path::new(path))
            .map_err(|e| MigrateError::file_error(path, "read", &e.to_string()))
    }

    /// Writes `updated` back to `path` only when it differs from `original`,
    /// so no-op runs leave the file (and its timestamp) untouched.
    pub fn write_if_changed(path: &str, original: &str, updated: &str) -> MigrateResult<bool> {
        if updated == original {
            return Ok(false);
        }

        fs::write(Path::new(path), updated)
            .map_err(|e| MigrateError::file_error(path, "write", &e.to_string()))?;
        Ok(true)
    }

    /// Runs the configured rule set over one file. Returns the outcome and
    /// whether the file was written.
    pub fn apply_migration(
        path: &str,
        config: &MigrationConfig,
    ) -> MigrateResult<(RewriteOutcome, bool)> {
        let content = Self::read_document(path)?;

        let marker_check = config
            .migration
            .require_marker
            .as_deref()
            .filter(|marker| !marker.is_empty());
        if let Some(marker) = marker_check {
            if !content.contains(marker) {
                return Err(MigrateError::marker_error(path, marker));
            }
        }

        let rules = RewriteRule::compile_all(&config.rules)?;
        let outcome = PatternRewriter::rewrite(&content, &rules);
        let wrote = Self::write_if_changed(path, &content, &outcome.text)?;

        Ok((outcome, wrote))
    }

    /// Runs the line-oriented indentation repair over one file.
    pub fn apply_repair(path: &str, config: &MigrationConfig) -> MigrateResult<(usize, bool)> {
        let content = Self::read_document(path)?;
        let had_trailing_newline = content.ends_with('\n');

        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        let outcome = IndentRepairer::repair(
            &lines,
            &config.repair.anchor_marker,
            &config.repair.canonical_indent,
        );

        let mut updated = outcome.lines.join("\n");
        if had_trailing_newline {
            updated.push('\n');
        }

        let wrote = Self::write_if_changed(path, &content, &updated)?;
        Ok((outcome.correction_count, wrote))
    }

    /// Runs the collapsed-metadata reflow over one file.
    pub fn apply_reflow(path: &str, config: &MigrationConfig) -> MigrateResult<(usize, bool)> {
        let content = Self::read_document(path)?;

        let (updated, reflowed_count) =
            MetadataReflower::reflow(&content, &config.repair.canonical_indent);

        let wrote = Self::write_if_changed(path, &content, &updated)?;
        Ok((reflowed_count, wrote))
    }
}
