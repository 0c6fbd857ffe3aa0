use std::fs;

use tempfile::tempdir;

use logmigrate_cli::errors::MigrateError;
use logmigrate_cli::services::file_rewriter::FileRewriter;
use logmigrate_cli::structs::migration_config::{MigrationConfig, RuleConfig};

fn config_with_rules(rules: Vec<RuleConfig>) -> MigrationConfig {
    let mut config = MigrationConfig::default();
    config.rules = rules;
    config
}

fn console_rule(name: &str, pattern: &str, replacement: &str) -> RuleConfig {
    RuleConfig {
        name: name.to_string(),
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

#[test]
fn migrate_rewrites_the_file_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("service.ts");
    fs::write(
        &path,
        "import { logger } from './logger';\n\
         console.log('[UserCache] ready');\n\
         doWork();\n\
         console.log('[UserCache] ready');\n",
    )
    .unwrap();

    let config = config_with_rules(vec![console_rule(
        "cache-ready",
        r"console\.log\('\[UserCache\] ready'\);",
        "logger.info('Cache ready', { metadata: { service: 'UserCacheService' } });",
    )]);

    let path_str = path.to_str().unwrap();
    let (outcome, wrote) = FileRewriter::apply_migration(path_str, &config).unwrap();

    assert!(wrote);
    assert_eq!(outcome.replacement_count, 2);

    let updated = fs::read_to_string(&path).unwrap();
    assert!(!updated.contains("console.log"));
    assert_eq!(updated.matches("logger.info('Cache ready'").count(), 2);
    assert!(updated.contains("doWork();"));
}

#[test]
fn no_op_run_never_touches_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clean.ts");
    let original = "import { logger } from './logger';\nlogger.info('already migrated');\n";
    fs::write(&path, original).unwrap();

    let modified_before = fs::metadata(&path).unwrap().modified().unwrap();

    let config = config_with_rules(vec![console_rule(
        "nothing-here",
        r"console\.log\('gone'\);",
        "logger.info('gone');",
    )]);

    let path_str = path.to_str().unwrap();
    let (outcome, wrote) = FileRewriter::apply_migration(path_str, &config).unwrap();

    assert!(!wrote);
    assert_eq!(outcome.replacement_count, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert_eq!(
        fs::metadata(&path).unwrap().modified().unwrap(),
        modified_before
    );
}

#[test]
fn running_the_rule_set_twice_reports_zero_further_changes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("service.ts");
    fs::write(
        &path,
        "import { logger } from './logger';\nconsole.log('[UserCache] ready');\n",
    )
    .unwrap();

    let config = config_with_rules(vec![console_rule(
        "cache-ready",
        r"console\.log\('\[UserCache\] ready'\);",
        "logger.info('Cache ready', { metadata: { service: 'UserCacheService' } });",
    )]);

    let path_str = path.to_str().unwrap();
    let (first, first_wrote) = FileRewriter::apply_migration(path_str, &config).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    let (second, second_wrote) = FileRewriter::apply_migration(path_str, &config).unwrap();

    assert!(first_wrote);
    assert_eq!(first.replacement_count, 1);
    assert!(!second_wrote);
    assert_eq!(second.replacement_count, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn file_without_the_logger_import_is_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unprepared.ts");
    let original = "console.log('[UserCache] ready');\n";
    fs::write(&path, original).unwrap();

    let config = config_with_rules(vec![console_rule(
        "cache-ready",
        r"console\.log\('\[UserCache\] ready'\);",
        "logger.info('Cache ready');",
    )]);

    let path_str = path.to_str().unwrap();
    let err = FileRewriter::apply_migration(path_str, &config).unwrap_err();

    match err {
        MigrateError::MarkerMissingError { marker, .. } => {
            assert_eq!(marker, "import { logger }");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn unreadable_file_is_a_fatal_error() {
    let config = config_with_rules(vec![console_rule("any", "a", "b")]);

    let err = FileRewriter::apply_migration("/nonexistent/service.ts", &config).unwrap_err();

    match err {
        MigrateError::FileOperationError { operation, .. } => assert_eq!(operation, "read"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn repair_fixes_over_indented_metadata_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("facade.ts");
    fs::write(
        &path,
        "      logger.info('Rollup stored', {\n\
         \u{20}       metadata: {\n\
         \u{20}               operation: 'storeRollup',\n\
         \u{20}             }\n\
         \u{20}     });\n",
    )
    .unwrap();

    let config = MigrationConfig::default();
    let path_str = path.to_str().unwrap();
    let (correction_count, wrote) = FileRewriter::apply_repair(path_str, &config).unwrap();

    assert!(wrote);
    assert_eq!(correction_count, 2);

    let updated = fs::read_to_string(&path).unwrap();
    assert!(updated.contains("\n          operation: 'storeRollup',\n"));
    assert!(updated.contains("\n        }\n"));
}

#[test]
fn repair_leaves_well_formed_files_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("facade.ts");
    let original = "      logger.info('Rollup stored', {\n\
         \u{20}       metadata: {\n\
         \u{20}         operation: 'storeRollup'\n\
         \u{20}       }\n\
         \u{20}     });\n";
    fs::write(&path, original).unwrap();

    let config = MigrationConfig::default();
    let path_str = path.to_str().unwrap();
    let (correction_count, wrote) = FileRewriter::apply_repair(path_str, &config).unwrap();

    assert!(!wrote);
    assert_eq!(correction_count, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn reflow_restores_collapsed_metadata_blocks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("facade.ts");
    fs::write(
        &path,
        "logger.info('Rollup stored', { metadata: { service: 'StorageFacade', weekNumber, year }\n\
         \u{20}       }\n\
         \u{20}     );\n",
    )
    .unwrap();

    let config = MigrationConfig::default();
    let path_str = path.to_str().unwrap();
    let (reflowed_count, wrote) = FileRewriter::apply_reflow(path_str, &config).unwrap();

    assert!(wrote);
    assert_eq!(reflowed_count, 1);

    let updated = fs::read_to_string(&path).unwrap();
    assert!(updated.contains("\n        metadata: {\n"));
    assert!(updated.contains("\n          service: 'StorageFacade',\n"));
    assert!(updated.contains("\n          weekNumber,\n"));
    assert!(updated.ends_with("\n      });\n"));
}
