pub const DEFAULT_CONFIG_FILE: &str = "logmigrate.toml";
pub const HOME_CONFIG_DIR: &str = "logmigrate";
pub const HOME_CONFIG_FILE: &str = "config.toml";

/// Marker substring that opens a structured-metadata block
pub const DEFAULT_ANCHOR_MARKER: &str = "metadata: {";

/// Base indentation enforced for repaired blocks
pub const DEFAULT_CANONICAL_INDENT: &str = "      ";

/// Base used when a candidate line appears before any anchor
pub const FALLBACK_CANONICAL_INDENT: &str = "      ";

/// One nesting level
pub const INDENT_UNIT: &str = "  ";

/// Marker a file must carry before its console calls are migrated
pub const DEFAULT_REQUIRE_MARKER: &str = "import { logger }";

/// Residue counted by the verify command
pub const DEFAULT_RESIDUE_PATTERN: &str = r"console\.";

/// Property names recognized inside metadata blocks during repair
pub const METADATA_PROPERTY_NAMES: &[&str] = &[
    "service",
    "operation",
    "module",
    "error",
    "stack",
    "id",
    "count",
    "projectId",
    "weekNumber",
    "year",
    "category",
    "userId",
    "labelId",
    "email",
    "entityType",
    "entityId",
    "durationMs",
    "pattern",
    "tags",
];
