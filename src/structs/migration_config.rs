use serde::Deserialize;

use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MigrationConfig {
    #[serde(default)]
    pub migration: MigrationSettings,
    #[serde(default)]
    pub repair: RepairSettings,
    #[serde(default)]
    pub verify: VerifySettings,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MigrationSettings {
    /// Marker a file must contain before it is migrated. Absent or empty
    /// disables the check.
    #[serde(default = "ConfigHelper::default_require_marker")]
    pub require_marker: Option<String>,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            require_marker: ConfigHelper::default_require_marker(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepairSettings {
    #[serde(default = "ConfigHelper::default_anchor_marker")]
    pub anchor_marker: String,
    #[serde(default = "ConfigHelper::default_canonical_indent")]
    pub canonical_indent: String,
}

impl Default for RepairSettings {
    fn default() -> Self {
        Self {
            anchor_marker: ConfigHelper::default_anchor_marker(),
            canonical_indent: ConfigHelper::default_canonical_indent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifySettings {
    #[serde(default = "ConfigHelper::default_residue_pattern")]
    pub residue_pattern: String,
}

impl Default for VerifySettings {
    fn default() -> Self {
        Self {
            residue_pattern: ConfigHelper::default_residue_pattern(),
        }
    }
}

/// One externally supplied rewrite rule record.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}
