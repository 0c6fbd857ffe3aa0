use crate::config::constants;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_require_marker() -> Option<String> {
        Some(constants::DEFAULT_REQUIRE_MARKER.to_string())
    }

    pub fn default_anchor_marker() -> String {
        constants::DEFAULT_ANCHOR_MARKER.to_string()
    }

    pub fn default_canonical_indent() -> String {
        constants::DEFAULT_CANONICAL_INDENT.to_string()
    }

    pub fn default_residue_pattern() -> String {
        constants::DEFAULT_RESIDUE_PATTERN.to_string()
    }
}
