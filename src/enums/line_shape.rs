use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::constants::METADATA_PROPERTY_NAMES;

static PROPERTY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*):\s*\S").expect("valid property pattern"));

/// Structural shape of a line eligible for indentation repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// A bare `}` closing a nested block
    ClosingBrace,
    /// A `);` or `});` terminating a call
    CallTerminator,
    /// A `name: value` assignment using a known metadata property name
    Property,
}

impl LineShape {
    pub fn classify(trimmed: &str) -> Option<Self> {
        if trimmed == "}" {
            return Some(Self::ClosingBrace);
        }
        if trimmed == ");" || trimmed == "});" {
            return Some(Self::CallTerminator);
        }
        if let Some(captures) = PROPERTY_SHAPE.captures(trimmed) {
            let name = &captures[1];
            if METADATA_PROPERTY_NAMES.contains(&name) {
                return Some(Self::Property);
            }
        }
        None
    }

    /// Nesting depth below the canonical base, in indent units.
    pub fn nesting_levels(self) -> usize {
        match self {
            Self::CallTerminator => 0,
            Self::ClosingBrace => 1,
            Self::Property => 2,
        }
    }
}
