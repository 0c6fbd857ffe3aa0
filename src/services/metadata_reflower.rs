use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::constants;

/// Matches a metadata block whose properties were squashed together by an
/// earlier rewrite: `{ metadata: { ... }` followed by stray closing lines.
static COLLAPSED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{\s*metadata:\s*\{([^}]+?)\}\s*\n\s*\}\s*\n\s*\);")
        .expect("valid collapsed-block pattern")
});

pub struct MetadataReflower;

impl MetadataReflower {
    /// Re-emits every collapsed metadata block with one property per line at
    /// the canonical nested depth. Returns the new text and the number of
    /// blocks reflowed.
    pub fn reflow(text: &str, canonical_indent: &str) -> (String, usize) {
        let mut reflowed_count = 0;

        let result = COLLAPSED_BLOCK.replace_all(text, |captures: &Captures| {
            reflowed_count += 1;
            Self::format_block(&captures[1], canonical_indent)
        });

        (result.into_owned(), reflowed_count)
    }

    fn format_block(raw_properties: &str, canonical_indent: &str) -> String {
        let unit = constants::INDENT_UNIT;

        let properties: Vec<String> = raw_properties
            .replace('\n', " ")
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        let property_indent = format!("{canonical_indent}{unit}{unit}");
        let formatted = properties
            .iter()
            .map(|p| format!("{property_indent}{p}"))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            "{{\n{ci}{unit}metadata: {{\n{formatted}\n{ci}{unit}}}\n{ci}}});",
            ci = canonical_indent,
        )
    }
}
