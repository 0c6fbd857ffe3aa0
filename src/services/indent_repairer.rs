use crate::config::constants;
use crate::enums::line_shape::LineShape;
use crate::structs::repair_outcome::RepairOutcome;

pub struct IndentRepairer;

impl IndentRepairer {
    /// Scans the lines in order, tracking whether an anchor line (one that
    /// contains `anchor_marker`) has been seen. A line whose trimmed content
    /// matches a structural shape and whose indentation is deeper than its
    /// canonical target is re-emitted at `canonical_indent` extended by a
    /// fixed per-shape nested offset. Anchor lines and everything else are
    /// copied through unchanged.
    ///
    /// Candidates appearing before any anchor fall back to a hard-coded
    /// default base instead of failing. No parsing happens here; the pass is
    /// a best-effort cosmetic repair.
    pub fn repair(lines: &[String], anchor_marker: &str, canonical_indent: &str) -> RepairOutcome {
        let mut repaired_lines = Vec::with_capacity(lines.len());
        let mut correction_count = 0;
        let mut anchor_seen = false;

        for line in lines {
            if line.contains(anchor_marker) {
                anchor_seen = true;
                repaired_lines.push(line.clone());
                continue;
            }

            let trimmed = line.trim();
            let Some(shape) = LineShape::classify(trimmed) else {
                repaired_lines.push(line.clone());
                continue;
            };

            let base = if anchor_seen {
                canonical_indent
            } else {
                constants::FALLBACK_CANONICAL_INDENT
            };

            let target_depth =
                base.len() + shape.nesting_levels() * constants::INDENT_UNIT.len();
            let current_depth = line.len() - line.trim_start().len();

            if current_depth <= target_depth {
                repaired_lines.push(line.clone());
                continue;
            }

            let mut repaired = String::with_capacity(target_depth + trimmed.len());
            repaired.push_str(base);
            for _ in 0..shape.nesting_levels() {
                repaired.push_str(constants::INDENT_UNIT);
            }
            repaired.push_str(trimmed);

            repaired_lines.push(repaired);
            correction_count += 1;
        }

        RepairOutcome {
            lines: repaired_lines,
            correction_count,
        }
    }
}
