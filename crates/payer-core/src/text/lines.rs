//! Raw OCR text to an ordered list of non-empty lines.

use crate::models::candidate::Line;

/// Split raw OCR text into trimmed, non-empty lines.
///
/// Order is preserved and nothing is deduplicated. `None` and empty input
/// both yield an empty list.
pub fn normalize_lines(raw: Option<&str>) -> Vec<Line> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split('\n')
        .map(str::trim)
        .filter(|normalized| !normalized.is_empty())
        .enumerate()
        .map(|(index, normalized)| Line {
            index,
            normalized: normalized.to_string(),
            lower: normalized.to_lowercase(),
        })
        .collect()
}
