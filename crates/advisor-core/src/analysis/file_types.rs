//! Ranking of the per-extension file histogram.
use compact_str::CompactString;
use std::collections::HashMap;

/// The `limit` most common extension labels, most frequent first.
///
/// Equal counts are ordered by label so the output is the same on every run.
pub fn top_extensions(
    file_types: &HashMap<CompactString, u64>,
    limit: usize,
) -> Vec<(CompactString, u64)> {
    let mut ranked: Vec<(CompactString, u64)> = file_types
        .iter()
        .map(|(label, &count)| (label.clone(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
