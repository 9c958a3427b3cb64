//! Splitting a raw summary block into ordered fragments

use flowmap_graph::SummaryFragment;

/// Split a newline-delimited summary block into ordered fragments.
///
/// Blank lines (empty after trimming ASCII whitespace) are discarded; kept
/// lines become fragments verbatim, in block order.
#[must_use]
pub fn split_block(raw: &str) -> Vec<SummaryFragment> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(SummaryFragment::new)
        .collect()
}
