//! Terminal report formatting.

use colored::Colorize;

use crate::types::{SummaryStatistics, TrialSet};

/// Format a completed run for human-readable terminal output.
///
/// Renders, in order: the raw per-trial durations in trial order, the
/// median, variance and standard deviation, the throughput in GiB/s, and
/// the durations again sorted ascending. The duration sequence appears
/// twice on purpose — the trial-order pass shows drift across the run, the
/// sorted pass shows the spread at a glance — preserving the two-pass echo
/// of the original harness output.
///
/// Pure formatting: no side effects beyond producing text. The caller
/// decides where the text is written.
pub fn format_report(set: &TrialSet, stats: &SummaryStatistics) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", render_durations(set.durations_secs())));

    output.push_str(&format!(
        "Read {} bytes in {:.6} seconds (median of {} trials)\n",
        set.byte_size(),
        stats.median_secs,
        set.len(),
    ));
    output.push_str(&format!(
        "Variance is {:.6} s\u{00B2}, standard deviation is {:.6} s\n",
        stats.variance, stats.std_dev,
    ));
    output.push_str(&format!(
        "Achieved {}\n",
        format!("{:.6} GiB/s", stats.gib_per_sec).green().bold(),
    ));

    let mut sorted = set.durations_secs().to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    output.push_str(&format!("{}\n", render_durations(&sorted)));

    output
}

/// Render a duration sequence as `[a, b, c]` with six decimal places.
fn render_durations(durations: &[f64]) -> String {
    let joined = durations
        .iter()
        .map(|d| format!("{d:.6}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
