//! Score and timing formatters for CLI output.

/// Width of a full score bar in characters.
pub const BAR_WIDTH: usize = 20;

/// Format a normalized score as a whole percentage: "73%".
pub fn percent(score: f64) -> String {
    format!("{:.0}%", score.clamp(0.0, 1.0) * 100.0)
}

/// Horizontal bar for a normalized score: `BAR_WIDTH` cells, filled
/// proportionally and rounded to the nearest cell.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(BAR_WIDTH - filled)
    )
}

/// Format milliseconds as seconds with one decimal: "4.5s".
#[allow(clippy::cast_precision_loss)]
pub fn seconds(ms: u64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}

/// Format a count with optional label: "3 answers", "1 contradiction".
pub fn count_label(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
