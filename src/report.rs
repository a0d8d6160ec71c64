//! Human-readable report.
//!
//! Fixed-width text for terminals: optional tag/class/id summaries followed
//! by the ranked selector table
//!
//! ```text
//! Selector                                              Rank    Pref    Freq   Emoji
//! --------------------------------------------------------------------------------
//! li.item > a                                          100.0     4.0       2       🏆
//! ```
//!
//! Selectors are cut to 50 characters and only tiered rows carry a glyph.

use std::fmt;

use crate::rank::RankedEntry;
use crate::result::Analysis;
use crate::summary::DocumentSummary;

/// Width of the selector column.
pub const SELECTOR_WIDTH: usize = 50;

/// Width of the horizontal rules.
const RULE_WIDTH: usize = 80;

/// Renders an [`Analysis`] as text via `Display`.
///
/// ```rust
/// use selector_scout::{analyze, Report};
///
/// let analysis = analyze("<ul><li><a href='/a'>A</a></li></ul>")?;
/// let text = Report::new(&analysis).to_string();
/// assert!(text.contains("li > a"));
/// # Ok::<(), selector_scout::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    analysis: &'a Analysis,
    top_n: usize,
    summaries: bool,
}

impl<'a> Report<'a> {
    /// Report with the analysis' own `top_n` and without summaries.
    #[must_use]
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            analysis,
            top_n: analysis.options().top_n,
            summaries: false,
        }
    }

    /// Overrides the number of rows per table.
    #[must_use]
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Prepends the tag, class and id summaries.
    #[must_use]
    pub fn with_summaries(mut self, summaries: bool) -> Self {
        self.summaries = summaries;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.summaries {
            write_summary(f, self.analysis.summary(), self.top_n)?;
        }
        write_ranking(f, self.analysis.ranking(), self.analysis.node_count(), self.top_n)
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &DocumentSummary, top_n: usize) -> fmt::Result {
    if !summary.tags.is_empty() {
        writeln!(f, "[INFO] Tag summary (top {top_n}):")?;
        for (tag, count) in summary.tags.iter().take(top_n) {
            writeln!(f, "  <{tag}>: {count}")?;
        }
    }

    if !summary.classes.is_empty() {
        writeln!(f, "[INFO] Common classes (top {top_n}):")?;
        for (class, count) in summary.classes.iter().take(top_n) {
            writeln!(f, "  .{class}: {count}")?;
        }
    }

    if !summary.ids.is_empty() {
        writeln!(f, "[INFO] Common ids (top {top_n}):")?;
        for (id, count) in summary.ids.iter().take(top_n) {
            writeln!(f, "  #{id}: {count}")?;
        }
    }
    Ok(())
}

fn write_ranking(
    f: &mut fmt::Formatter<'_>,
    ranking: &[RankedEntry],
    node_count: usize,
    top_n: usize,
) -> fmt::Result {
    if ranking.is_empty() {
        return writeln!(
            f,
            "[INFO] No selector candidates found ({node_count} elements scanned)."
        );
    }

    writeln!(f, "[INFO] Common nested selectors (top {top_n}, ranked):")?;
    writeln!(
        f,
        "{:<width$} {:>7} {:>7} {:>7} {:>7}",
        "Selector",
        "Rank",
        "Pref",
        "Freq",
        "Emoji",
        width = SELECTOR_WIDTH
    )?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

    for entry in ranking.iter().take(top_n) {
        let glyph = entry.tier.map_or("", |t| t.glyph());
        writeln!(
            f,
            "{:<width$.width$} {:>7.1} {:>7.1} {:>7} {:>7}",
            entry.path.as_str(),
            entry.avg_score,
            entry.avg_preference,
            entry.count,
            glyph,
            width = SELECTOR_WIDTH
        )?;
    }

    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, analyze_with_options, Options};

    const LIST: &str = r#"
        <html><body>
            <ul class="items">
                <li class="item"><a href="/1">One</a></li>
                <li class="item"><a href="/2">Two</a></li>
            </ul>
        </body></html>
    "#;

    #[test]
    fn test_table_layout() {
        let analysis = analyze(LIST).unwrap();
        let text = Report::new(&analysis).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[INFO] Common nested selectors (top 10, ranked):");
        assert!(lines[1].starts_with("Selector"));
        assert!(lines[1].ends_with("  Emoji"));
        assert_eq!(lines[2], "-".repeat(80));
        assert!(lines[3].starts_with("li.item > a "));
        assert!(lines[3].contains("  100.0     4.0       2"));
        assert_eq!(lines.last().copied(), Some("-".repeat(80).as_str()));
    }

    #[test]
    fn test_long_selector_truncated() {
        let class = "x".repeat(80);
        let html = format!(r#"<div class="{class}"><a href="/">a</a></div>"#);
        let analysis = analyze(&html).unwrap();
        let text = Report::new(&analysis).to_string();

        let row = text
            .lines()
            .find(|l| l.starts_with("div.xxx"))
            .unwrap();
        assert_eq!(row.chars().take_while(|c| *c != ' ').count(), SELECTOR_WIDTH);
    }

    #[test]
    fn test_glyph_only_on_tiered_rows() {
        let analysis = analyze(LIST).unwrap();
        let text = Report::new(&analysis).to_string();
        let rows: Vec<&str> = text.lines().skip(3).filter(|l| !l.starts_with('-')).collect();

        assert!(rows.len() > 5);
        for row in &rows[5..] {
            assert!(!row.contains('🏆') && !row.contains('🔸') && !row.contains('🥇'));
            assert!(!row.contains("🎖"));
        }
    }

    #[test]
    fn test_top_n_limits_rows() {
        let analysis = analyze_with_options(
            LIST,
            &Options {
                top_n: 2,
                ..Options::default()
            },
        )
        .unwrap();
        let text = Report::new(&analysis).to_string();

        assert!(text.starts_with("[INFO] Common nested selectors (top 2, ranked):"));
        assert_eq!(text.lines().count(), 2 + 2 + 2);
    }

    #[test]
    fn test_empty_ranking_message() {
        let analysis = analyze("").unwrap();
        let text = Report::new(&analysis).with_summaries(true).to_string();

        assert!(text.contains("[INFO] No selector candidates found (0 elements scanned)."));
        assert!(!text.contains("Tag summary"));
        assert!(!text.contains("Common classes"));
    }

    #[test]
    fn test_summaries() {
        let analysis = analyze(LIST).unwrap();
        let text = Report::new(&analysis).with_summaries(true).top_n(3).to_string();

        assert!(text.starts_with("[INFO] Tag summary (top 3):\n"));
        assert!(text.contains("  <li>: 2\n"));
        assert!(text.contains("[INFO] Common classes (top 3):\n  .item: 2\n  .items: 1\n"));
        assert!(!text.contains("Common ids"));
    }
}
