//! Ranking and confidence tiers.
//!
//! Paths are ordered by average occurrence score, then frequency, then path
//! string. The first few entries get a [`Tier`] from a weighted composite of
//! normalised score, preference and frequency:
//!
//! ```text
//! composite = 0.5 * avg_score / 100
//!           + 0.3 * avg_preference / max(avg_preference)
//!           + 0.2 * count / max(count)
//! ```
//!
//! Maxima are taken over every path of the run, not just the tiered ones.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::aggregate::Snapshot;
use crate::path::SelectorPath;

/// Ceiling used to normalise average occurrence scores.
pub const SCORE_CEILING: f64 = 100.0;

/// Weight of the normalised occurrence score.
pub const SCORE_WEIGHT: f64 = 0.5;
/// Weight of the normalised preference score.
pub const PREFERENCE_WEIGHT: f64 = 0.3;
/// Weight of the normalised frequency.
pub const FREQUENCY_WEIGHT: f64 = 0.2;

/// Confidence tier of a top-ranked candidate, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// composite > 0.9
    Trophy,
    /// composite > 0.75
    Gold,
    /// composite > 0.6
    Silver,
    /// composite > 0.4
    Bronze,
    /// composite > 0.2
    Medal,
    /// anything lower
    Marginal,
}

impl Tier {
    /// Tiers with their exclusive lower breakpoints, best first.
    const BREAKPOINTS: [(f64, Tier); 5] = [
        (0.9, Tier::Trophy),
        (0.75, Tier::Gold),
        (0.6, Tier::Silver),
        (0.4, Tier::Bronze),
        (0.2, Tier::Medal),
    ];

    /// Maps a composite score to its tier. Breakpoints are exclusive:
    /// exactly `0.9` is `Gold`, not `Trophy`.
    #[must_use]
    pub fn from_composite(composite: f64) -> Self {
        Self::BREAKPOINTS
            .iter()
            .find(|(threshold, _)| composite > *threshold)
            .map_or(Self::Marginal, |(_, tier)| *tier)
    }

    /// Glyph shown in the report.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Trophy => "🏆",
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
            Self::Medal => "🎖️",
            Self::Marginal => "🔸",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One ranked selector path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub path: SelectorPath,
    pub count: usize,
    pub avg_score: f64,
    pub avg_preference: f64,
    /// Only set for the top-ranked entries.
    pub tier: Option<Tier>,
}

/// Decimal places the composite is rounded to before tiering.
const COMPOSITE_PRECISION: f64 = 1e9;

/// Weighted blend of normalised score, preference and frequency.
///
/// A zero maximum normalises its component to 0. The result is rounded to
/// nine decimals, so a blend that is exactly on a breakpoint (say 0.6) is
/// returned as that breakpoint and tiers below it.
#[must_use]
pub fn composite(
    avg_score: f64,
    avg_preference: f64,
    count: usize,
    max_preference: f64,
    max_count: usize,
) -> f64 {
    let score_norm = avg_score / SCORE_CEILING;
    let preference_norm = if max_preference > 0.0 {
        avg_preference / max_preference
    } else {
        0.0
    };
    let count_norm = if max_count > 0 {
        count as f64 / max_count as f64
    } else {
        0.0
    };

    let blend = SCORE_WEIGHT * score_norm
        + PREFERENCE_WEIGHT * preference_norm
        + FREQUENCY_WEIGHT * count_norm;
    (blend * COMPOSITE_PRECISION).round() / COMPOSITE_PRECISION
}

/// Ranks every path of a snapshot and tiers the first `tier_top_n` entries.
#[must_use]
pub fn rank(snapshot: &Snapshot, tier_top_n: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = snapshot
        .iter()
        .map(|(path, stats)| RankedEntry {
            path: path.clone(),
            count: stats.count,
            avg_score: stats.avg_score(),
            avg_preference: stats.avg_preference(),
            tier: None,
        })
        .collect();

    entries.sort_by(compare);

    let max_preference = entries
        .iter()
        .map(|e| e.avg_preference)
        .fold(0.0_f64, f64::max);
    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);

    for entry in entries.iter_mut().take(tier_top_n) {
        let c = composite(
            entry.avg_score,
            entry.avg_preference,
            entry.count,
            max_preference,
            max_count,
        );
        entry.tier = Some(Tier::from_composite(c));
    }

    entries
}

/// Score descending, count descending, path ascending.
fn compare(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.avg_score
        .total_cmp(&a.avg_score)
        .then_with(|| b.count.cmp(&a.count))
        .then_with(|| a.path.cmp(&b.path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_are_exclusive() {
        assert_eq!(Tier::from_composite(0.9), Tier::Gold);
        assert_eq!(Tier::from_composite(0.75), Tier::Silver);
        assert_eq!(Tier::from_composite(0.6), Tier::Bronze);
        assert_eq!(Tier::from_composite(0.4), Tier::Medal);
        assert_eq!(Tier::from_composite(0.2), Tier::Marginal);
    }

    #[test]
    fn test_tiers_above_breakpoints() {
        assert_eq!(Tier::from_composite(1.0), Tier::Trophy);
        assert_eq!(Tier::from_composite(0.91), Tier::Trophy);
        assert_eq!(Tier::from_composite(0.76), Tier::Gold);
        assert_eq!(Tier::from_composite(0.61), Tier::Silver);
        assert_eq!(Tier::from_composite(0.41), Tier::Bronze);
        assert_eq!(Tier::from_composite(0.21), Tier::Medal);
        assert_eq!(Tier::from_composite(0.0), Tier::Marginal);
    }

    #[test]
    fn test_tier_order() {
        assert!(Tier::Trophy < Tier::Gold);
        assert!(Tier::Medal < Tier::Marginal);
        assert_eq!(Tier::Gold.to_string(), "🥇");
    }

    #[test]
    fn test_composite_weights() {
        assert!((composite(100.0, 4.0, 10, 4.0, 10) - 1.0).abs() < 1e-12);
        assert!((composite(100.0, 0.0, 0, 4.0, 10) - 0.5).abs() < 1e-12);
        assert!((composite(0.0, 2.0, 5, 4.0, 10) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_composite_on_breakpoint_tiers_below() {
        // (avg_score, avg_preference, count, max_preference, max_count, tier)
        let cases = [
            (100.0, 2.0, 2, 3.0, 2, Tier::Gold),   // 0.5 + 0.2 + 0.2 = 0.9
            (80.0, 2.0, 2, 4.0, 2, Tier::Silver),  // 0.4 + 0.15 + 0.2 = 0.75
            (80.0, 0.0, 2, 3.0, 2, Tier::Bronze),  // 0.4 + 0.2 = 0.6
            (60.0, 0.0, 1, 4.0, 2, Tier::Medal),   // 0.3 + 0.1 = 0.4
            (10.0, 1.0, 1, 6.0, 2, Tier::Marginal), // 0.05 + 0.05 + 0.1 = 0.2
        ];

        for (score, pref, count, max_pref, max_count, tier) in cases {
            let c = composite(score, pref, count, max_pref, max_count);
            assert_eq!(Tier::from_composite(c), tier, "composite {c}");
        }
    }

    #[test]
    fn test_composite_on_every_exact_breakpoint() {
        // Integer inputs whose blend is exactly a breakpoint, found in
        // hundredths scaled by max_pref * max_count
        let mut hits = 0;
        for score in (10..=100_u32).step_by(10) {
            for max_pref in 1..=6_u32 {
                for pref in 0..=max_pref {
                    for max_count in 1..=6_u32 {
                        for count in 1..=max_count {
                            let denom = max_pref * max_count;
                            let scaled = score / 2 * denom
                                + 30 * pref * max_count
                                + 20 * count * max_pref;
                            let Some(breakpoint) = [90_u32, 75, 60, 40, 20]
                                .into_iter()
                                .find(|b| scaled == b * denom)
                            else {
                                continue;
                            };

                            let c = composite(
                                f64::from(score),
                                f64::from(pref),
                                count as usize,
                                f64::from(max_pref),
                                max_count as usize,
                            );
                            assert!(
                                c <= f64::from(breakpoint) / 100.0,
                                "composite {c} above breakpoint {breakpoint}"
                            );
                            hits += 1;
                        }
                    }
                }
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_composite_zero_maxima() {
        assert!((composite(50.0, 0.0, 0, 0.0, 0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_compare_tie_breaks() {
        let entry = |path: &str, count: usize, avg_score: f64| RankedEntry {
            path: SelectorPath::from(path),
            count,
            avg_score,
            avg_preference: 0.0,
            tier: None,
        };
        let mut entries = vec![
            entry("b", 2, 80.0),
            entry("a", 2, 80.0),
            entry("c", 5, 80.0),
            entry("d", 1, 100.0),
        ];
        entries.sort_by(compare);

        let order: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(order, vec!["d", "c", "a", "b"]);
    }
}
