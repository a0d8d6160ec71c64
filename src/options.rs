//! Configuration options for selector discovery.
//!
//! The `Options` struct controls how deep selector paths reach and how many
//! candidates the report shows and tiers.

use serde::Serialize;

use crate::error::{Error, Result};

/// Default number of descriptors in a selector path.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Default number of rows shown in reports and summaries.
pub const DEFAULT_TOP_N: usize = 10;

/// Default number of top-ranked entries that receive a tier.
pub const DEFAULT_TIER_TOP_N: usize = 5;

/// Configuration options for selector discovery.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use selector_scout::Options;
///
/// let options = Options {
///     max_depth: 3,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Maximum number of descriptors (the node plus its ancestors) in a
    /// selector path. Must be at least 1.
    ///
    /// Default: `2`
    pub max_depth: usize,

    /// Number of rows shown in the report and in each summary table.
    ///
    /// Default: `10`
    pub top_n: usize,

    /// Number of top-ranked entries that get a confidence tier.
    ///
    /// Entries ranked below this are reported with raw numbers only.
    ///
    /// Default: `5`
    pub tier_top_n: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            top_n: DEFAULT_TOP_N,
            tier_top_n: DEFAULT_TIER_TOP_N,
        }
    }
}

impl Options {
    /// Builds default options with a depth coming from a signed source
    /// such as a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` when `depth` is zero or negative.
    pub fn with_signed_depth(depth: i64) -> Result<Self> {
        let max_depth = usize::try_from(depth)
            .ok()
            .filter(|d| *d >= 1)
            .ok_or_else(|| depth_error(depth))?;

        Ok(Self {
            max_depth,
            ..Self::default()
        })
    }

    /// Checks the options before a run.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` when `max_depth` is zero.
    pub fn validate(&self) -> Result<()> {
        validate_depth(self.max_depth)
    }
}

pub(crate) fn validate_depth(max_depth: usize) -> Result<()> {
    if max_depth == 0 {
        return Err(depth_error(0));
    }
    Ok(())
}

fn depth_error(depth: impl std::fmt::Display) -> Error {
    Error::InvalidConfiguration(format!("max_depth must be at least 1 (got {depth})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.max_depth, 2);
        assert_eq!(opts.top_n, 10);
        assert_eq!(opts.tier_top_n, 5);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let opts = Options {
            max_depth: 0,
            ..Options::default()
        };

        assert!(matches!(opts.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_signed_depth() {
        assert_eq!(Options::with_signed_depth(3).map(|o| o.max_depth).ok(), Some(3));
        assert!(matches!(
            Options::with_signed_depth(0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Options::with_signed_depth(-4),
            Err(Error::InvalidConfiguration(msg)) if msg.contains("-4")
        ));
    }

    #[test]
    fn test_custom_counts_keep_depth_default() {
        let opts = Options {
            top_n: 3,
            tier_top_n: 0,
            ..Options::default()
        };

        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(opts.top_n, 3);
        assert_eq!(opts.tier_top_n, 0);
    }
}
