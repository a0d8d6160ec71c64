//! # selector-scout
//!
//! Discover CSS-style selector paths that are likely to extract useful
//! repeated content (links, list items, cards) from an HTML page, without
//! knowing the page structure in advance.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector_scout::{analyze, Report};
//!
//! let html = r#"<html><body>
//!     <ul class="items">
//!         <li class="item"><a href="/1">One</a></li>
//!         <li class="item"><a href="/2">Two</a></li>
//!     </ul>
//! </body></html>"#;
//!
//! let analysis = analyze(html)?;
//! let best = &analysis.ranking()[0];
//! assert_eq!(best.path.as_str(), "li.item > a");
//! println!("{}", Report::new(&analysis));
//! # Ok::<(), selector_scout::Error>(())
//! ```
//!
//! ## How it works
//!
//! 1. **Walk**: every element is visited once, depth first ([`walker`]).
//! 2. **Path**: each element gets a selector path of itself and its nearest
//!    ancestors, `max_depth` descriptors long ([`path`]).
//! 3. **Score**: an occurrence score (is this a link, or does it hold one?)
//!    and a preference score (anchor/list idioms) per element ([`scoring`]).
//! 4. **Aggregate**: counts and score sums per path ([`aggregate`]).
//! 5. **Rank**: by average score, then frequency; the top entries get a
//!    confidence tier ([`rank`]).
//!
//! The engine is generic over [`MarkupNode`]; [`dom::DomNode`] adapts
//! `dom_query`. Every run is single-document and stateless.

mod error;
mod options;
mod result;

/// The element abstraction the engine is written against.
pub mod node;

/// `dom_query` adapter implementing [`MarkupNode`].
pub mod dom;

/// Tag catalogs used by the scorers.
pub mod tags;

/// Depth-first element traversal.
pub mod walker;

/// Selector path construction.
pub mod path;

/// Occurrence and preference scoring.
pub mod scoring;

/// Per-path accumulation.
pub mod aggregate;

/// Ranking and confidence tiers.
pub mod rank;

/// Tag, class and id frequency tables.
pub mod summary;

/// Text report rendering.
pub mod report;

/// Link extraction with a CSS selector.
pub mod extract;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use aggregate::{Aggregator, PathStats, Snapshot};
pub use error::{Error, Result};
pub use extract::{extract_links, ScrapedLink};
pub use node::MarkupNode;
pub use options::{Options, DEFAULT_MAX_DEPTH, DEFAULT_TIER_TOP_N, DEFAULT_TOP_N};
pub use path::SelectorPath;
pub use rank::{RankedEntry, Tier};
pub use report::Report;
pub use result::Analysis;
pub use summary::DocumentSummary;

use tracing::debug;

/// Analyses an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use selector_scout::{analyze, SelectorPath};
///
/// let analysis = analyze(r#"<div class="card"><a href="/x">x</a></div>"#)?;
/// let counts = analysis.counts();
/// assert_eq!(counts.get(&SelectorPath::from("body > div.card")), Some(&1));
/// # Ok::<(), selector_scout::Error>(())
/// ```
pub fn analyze(html: &str) -> Result<Analysis> {
    analyze_with_options(html, &Options::default())
}

/// Analyses an HTML document with custom options.
///
/// Input without any non-whitespace content is an empty document: it yields
/// an empty ranking rather than the `html`/`head`/`body` skeleton an HTML
/// parser would imply.
///
/// # Errors
///
/// Returns `Error::InvalidConfiguration` if `options.max_depth` is zero.
pub fn analyze_with_options(html: &str, options: &Options) -> Result<Analysis> {
    options.validate()?;
    if html.trim().is_empty() {
        return analyze_nodes(Vec::<dom::DomNode<'_>>::new(), options);
    }
    let doc = dom::parse(html);
    analyze_document(&doc, options)
}

/// Analyses HTML bytes, decoding them from their declared charset first.
pub fn analyze_bytes(html: &[u8]) -> Result<Analysis> {
    analyze_bytes_with_options(html, &Options::default())
}

/// Analyses HTML bytes with custom options, decoding them from their
/// declared charset first.
pub fn analyze_bytes_with_options(html: &[u8], options: &Options) -> Result<Analysis> {
    let html = encoding::decode_html(html);
    analyze_with_options(&html, options)
}

/// Analyses an already parsed `dom_query` document.
///
/// # Errors
///
/// Returns `Error::InvalidConfiguration` if `options.max_depth` is zero.
pub fn analyze_document(doc: &dom::Document, options: &Options) -> Result<Analysis> {
    analyze_nodes(dom::root_elements(doc), options)
}

/// Analyses the trees under `roots` with any [`MarkupNode`] implementation.
///
/// This is the engine entry point the other `analyze*` functions funnel
/// into: one walk, then aggregation, then ranking.
///
/// # Errors
///
/// Returns `Error::InvalidConfiguration` if `options.max_depth` is zero.
pub fn analyze_nodes<N, I>(roots: I, options: &Options) -> Result<Analysis>
where
    N: MarkupNode,
    I: IntoIterator<Item = N>,
{
    let mut aggregator = Aggregator::new(options.max_depth)?;
    let nodes: Vec<N> = walker::walk_all(roots).collect();

    aggregator.record_all(nodes.iter().cloned());
    let summary = DocumentSummary::collect(nodes);
    let analysis = Analysis::new(options.clone(), aggregator.finish(), summary);

    debug!(
        nodes = analysis.node_count(),
        paths = analysis.path_count(),
        "analysis complete"
    );
    Ok(analysis)
}

/// Analyses `html` and renders the full text report, summaries included.
///
/// # Errors
///
/// Returns `Error::InvalidConfiguration` if `options.max_depth` is zero.
pub fn suggest(html: &str, options: &Options) -> Result<String> {
    let analysis = analyze_with_options(html, options)?;
    Ok(Report::new(&analysis).with_summaries(true).to_string())
}
