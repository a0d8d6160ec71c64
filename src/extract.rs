//! Link extraction with a caller-supplied CSS selector.
//!
//! Once a selector has been chosen (often from the ranking), this module
//! pulls `{title, url}` records out of the page with it. Selector matching
//! is delegated to `dom_query`.

use dom_query::Matcher;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::dom::{self, DomNode};
use crate::error::{Error, Result};
use crate::node::MarkupNode;

/// Selector used when none is given: Hacker News story links.
pub const DEFAULT_SELECTOR: &str = "span.titleline a";

/// One matched element: its text and its `href`, if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedLink {
    pub title: String,
    pub url: Option<String>,
}

/// Extracts text and `href` of every element matching `selector`.
///
/// # Errors
///
/// Returns `Error::InvalidSelector` if `selector` is not valid CSS.
///
/// # Example
///
/// ```rust
/// use selector_scout::extract_links;
///
/// let html = r#"<span class="titleline"><a href="https://example.com/1">One</a></span>"#;
/// let links = extract_links(html, "span.titleline a")?;
/// assert_eq!(links[0].title, "One");
/// assert_eq!(links[0].url.as_deref(), Some("https://example.com/1"));
/// # Ok::<(), selector_scout::Error>(())
/// ```
pub fn extract_links(html: &str, selector: &str) -> Result<Vec<ScrapedLink>> {
    extract_links_with_base(html, selector, None)
}

/// Like [`extract_links`], resolving relative `href`s against `base`.
///
/// Hrefs that cannot be joined with `base` are returned unchanged.
///
/// # Errors
///
/// Returns `Error::InvalidSelector` if `selector` is not valid CSS.
pub fn extract_links_with_base(
    html: &str,
    selector: &str,
    base: Option<&Url>,
) -> Result<Vec<ScrapedLink>> {
    let matcher =
        Matcher::new(selector).map_err(|_| Error::InvalidSelector(selector.to_string()))?;
    let doc = dom::parse(html);

    let links: Vec<ScrapedLink> = doc
        .select_matcher(&matcher)
        .nodes()
        .iter()
        .filter_map(|n| DomNode::new(*n))
        .map(|node| ScrapedLink {
            title: node.text(),
            url: node
                .attribute("href")
                .map(|href| resolve(&href, base)),
        })
        .collect();

    debug!(selector, matched = links.len(), "extracted links");
    Ok(links)
}

fn resolve(href: &str, base: Option<&Url>) -> String {
    base.and_then(|b| b.join(href).ok())
        .map_or_else(|| href.to_string(), String::from)
}

/// Safe JSON filename for results scraped from `url`.
///
/// Host and path are kept, `/` and `.` become `_`, and `.json` is appended.
/// Query and fragment are dropped. Input that does not parse as a URL is
/// sanitised as-is.
///
/// ```rust
/// use selector_scout::extract::output_filename;
///
/// assert_eq!(
///     output_filename("https://news.ycombinator.com/item?id=12345"),
///     "news_ycombinator_com_item.json"
/// );
/// ```
#[must_use]
pub fn output_filename(url: &str) -> String {
    let base = match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            let path = parsed.path();
            // A bare root path adds nothing but a trailing separator
            let path = if path == "/" { "" } else { path };
            format!("{host}{path}")
        }
        Err(_) => url.to_string(),
    };

    let mut name = base.replace(['/', '.'], "_");
    if !name.ends_with(".json") {
        name.push_str(".json");
    }
    name
}
