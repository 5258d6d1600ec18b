//! Record extraction from a rendered search-results page.
//!
//! Pure HTML-to-struct transformation: the caller hands in a snapshot of the
//! page markup, this module hands back the result blocks in the same
//! top-to-bottom order the page renders them. No network, no clock, no
//! filtering; the pagination controller decides what to keep.
//!
//! AP News orders the listing newest-first when the sort order is set to
//! Newest; the extractor passes that ordering through untouched.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::selectors::news;

/// One listing block before date normalization and filtering.
///
/// `date_text` stays raw here; blocks without a date (promotional tiles mixed
/// into the results) carry `None` and are discarded by the controller before
/// date normalization runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandidate {
    pub title: String,
    pub date_text: Option<String>,
    pub description: String,
    pub picture_url: Option<String>,
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract every result block from one rendered listing page.
///
/// # Errors
///
/// [`ScrapeError::MissingTitle`] when a block renders without a title
/// element. A title is the one thing every real result has, so its absence
/// means the page markup changed under us.
pub fn extract(rendered_html: &str) -> Result<Vec<RawCandidate>, ScrapeError> {
    let document = Html::parse_document(rendered_html);
    let block_selector = Selector::parse(news::NEWS_BLOCK).unwrap();
    let title_selector = Selector::parse(news::NEWS_TITLE).unwrap();
    let date_selector = Selector::parse(news::NEWS_DATE).unwrap();
    let description_selector = Selector::parse(news::NEWS_DESCRIPTION).unwrap();
    let picture_selector = Selector::parse(news::NEWS_PICTURE).unwrap();

    let mut candidates = Vec::new();
    for block in document.select(&block_selector) {
        let title = block
            .select(&title_selector)
            .next()
            .map(text_of)
            .ok_or(ScrapeError::MissingTitle)?;

        let date_text = block.select(&date_selector).next().map(text_of);

        let description = block
            .select(&description_selector)
            .next()
            .map(text_of)
            .unwrap_or_default();

        let picture_url = block
            .select(&picture_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| src.to_string());

        candidates.push(RawCandidate {
            title,
            date_text,
            description,
            picture_url,
        });
    }

    debug!(count = candidates.len(), "Extracted listing blocks");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(title: &str, date: Option<&str>, description: Option<&str>, img: Option<&str>) -> String {
        let mut html = String::from(r#"<div class="PagePromo">"#);
        html.push_str(&format!(
            r#"<div class="PagePromo-title"><a><span>{title}</span></a></div>"#
        ));
        if let Some(d) = date {
            html.push_str(&format!(
                r#"<div class="PagePromo-date"><span><span>{d}</span></span></div>"#
            ));
        }
        if let Some(desc) = description {
            html.push_str(&format!(
                r#"<div class="PagePromo-description"><a><span class="PagePromoContentIcons-text">{desc}</span></a></div>"#
            ));
        }
        if let Some(src) = img {
            html.push_str(&format!(
                r#"<div class="PagePromo-media"><a><picture><img src="{src}"></picture></a></div>"#
            ));
        }
        html.push_str("</div>");
        html
    }

    fn page(blocks: &[String]) -> String {
        format!(
            r#"<html><body><div class="SearchResultsModule-results">{}</div></body></html>"#,
            blocks.join("")
        )
    }

    #[test]
    fn test_extracts_all_fields() {
        let html = page(&[block(
            "Storm hits coast",
            Some("2 hours ago"),
            Some("Heavy rain expected."),
            Some("https://example.com/storm.jpg"),
        )]);

        let candidates = extract(&html).unwrap();
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.title, "Storm hits coast");
        assert_eq!(c.date_text.as_deref(), Some("2 hours ago"));
        assert_eq!(c.description, "Heavy rain expected.");
        assert_eq!(c.picture_url.as_deref(), Some("https://example.com/storm.jpg"));
    }

    #[test]
    fn test_preserves_render_order() {
        let html = page(&[
            block("First", Some("1 hour ago"), None, None),
            block("Second", Some("2 hours ago"), None, None),
            block("Third", Some("Yesterday"), None, None),
        ]);

        let titles: Vec<String> = extract(&html)
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_missing_date_yields_none_not_skip() {
        let html = page(&[block("Promo tile", None, None, None)]);

        let candidates = extract(&html).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date_text, None);
    }

    #[test]
    fn test_missing_description_defaults_empty() {
        let html = page(&[block("Bare headline", Some("Yesterday"), None, None)]);

        let candidates = extract(&html).unwrap();
        assert_eq!(candidates[0].description, "");
        assert_eq!(candidates[0].picture_url, None);
    }

    #[test]
    fn test_missing_title_is_hard_error() {
        let html = page(&[String::from(
            r#"<div class="PagePromo"><div class="PagePromo-date"><span><span>Yesterday</span></span></div></div>"#,
        )]);

        let err = extract(&html).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingTitle));
    }

    #[test]
    fn test_blocks_outside_results_module_ignored() {
        let stray = block("Sidebar teaser", Some("Yesterday"), None, None);
        let html = format!(
            r#"<html><body>{stray}<div class="SearchResultsModule-results">{}</div></body></html>"#,
            block("Real result", Some("Yesterday"), None, None)
        );

        let candidates = extract(&html).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Real result");
    }

    #[test]
    fn test_empty_results_module() {
        let html = page(&[]);
        assert!(extract(&html).unwrap().is_empty());
    }
}
