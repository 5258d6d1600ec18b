//! Data models for extracted news items and their enriched representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: One news record extracted from the search listing
//! - [`EnrichedItem`]: A `NewsItem` plus the derived analytic columns
//!
//! Both are created during a single scrape pass, never mutated afterwards,
//! and live only in the in-memory result list until the dataset is written.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One news item extracted from the AP News search listing.
///
/// A `NewsItem` is only constructed after its date string has been
/// successfully normalized; listing blocks without a date element (the
/// promotional blocks the site mixes into results) are dropped before this
/// struct ever exists.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsItem {
    /// The headline text.
    pub title: String,
    /// Publication timestamp, normalized against the local clock at
    /// extraction time.
    pub published_at: NaiveDateTime,
    /// Teaser text under the headline. Empty when the listing shows none.
    pub description: String,
    /// File name of the downloaded picture, when the listing had one.
    pub picture: Option<String>,
}

/// A [`NewsItem`] plus the four derived analytic columns.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub item: NewsItem,
    /// Occurrences of the search keyword in the title (case-sensitive).
    pub keyword_count_in_title: usize,
    /// Occurrences of the search keyword in the description (case-sensitive).
    pub keyword_count_in_description: usize,
    /// Whether the title contains a recognizable monetary expression.
    pub title_has_money: bool,
    /// Whether the description contains a recognizable monetary expression.
    pub description_has_money: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_item() -> NewsItem {
        NewsItem {
            title: "Fed raises rates again".to_string(),
            published_at: NaiveDate::from_ymd_opt(2023, 12, 14)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            description: "The central bank moved for a fourth time.".to_string(),
            picture: Some("Fed raises rates again.jpg".to_string()),
        }
    }

    #[test]
    fn test_news_item_creation() {
        let item = sample_item();
        assert_eq!(item.title, "Fed raises rates again");
        assert!(item.picture.is_some());
    }

    #[test]
    fn test_news_items_order_by_date() {
        let newer = sample_item();
        let mut older = sample_item();
        older.published_at = NaiveDate::from_ymd_opt(2023, 11, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(older.published_at < newer.published_at);
    }

    #[test]
    fn test_enriched_item_serializes_flat() {
        let enriched = EnrichedItem {
            item: sample_item(),
            keyword_count_in_title: 1,
            keyword_count_in_description: 0,
            title_has_money: false,
            description_has_money: true,
        };

        let json = serde_json::to_string(&enriched).unwrap();
        // The base record's fields sit at the top level, not nested.
        assert!(json.contains("\"title\":"));
        assert!(json.contains("\"keyword_count_in_title\":1"));
        assert!(!json.contains("\"item\":"));
    }

    #[test]
    fn test_enriched_item_round_trips() {
        let enriched = EnrichedItem {
            item: sample_item(),
            keyword_count_in_title: 2,
            keyword_count_in_description: 3,
            title_has_money: true,
            description_has_money: false,
        };

        let json = serde_json::to_string(&enriched).unwrap();
        let back: EnrichedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enriched);
    }

    #[test]
    fn test_item_without_picture_serializes_null() {
        let mut item = sample_item();
        item.picture = None;
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"picture\":null"));
    }
}
