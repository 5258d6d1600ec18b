//! Derived analytic columns over the scraped records.
//!
//! Two derivations per field: how often the search keyword occurs, and
//! whether a monetary expression appears. The money check is a heuristic
//! pattern match, not a currency parser; unusual formats slipping through as
//! false negatives is accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{EnrichedItem, NewsItem};

/// `$11.1`, `$111,111.11`, `50 dollars`, `50 USD`.
static MONEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\d{1,3}(?:[,.]\d{1,3})*|\d+\s?(?:dollars|USD)").unwrap());

/// Count non-overlapping literal occurrences of `keyword` in `text`.
///
/// Case-sensitive substring count, no tokenization: `"cat"` matches inside
/// `"catalog"`.
pub fn count_keyword(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    text.matches(keyword).count()
}

/// Whether `text` contains a recognizable monetary expression: a `$` amount
/// with optional `,`/`.` group separators, or a bare number followed by
/// "dollars" or "USD".
pub fn has_money(text: &str) -> bool {
    MONEY.is_match(text)
}

/// Compute the four analytic columns for every kept record.
pub fn enrich_all(items: Vec<NewsItem>, keyword: &str) -> Vec<EnrichedItem> {
    let enriched: Vec<EnrichedItem> = items
        .into_iter()
        .map(|item| {
            let keyword_count_in_title = count_keyword(&item.title, keyword);
            let keyword_count_in_description = count_keyword(&item.description, keyword);
            let title_has_money = has_money(&item.title);
            let description_has_money = has_money(&item.description);
            EnrichedItem {
                item,
                keyword_count_in_title,
                keyword_count_in_description,
                title_has_money,
                description_has_money,
            }
        })
        .collect();

    debug!(count = enriched.len(), keyword, "Enriched records");
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_count_keyword_substring() {
        assert_eq!(count_keyword("the cat sat on the cat mat", "cat"), 2);
    }

    #[test]
    fn test_count_keyword_case_sensitive() {
        assert_eq!(count_keyword("Cat and cat", "cat"), 1);
    }

    #[test]
    fn test_count_keyword_no_tokenization() {
        assert_eq!(count_keyword("catalog of cats", "cat"), 2);
    }

    #[test]
    fn test_count_keyword_absent() {
        assert_eq!(count_keyword("nothing here", "cat"), 0);
    }

    #[test]
    fn test_count_keyword_empty_keyword() {
        assert_eq!(count_keyword("anything", ""), 0);
    }

    #[test]
    fn test_has_money_dollar_sign() {
        assert!(has_money("Price: $1,200"));
        assert!(has_money("$5"));
        assert!(has_money("It cost $11.1 million"));
    }

    #[test]
    fn test_has_money_spelled_out() {
        assert!(has_money("costs 50 dollars"));
        assert!(has_money("about 300 USD all told"));
    }

    #[test]
    fn test_has_money_negative() {
        assert!(!has_money("no price here"));
        assert!(!has_money("dollars were discussed in the abstract"));
        assert!(!has_money("100 euros"));
    }

    #[test]
    fn test_enrich_all_columns() {
        let items = vec![NewsItem {
            title: "High rates beget higher rates".to_string(),
            published_at: NaiveDate::from_ymd_opt(2023, 6, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            description: "The fee rose to $1,200 as rates climbed.".to_string(),
            picture: None,
        }];

        let enriched = enrich_all(items, "rates");
        assert_eq!(enriched.len(), 1);
        let row = &enriched[0];
        assert_eq!(row.keyword_count_in_title, 2);
        assert_eq!(row.keyword_count_in_description, 1);
        assert!(!row.title_has_money);
        assert!(row.description_has_money);
    }

    #[test]
    fn test_enrich_preserves_order() {
        let make = |title: &str| NewsItem {
            title: title.to_string(),
            published_at: NaiveDate::from_ymd_opt(2023, 6, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            description: String::new(),
            picture: None,
        };
        let enriched = enrich_all(vec![make("first"), make("second")], "x");
        assert_eq!(enriched[0].item.title, "first");
        assert_eq!(enriched[1].item.title, "second");
    }
}
