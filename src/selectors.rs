//! CSS selectors for the AP News search page.
//!
//! Grouped by what they select: page-level furniture consulted by the
//! listing page, and the per-result fragments consulted by the extractor.
//! Kept in one place so a site redesign is a one-file fix.

/// Page-level elements on the search results page.
pub mod page {
    /// Pagination counter rendered as `"<current> of <total>"`.
    pub const PAGINATION_COUNT: &str = "div.Pagination-pageCounts";
    /// The category filter heading. Present whenever the search produced a
    /// normal results page.
    pub const CATEGORY_DROP_DOWN: &str = "div.SearchFilter-heading";
    /// Panel shown when the search produced zero results.
    pub const NO_RESULTS_FOUND: &str = "div.SearchResultsModule-noResults";
    /// One label per selectable category inside the filter drop-down.
    pub const CATEGORY_LABEL: &str = "div.CheckboxInput label span";
}

/// Per-result fragments within the results module.
pub mod news {
    /// One block per search result.
    pub const NEWS_BLOCK: &str = "div.SearchResultsModule-results div.PagePromo";
    pub const NEWS_TITLE: &str = "div.PagePromo-title > a > span";
    pub const NEWS_DATE: &str = "div.PagePromo-date span span";
    pub const NEWS_DESCRIPTION: &str = "div.PagePromo-description a span.PagePromoContentIcons-text";
    pub const NEWS_PICTURE: &str = "div.PagePromo-media a picture img";
}
