//! HTTP-backed view of the AP News search page.
//!
//! [`HttpListingPage`] renders one search-results page per request by
//! rebuilding the search URL with the current query, category, sort, and
//! page number. The pagination controller only ever talks to it through the
//! [`ListingPage`](crate::paginate::ListingPage) trait; the setup methods
//! here ([`search`](HttpListingPage::search),
//! [`select_category`](HttpListingPage::select_category),
//! [`sort_by`](HttpListingPage::sort_by)) are precondition plumbing run
//! before scraping starts.

use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{info, instrument};
use url::Url;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::paginate::ListingPage;
use crate::selectors::page as sel;

/// Sort orders the search page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Relevance,
    Newest,
    Oldest,
}

impl SortOrder {
    fn param(self) -> &'static str {
        match self {
            SortOrder::Relevance => "0",
            SortOrder::Newest => "3",
            SortOrder::Oldest => "4",
        }
    }
}

/// Capitalize every word, the way the page's category labels are written.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One rendered view of the search listing, refreshed over HTTP.
pub struct HttpListingPage {
    client: reqwest::Client,
    base: Url,
    keyword: String,
    category: Option<String>,
    sort: SortOrder,
    page: u32,
    html: String,
}

impl HttpListingPage {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.nav_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base: Url::parse(&config.search_url)?,
            keyword: String::new(),
            category: None,
            sort: SortOrder::Relevance,
            page: 1,
            html: String::new(),
        })
    }

    fn current_url(&self) -> Url {
        let mut query = format!(
            "q={}&s={}",
            urlencoding::encode(&self.keyword),
            self.sort.param()
        );
        if let Some(ref category) = self.category {
            query.push_str(&format!("&f2={}", urlencoding::encode(category)));
        }
        if self.page > 1 {
            query.push_str(&format!("&p={}", self.page));
        }
        let mut url = self.base.clone();
        url.set_query(Some(&query));
        url
    }

    async fn refresh(&mut self) -> Result<(), ScrapeError> {
        let url = self.current_url();
        info!(%url, "Fetching listing page");
        self.html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(())
    }

    fn element_exists(&self, selector: &str) -> bool {
        let document = Html::parse_document(&self.html);
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).next().is_some()
    }

    /// Submit the search keyword and load the first results page.
    ///
    /// After loading, the page is probed for the two shapes a search can
    /// leave it in: a normal results page (category filter present) or the
    /// explicit "no results" panel. Anything else is an unexpected page
    /// state, reported separately so a broken page never masquerades as an
    /// empty result set.
    #[instrument(level = "info", skip(self))]
    pub async fn search(&mut self, keyword: &str) -> Result<(), ScrapeError> {
        if keyword.is_empty() {
            return Err(ScrapeError::EmptyKeyword);
        }
        self.keyword = keyword.to_string();
        self.page = 1;
        self.refresh().await?;

        if self.element_exists(sel::CATEGORY_DROP_DOWN) {
            return Ok(());
        }
        if self.element_exists(sel::NO_RESULTS_FOUND) {
            return Err(ScrapeError::NoResultsFound);
        }
        Err(ScrapeError::UnexpectedPageState)
    }

    /// Apply a category filter to the current results.
    ///
    /// The category is title-cased to match the page's labels and must exist
    /// in the filter drop-down of the currently loaded page.
    #[instrument(level = "info", skip(self))]
    pub async fn select_category(&mut self, category: &str) -> Result<(), ScrapeError> {
        if category.is_empty() {
            return Err(ScrapeError::EmptyCategory);
        }
        let category = title_case(category);

        let known = {
            let document = Html::parse_document(&self.html);
            let labels = Selector::parse(sel::CATEGORY_LABEL).unwrap();
            document
                .select(&labels)
                .any(|label| label.text().collect::<String>().trim() == category)
        };
        if !known {
            return Err(ScrapeError::CategoryNotFound(category));
        }

        info!(%category, "Category found");
        self.category = Some(category);
        self.page = 1;
        self.refresh().await
    }

    /// Switch the listing's sort order and reload.
    #[instrument(level = "info", skip(self))]
    pub async fn sort_by(&mut self, order: SortOrder) -> Result<(), ScrapeError> {
        self.sort = order;
        self.page = 1;
        self.refresh().await
    }
}

impl ListingPage for HttpListingPage {
    async fn rendered_html(&mut self) -> Result<String, ScrapeError> {
        Ok(self.html.clone())
    }

    async fn page_indicator(&mut self) -> Result<String, ScrapeError> {
        let document = Html::parse_document(&self.html);
        let selector = Selector::parse(sel::PAGINATION_COUNT).unwrap();
        let counter = document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .ok_or_else(|| ScrapeError::PageIndicatorFormat(String::new()))?;
        Ok(counter)
    }

    async fn next_page(&mut self) -> Result<(), ScrapeError> {
        self.page += 1;
        self.refresh().await
    }
}
