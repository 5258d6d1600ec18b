//! Pagination over the search listing: the page → extract → filter → advance
//! loop and its stop conditions.
//!
//! The controller walks the listing one page at a time, keeps every item
//! whose normalized date is at or after the cutoff, and stops on whichever
//! comes first: the cutoff latch tripping, or the last page.
//!
//! Precondition the controller trusts and does not verify: the listing is
//! sorted newest-first (the host page sets sort order before this runs). The
//! first item older than the cutoff therefore proves everything after it is
//! older too, on this page and all later ones, so the latch ends the run on
//! the spot.
//!
//! After every advance the controller re-reads the page's own counter and
//! requires it to agree with where we think we are; a mismatch is a fatal
//! navigation desync, never retried.

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime};
use tracing::{info, instrument};

use crate::config::ScrapeConfig;
use crate::dates;
use crate::error::ScrapeError;
use crate::extract;
use crate::media::MediaStore;
use crate::models::NewsItem;

/// Navigable view of the listing, exposed by the host page.
///
/// The controller drives the listing exclusively through this trait so tests
/// can swap in a scripted fake.
pub trait ListingPage {
    /// Snapshot of the listing's current rendered markup.
    async fn rendered_html(&mut self) -> Result<String, ScrapeError>;

    /// Raw text of the pagination counter, `"<current> of <total>"`.
    async fn page_indicator(&mut self) -> Result<String, ScrapeError>;

    /// Trigger navigation to the next results page.
    async fn next_page(&mut self) -> Result<(), ScrapeError>;
}

/// Transient pagination state for one run.
#[derive(Debug)]
struct PaginationCursor {
    current_page: u32,
    total_pages: u32,
    cutoff_date: NaiveDateTime,
    continue_paginating: bool,
}

/// Parse the `"<current> of <total>"` pagination counter.
pub fn parse_page_indicator(text: &str) -> Result<(u32, u32), ScrapeError> {
    let bad = || ScrapeError::PageIndicatorFormat(text.to_string());
    let (current, total) = text.trim().split_once(" of ").ok_or_else(bad)?;
    let current: u32 = current.trim().parse().map_err(|_| bad())?;
    let total: u32 = total.trim().parse().map_err(|_| bad())?;
    if current == 0 || total == 0 || current > total {
        return Err(bad());
    }
    Ok((current, total))
}

/// Compute the recency cutoff: midnight on the first day of the month
/// `months_to_extract - 1` calendar months before `now`'s month. Zero months
/// is treated as one, so 1 means "the current month", 3 means "this month
/// and the two before it".
pub fn cutoff_date(months_to_extract: u32, now: NaiveDateTime) -> NaiveDateTime {
    let months = months_to_extract.max(1);
    let base = now.date() - Months::new(months - 1);
    NaiveDate::from_ymd_opt(base.year(), base.month(), 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Drives the extraction loop against a [`ListingPage`].
pub struct PaginationController<'a, P, M> {
    page: &'a mut P,
    media: &'a M,
    config: &'a ScrapeConfig,
}

impl<'a, P, M> PaginationController<'a, P, M>
where
    P: ListingPage,
    M: MediaStore,
{
    pub fn new(page: &'a mut P, media: &'a M, config: &'a ScrapeConfig) -> Self {
        Self {
            page,
            media,
            config,
        }
    }

    /// Scrape news until the cutoff or the last page, against the local clock.
    pub async fn run(self) -> Result<Vec<NewsItem>, ScrapeError> {
        let now = Local::now().naive_local();
        self.run_at(now).await
    }

    /// Same as [`run`](Self::run) with a pinned clock.
    #[instrument(level = "info", skip_all, fields(months = self.config.months_to_extract))]
    pub async fn run_at(self, now: NaiveDateTime) -> Result<Vec<NewsItem>, ScrapeError> {
        let cutoff = cutoff_date(self.config.months_to_extract, now);
        info!(%cutoff, "Setting cutoff date");

        let indicator = self.page.page_indicator().await?;
        let (current_page, total_pages) = parse_page_indicator(&indicator)?;
        let mut cursor = PaginationCursor {
            current_page,
            total_pages,
            cutoff_date: cutoff,
            continue_paginating: true,
        };

        let mut all_news: Vec<NewsItem> = Vec::new();

        loop {
            info!(page = cursor.current_page, total = cursor.total_pages, "Processing page");
            let html = self.page.rendered_html().await?;
            let candidates = extract::extract(&html)?;

            for candidate in candidates {
                // Some listing blocks carry no date; the age of the news is
                // what this process is about, so those never become records.
                let Some(date_text) = candidate.date_text else {
                    continue;
                };
                let published_at = dates::normalize(&date_text, now)?;

                // Newest-first ordering: the first stale item ends the whole
                // run, not just this page.
                if published_at < cursor.cutoff_date {
                    info!(%published_at, "Reached the cutoff date, stop paginating");
                    cursor.continue_paginating = false;
                    break;
                }

                let picture = match candidate.picture_url {
                    Some(url) => Some(self.media.fetch(&url, &candidate.title).await?),
                    None => None,
                };

                all_news.push(NewsItem {
                    title: candidate.title,
                    published_at,
                    description: candidate.description,
                    picture,
                });
            }

            if !cursor.continue_paginating {
                break;
            }
            if cursor.current_page == cursor.total_pages {
                info!("Reached the last page, stop paginating");
                break;
            }

            cursor.current_page += 1;
            self.page.next_page().await?;

            let indicator = self.page.page_indicator().await?;
            let (reported, _) = parse_page_indicator(&indicator)?;
            if reported != cursor.current_page {
                return Err(ScrapeError::NavigationDesync {
                    expected: cursor.current_page,
                    reported,
                });
            }
        }

        info!(count = all_news.len(), "Finished scraping news");
        Ok(all_news)
    }
}
