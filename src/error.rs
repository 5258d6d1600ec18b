//! Error types for the scrape pipeline.
//!
//! Every failure the pipeline can produce is a variant of [`ScrapeError`],
//! and every variant carries an explicit classification: was the caller's
//! input wrong ([`FailureKind::Business`]), or did the environment misbehave
//! ([`FailureKind::Application`])? Work-item reporters upstream match on the
//! classification and stable [`code`](ScrapeError::code) rather than
//! inspecting error types.
//!
//! Nothing in the pipeline retries: each error aborts the current run and no
//! partial results are persisted.

use thiserror::Error;

/// Whether a failure is the caller's fault or the environment's.
///
/// - `Business`: bad input, a legitimate "nothing to do" condition, or page
///   content that fails the extraction rules; the work item should be failed
///   without operator involvement.
/// - `Application`: the page, the network, or the filesystem did something
///   unexpected; worth an operator's attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Business,
    Application,
}

/// All failures the scrape pipeline can surface.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Search keyword was empty.
    #[error("search keyword cannot be empty")]
    EmptyKeyword,

    /// Category filter was requested but the string was empty.
    #[error("category cannot be empty")]
    EmptyCategory,

    /// The requested category does not exist in the page's filter list.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// The search ran but the page reported zero results.
    #[error("no results found for keyword")]
    NoResultsFound,

    /// After searching, the page showed neither results nor the "no results"
    /// panel. Distinct from [`ScrapeError::NoResultsFound`] on purpose: this
    /// one means the page is in a state we do not understand.
    #[error("unexpected page state after search")]
    UnexpectedPageState,

    /// A date string matched none of the recognized forms.
    #[error("could not convert string to date: {0:?}")]
    UnrecognizedDateFormat(String),

    /// A listing block rendered without a title element.
    #[error("news block is missing its title element")]
    MissingTitle,

    /// The pagination counter was absent or not in `"<current> of <total>"`
    /// form.
    #[error("could not parse pagination counter: {0:?}")]
    PageIndicatorFormat(String),

    /// After clicking next, the page reports a different page number than
    /// the one we navigated to.
    #[error("paginated to page {expected} but page reports {reported}")]
    NavigationDesync { expected: u32, reported: u32 },

    /// Downloading or persisting a media file failed.
    #[error("media download failed for {url}: {source}")]
    MediaDownload {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Fetching the listing page itself failed.
    #[error("listing page request failed: {0}")]
    PageFetch(#[from] reqwest::Error),

    /// The configured search URL did not parse.
    #[error("invalid search URL: {0}")]
    BadSearchUrl(#[from] url::ParseError),
}

impl ScrapeError {
    /// Business-vs-application classification, checked by the caller via
    /// pattern matching on the returned kind.
    pub fn kind(&self) -> FailureKind {
        match self {
            ScrapeError::EmptyKeyword
            | ScrapeError::EmptyCategory
            | ScrapeError::CategoryNotFound(_)
            | ScrapeError::NoResultsFound
            | ScrapeError::UnrecognizedDateFormat(_)
            | ScrapeError::MissingTitle => FailureKind::Business,
            ScrapeError::UnexpectedPageState
            | ScrapeError::PageIndicatorFormat(_)
            | ScrapeError::NavigationDesync { .. }
            | ScrapeError::MediaDownload { .. }
            | ScrapeError::PageFetch(_)
            | ScrapeError::BadSearchUrl(_) => FailureKind::Application,
        }
    }

    /// Stable machine-readable code for work-item reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ScrapeError::EmptyKeyword => "EMPTY_KEYWORD",
            ScrapeError::EmptyCategory => "EMPTY_CATEGORY",
            ScrapeError::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            ScrapeError::NoResultsFound => "NO_RESULTS_FOUND",
            ScrapeError::UnexpectedPageState => "UNEXPECTED_PAGE_STATE",
            ScrapeError::UnrecognizedDateFormat(_) => "UNRECOGNIZED_DATE_FORMAT",
            ScrapeError::MissingTitle => "MISSING_TITLE",
            ScrapeError::PageIndicatorFormat(_) => "PAGE_INDICATOR_FORMAT",
            ScrapeError::NavigationDesync { .. } => "NAVIGATION_DESYNC",
            ScrapeError::MediaDownload { .. } => "MEDIA_DOWNLOAD_FAILED",
            ScrapeError::PageFetch(_) => "PAGE_FETCH_FAILED",
            ScrapeError::BadSearchUrl(_) => "BAD_SEARCH_URL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_business() {
        assert_eq!(ScrapeError::EmptyKeyword.kind(), FailureKind::Business);
        assert_eq!(ScrapeError::EmptyCategory.kind(), FailureKind::Business);
        assert_eq!(
            ScrapeError::CategoryNotFound("Sports".into()).kind(),
            FailureKind::Business
        );
        assert_eq!(ScrapeError::NoResultsFound.kind(), FailureKind::Business);
    }

    #[test]
    fn test_extraction_format_errors_are_business() {
        assert_eq!(
            ScrapeError::UnrecognizedDateFormat("garbage".into()).kind(),
            FailureKind::Business
        );
        assert_eq!(ScrapeError::MissingTitle.kind(), FailureKind::Business);
    }

    #[test]
    fn test_environment_errors_are_application() {
        assert_eq!(
            ScrapeError::UnexpectedPageState.kind(),
            FailureKind::Application
        );
        assert_eq!(
            ScrapeError::NavigationDesync {
                expected: 3,
                reported: 2
            }
            .kind(),
            FailureKind::Application
        );
        assert_eq!(
            ScrapeError::PageIndicatorFormat("".into()).kind(),
            FailureKind::Application
        );
    }

    #[test]
    fn test_no_results_and_unexpected_state_are_distinct() {
        assert_ne!(
            ScrapeError::NoResultsFound.code(),
            ScrapeError::UnexpectedPageState.code()
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ScrapeError::NoResultsFound.code(), "NO_RESULTS_FOUND");
        assert_eq!(
            ScrapeError::NavigationDesync {
                expected: 2,
                reported: 1
            }
            .code(),
            "NAVIGATION_DESYNC"
        );
    }

    #[test]
    fn test_display_includes_offending_string() {
        let e = ScrapeError::UnrecognizedDateFormat("garbage".into());
        assert!(e.to_string().contains("garbage"));
    }
}
