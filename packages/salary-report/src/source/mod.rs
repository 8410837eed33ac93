//! Vacancy sources and the pagination loop shared by all of them.
//!
//! A [`VacancySource`] knows how to fetch one page of listings for a search
//! term from a single job site. [`query_term`] walks the pages of one term
//! and accumulates the salaries it can estimate.

pub mod hh;
pub mod superjob;

pub use hh::HeadHunterSource;
pub use superjob::SuperJobSource;

use async_trait::async_trait;
use job_apis::Result;
use tracing::debug;

use crate::salary::predict_salary;

/// One vacancy as seen by the aggregator: only the salary fields matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub currency: Option<String>,
}

impl Listing {
    pub fn new(salary_from: Option<i64>, salary_to: Option<i64>, currency: impl Into<String>) -> Self {
        Self {
            salary_from,
            salary_to,
            currency: Some(currency.into()),
        }
    }

    /// Estimated salary, or `None` when the currency is not `local_currency`
    /// or neither bound is present.
    pub fn estimate(&self, local_currency: &str) -> Option<i64> {
        if self.currency.as_deref() != Some(local_currency) {
            return None;
        }
        predict_salary(self.salary_from, self.salary_to)
    }
}

/// One page of listings for a search term.
#[derive(Debug, Clone, Default)]
pub struct VacancyPage {
    pub listings: Vec<Listing>,
    /// Total vacancies the site reports for the term
    pub found: u64,
    /// Whether the site has a page after this one
    pub has_more: bool,
}

/// A job site that can be searched page by page.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Site label used in report titles.
    fn name(&self) -> &str;

    /// Currency code this site uses for local salaries.
    fn currency(&self) -> &str;

    /// Publication window in days applied to searches; `None` when unfiltered.
    fn period_days(&self) -> Option<u32> {
        None
    }

    /// Fetch page `page` (zero-based) of results for `term`.
    async fn fetch_page(&self, term: &str, page: u32) -> Result<VacancyPage>;
}

/// Accumulated salaries for one search term against one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Wider than a single salary so the sum cannot overflow
    pub salary_sum: i128,
    pub processed: u64,
    pub found: u64,
}

/// Fetch every page for `term` and sum the salaries that can be estimated.
///
/// Pages are requested in order from 0 until a page reports no successor.
/// The first failed request aborts the whole query.
pub async fn query_term<S>(source: &S, term: &str) -> Result<QueryResult>
where
    S: VacancySource + ?Sized,
{
    let currency = source.currency();
    let mut result = QueryResult::default();
    let mut received = 0u64;

    for page in 0u32.. {
        let batch = source.fetch_page(term, page).await?;
        received += batch.listings.len() as u64;

        for salary in batch.listings.iter().filter_map(|l| l.estimate(currency)) {
            result.salary_sum += i128::from(salary);
            result.processed += 1;
        }
        result.found = batch.found;

        debug!(
            source = source.name(),
            term,
            page,
            listings = batch.listings.len(),
            has_more = batch.has_more,
            "Fetched page"
        );

        if !batch.has_more {
            break;
        }
    }

    // processed can never exceed found, even if the site under-reports
    result.found = result.found.max(received);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSource;

    #[test]
    fn test_estimate_skips_foreign_currency() {
        let listing = Listing::new(Some(1000), Some(2000), "USD");
        assert_eq!(listing.estimate("RUR"), None);
    }

    #[test]
    fn test_estimate_without_currency() {
        assert_eq!(Listing::default().estimate("RUR"), None);
    }

    #[test]
    fn test_estimate_local_currency() {
        let listing = Listing::new(Some(100), Some(200), "rub");
        assert_eq!(listing.estimate("rub"), Some(150));
    }

    #[tokio::test]
    async fn test_query_term_single_page() {
        let source = MockSource::new("SJ.ru", "rub").with_pages(
            "Программист Go",
            vec![VacancyPage {
                listings: vec![
                    Listing::new(Some(100), Some(200), "rub"),
                    Listing::new(None, Some(100), "rub"),
                    Listing::new(Some(500), None, "usd"),
                    Listing::new(Some(0), Some(0), "rub"),
                ],
                found: 4,
                has_more: false,
            }],
        );

        let result = query_term(&source, "Программист Go").await.unwrap();

        assert_eq!(
            result,
            QueryResult {
                salary_sum: 230,
                processed: 2,
                found: 4,
            }
        );
        assert_eq!(source.calls(), vec![("Программист Go".to_string(), 0)]);
    }

    #[tokio::test]
    async fn test_query_term_follows_pages_in_order() {
        let page = |has_more| VacancyPage {
            listings: vec![Listing::new(Some(100), None, "RUR")],
            found: 3,
            has_more,
        };
        let source = MockSource::new("HH.ru", "RUR")
            .with_pages("Rust", vec![page(true), page(true), page(false)]);

        let result = query_term(&source, "Rust").await.unwrap();

        assert_eq!(result.processed, 3);
        assert_eq!(result.salary_sum, 360);
        let pages: Vec<u32> = source.calls().into_iter().map(|(_, p)| p).collect();
        assert_eq!(pages, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_query_term_found_never_below_received() {
        let source = MockSource::new("HH.ru", "RUR").with_pages(
            "Ruby",
            vec![VacancyPage {
                listings: vec![
                    Listing::new(Some(100), None, "RUR"),
                    Listing::new(Some(200), None, "RUR"),
                ],
                found: 1,
                has_more: false,
            }],
        );

        let result = query_term(&source, "Ruby").await.unwrap();

        assert_eq!(result.processed, 2);
        assert_eq!(result.found, 2);
    }

    #[tokio::test]
    async fn test_query_term_sum_exceeds_i64() {
        let half = i64::MAX / 2 + 10;
        let source = MockSource::new("HH.ru", "RUR").with_pages(
            "Scala",
            vec![VacancyPage {
                listings: vec![
                    Listing::new(Some(half), Some(half), "RUR"),
                    Listing::new(Some(half), Some(half), "RUR"),
                ],
                found: 2,
                has_more: false,
            }],
        );

        let result = query_term(&source, "Scala").await.unwrap();

        assert_eq!(result.processed, 2);
        assert_eq!(result.salary_sum, 2 * i128::from(half));
    }

    #[tokio::test]
    async fn test_query_term_stops_on_error() {
        let page = VacancyPage {
            listings: vec![],
            found: 500,
            has_more: true,
        };
        let source = MockSource::new("HH.ru", "RUR")
            .with_pages("Java", vec![page.clone(), page.clone(), page])
            .with_failure("Java", 1, 503);

        let err = query_term(&source, "Java").await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(source.call_count(), 2);
    }
}
