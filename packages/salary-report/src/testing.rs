//! Testing utilities including a mock vacancy source.
//!
//! Useful for exercising the aggregation pipeline without network calls.

use async_trait::async_trait;
use job_apis::{JobApiError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::source::{VacancyPage, VacancySource};

/// A mock vacancy source with canned pages per search term.
///
/// Terms without canned pages answer with a single empty final page.
///
/// # Example
///
/// ```rust
/// use salary_report::source::{Listing, VacancyPage};
/// use salary_report::testing::MockSource;
///
/// let source = MockSource::new("HH.ru", "RUR").with_pages(
///     "Программист Rust",
///     vec![VacancyPage {
///         listings: vec![Listing::new(Some(100), Some(200), "RUR")],
///         found: 1,
///         has_more: false,
///     }],
/// );
/// ```
#[derive(Clone)]
pub struct MockSource {
    name: String,
    currency: String,
    period_days: Option<u32>,
    /// Canned pages indexed by search term
    pages: Arc<RwLock<HashMap<String, Vec<VacancyPage>>>>,
    /// Injected failures: (term, page) -> HTTP status
    failures: Arc<RwLock<HashMap<(String, u32), u16>>>,
    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<(String, u32)>>>,
}

impl MockSource {
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
            period_days: None,
            pages: Arc::default(),
            failures: Arc::default(),
            calls: Arc::default(),
        }
    }

    /// Report a publication window, as a real site with a date filter would.
    pub fn with_period_days(mut self, days: u32) -> Self {
        self.period_days = Some(days);
        self
    }

    /// Set the pages returned for a search term, in page order.
    pub fn with_pages(self, term: impl Into<String>, pages: Vec<VacancyPage>) -> Self {
        self.pages.write().unwrap().insert(term.into(), pages);
        self
    }

    /// Make `fetch_page(term, page)` fail with an API error carrying `status`.
    pub fn with_failure(self, term: impl Into<String>, page: u32, status: u16) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert((term.into(), page), status);
        self
    }

    /// Every `(term, page)` requested so far, in call order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Search terms requested so far, in first-request order.
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for (term, _) in self.calls() {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
        terms
    }
}

#[async_trait]
impl VacancySource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn period_days(&self) -> Option<u32> {
        self.period_days
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<VacancyPage> {
        self.calls.write().unwrap().push((term.to_string(), page));

        if let Some(status) = self
            .failures
            .read()
            .unwrap()
            .get(&(term.to_string(), page))
        {
            return Err(JobApiError::Api {
                status: *status,
                message: format!("mock failure for {} page {}", term, page),
            });
        }

        let pages = self.pages.read().unwrap();
        Ok(pages
            .get(term)
            .and_then(|p| p.get(page as usize))
            .cloned()
            .unwrap_or_default())
    }
}
