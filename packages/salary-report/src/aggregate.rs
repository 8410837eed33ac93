//! Per-language salary statistics.

use indexmap::IndexMap;
use job_apis::Result;
use tracing::info;

use crate::source::{query_term, QueryResult, VacancySource};

/// Salary statistics for one language on one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    found: u64,
    processed: u64,
    average: Option<i64>,
}

impl LanguageStats {
    pub fn from_query(result: &QueryResult) -> Self {
        // a mean of i64 estimates always fits back into i64
        let average = (result.processed > 0)
            .then(|| (result.salary_sum / i128::from(result.processed)) as i64);
        Self {
            found: result.found,
            processed: result.processed,
            average,
        }
    }

    /// Vacancies the site reports for the language.
    pub fn found(&self) -> u64 {
        self.found
    }

    /// Vacancies whose salary could be estimated.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Mean estimated salary; `None` when nothing was processed.
    pub fn average(&self) -> Option<i64> {
        self.average
    }
}

/// Query `source` for every language and collect statistics in input order.
///
/// A repeated language keeps the position of its first occurrence.
pub async fn average_salary_by_language<S>(
    source: &S,
    languages: &[String],
    search_prefix: &str,
) -> Result<IndexMap<String, LanguageStats>>
where
    S: VacancySource + ?Sized,
{
    let mut stats = IndexMap::with_capacity(languages.len());

    for language in languages {
        let term = format!("{} {}", search_prefix, language).trim().to_string();
        let result = query_term(source, &term).await?;
        let language_stats = LanguageStats::from_query(&result);

        info!(
            source = source.name(),
            language = %language,
            found = language_stats.found(),
            processed = language_stats.processed(),
            average = ?language_stats.average(),
            "Language processed"
        );

        stats.insert(language.clone(), language_stats);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_truncates() {
        let stats = LanguageStats::from_query(&QueryResult {
            salary_sum: 1000,
            processed: 3,
            found: 10,
        });

        assert_eq!(stats.average(), Some(333));
        assert_eq!(stats.found(), 10);
        assert_eq!(stats.processed(), 3);
    }

    #[test]
    fn test_average_of_huge_salaries() {
        let half = i64::MAX / 2 + 10;
        let stats = LanguageStats::from_query(&QueryResult {
            salary_sum: 2 * i128::from(half),
            processed: 2,
            found: 2,
        });

        assert_eq!(stats.average(), Some(half));
    }

    #[test]
    fn test_average_absent_without_processed() {
        let stats = LanguageStats::from_query(&QueryResult {
            salary_sum: 0,
            processed: 0,
            found: 42,
        });

        assert_eq!(stats.average(), None);
    }
}
