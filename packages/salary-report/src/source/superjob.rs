use async_trait::async_trait;
use job_apis::{Result, SjSearch, SjVacanciesPage, SuperJobClient};

use super::{Listing, VacancyPage, VacancySource};
use crate::config::SuperJobSettings;

/// SuperJob salaries are quoted in roubles under this code.
const LOCAL_CURRENCY: &str = "rub";

/// SuperJob adapter.
pub struct SuperJobSource {
    client: SuperJobClient,
    settings: SuperJobSettings,
}

impl SuperJobSource {
    pub fn new(client: SuperJobClient, settings: SuperJobSettings) -> Self {
        Self { client, settings }
    }

    fn search(&self, term: &str, page: u32) -> SjSearch {
        SjSearch {
            keyword: term.to_string(),
            town: self.settings.town,
            page,
            count: self.settings.per_page,
            period: self.settings.period_days,
        }
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        "SJ.ru"
    }

    fn currency(&self) -> &str {
        LOCAL_CURRENCY
    }

    fn period_days(&self) -> Option<u32> {
        self.settings.period_days
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<VacancyPage> {
        let response = self.client.search_vacancies(&self.search(term, page)).await?;
        Ok(to_vacancy_page(response))
    }
}

fn to_vacancy_page(response: SjVacanciesPage) -> VacancyPage {
    let listings = response
        .objects
        .into_iter()
        .map(|vacancy| Listing {
            salary_from: vacancy.payment_from,
            salary_to: vacancy.payment_to,
            currency: vacancy.currency,
        })
        .collect();

    VacancyPage {
        listings,
        found: response.total,
        has_more: response.more,
    }
}
