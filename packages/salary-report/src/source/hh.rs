use async_trait::async_trait;
use job_apis::{HeadHunterClient, HhSearch, HhVacanciesPage, Result};

use super::{Listing, VacancyPage, VacancySource};
use crate::config::HeadHunterSettings;

/// HH.ru salaries are quoted in roubles under this code.
const LOCAL_CURRENCY: &str = "RUR";

/// HH.ru adapter.
pub struct HeadHunterSource {
    client: HeadHunterClient,
    settings: HeadHunterSettings,
}

impl HeadHunterSource {
    pub fn new(client: HeadHunterClient, settings: HeadHunterSettings) -> Self {
        Self { client, settings }
    }

    fn search(&self, term: &str, page: u32) -> HhSearch {
        HhSearch {
            text: term.to_string(),
            area: self.settings.area,
            period: self.settings.period_days,
            page,
            per_page: self.settings.per_page,
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    fn name(&self) -> &str {
        "HH.ru"
    }

    fn currency(&self) -> &str {
        LOCAL_CURRENCY
    }

    fn period_days(&self) -> Option<u32> {
        Some(self.settings.period_days)
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<VacancyPage> {
        let response = self.client.search_vacancies(&self.search(term, page)).await?;
        Ok(to_vacancy_page(response, page))
    }
}

/// HH.ru has no "more" flag; a following page exists while `page + 1 < pages`.
fn to_vacancy_page(response: HhVacanciesPage, page: u32) -> VacancyPage {
    let listings = response
        .items
        .into_iter()
        .map(|vacancy| match vacancy.salary {
            Some(salary) => Listing {
                salary_from: salary.from,
                salary_to: salary.to,
                currency: salary.currency,
            },
            None => Listing::default(),
        })
        .collect();

    VacancyPage {
        listings,
        found: response.found,
        has_more: page.saturating_add(1) < response.pages,
    }
}
