//! HH.ru (HeadHunter) vacancy search client.

use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::error::Result;
use crate::types::{HhSearch, HhVacanciesPage};
use crate::{read_json, USER_AGENT};

const BASE_URL: &str = "https://api.hh.ru";

/// HH.ru public API client. No key required.
#[derive(Debug, Clone)]
pub struct HeadHunterClient {
    client: Client,
    base_url: String,
}

impl HeadHunterClient {
    /// Create a client. HH rejects requests without a descriptive User-Agent.
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Set a custom base URL (for proxies, test servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of vacancies.
    pub async fn search_vacancies(&self, search: &HhSearch) -> Result<HhVacanciesPage> {
        debug!(text = %search.text, page = search.page, "HH.ru vacancies request");
        let resp = self.request(search).send().await?;
        read_json(resp).await
    }

    fn request(&self, search: &HhSearch) -> RequestBuilder {
        self.client
            .get(format!("{}/vacancies", self.base_url))
            .query(search)
    }
}
