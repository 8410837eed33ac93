//! SuperJob vacancy search client.

use reqwest::{Client, RequestBuilder};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::error::{JobApiError, Result};
use crate::types::{SjSearch, SjVacanciesPage};
use crate::{read_json, ApiKey, USER_AGENT};

const BASE_URL: &str = "https://api.superjob.ru/2.0";

/// Header carrying the application's secret key.
const APP_ID_HEADER: &str = "X-Api-App-Id";

/// SuperJob API client. Every request is signed with the app key.
#[derive(Debug)]
pub struct SuperJobClient {
    client: Client,
    api_key: ApiKey,
    base_url: String,
}

impl SuperJobClient {
    /// Create a client. Fails with `MissingKey` on a blank key, which SuperJob
    /// would otherwise reject on the first request.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.expose_secret().trim().is_empty() {
            return Err(JobApiError::MissingKey);
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_key,
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
    pub async fn search_vacancies(&self, search: &SjSearch) -> Result<SjVacanciesPage> {
        debug!(keyword = %search.keyword, page = search.page, "SuperJob vacancies request");
        let resp = self.request(search).send().await?;
        read_json(resp).await
    }

    fn request(&self, search: &SjSearch) -> RequestBuilder {
        self.client
            .get(format!("{}/vacancies", self.base_url))
            .header(APP_ID_HEADER, self.api_key.expose_secret())
            .query(search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use std::collections::HashMap;

    fn search(page: u32, period: Option<u32>) -> SjSearch {
        SjSearch {
            keyword: "Программист C#".into(),
            town: 4,
            page,
            count: 100,
            period,
        }
    }

    #[test]
    fn test_request_signed_with_app_id() {
        let client = SuperJobClient::new("v3.r.test-key").unwrap();

        let request = client.request(&search(0, None)).build().unwrap();

        assert_eq!(
            request.headers().get(APP_ID_HEADER).unwrap(),
            "v3.r.test-key"
        );
    }

    #[test]
    fn test_request_carries_search_params() {
        let client = SuperJobClient::new("key").unwrap();

        let request = client.request(&search(2, Some(7))).build().unwrap();
        let params: HashMap<String, String> = request.url().query_pairs().into_owned().collect();

        assert_eq!(request.url().path(), "/2.0/vacancies");
        assert_eq!(params["keyword"], "Программист C#");
        assert_eq!(params["town"], "4");
        assert_eq!(params["page"], "2");
        assert_eq!(params["count"], "100");
        assert_eq!(params["period"], "7");
    }

    #[test]
    fn test_blank_key_rejected() {
        assert!(matches!(SuperJobClient::new("  "), Err(JobApiError::MissingKey)));
        assert!(matches!(SuperJobClient::new(""), Err(JobApiError::MissingKey)));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let base_url = test_server::respond_once("500 Internal Server Error", "boom").await;
        let client = SuperJobClient::new("key").unwrap().with_base_url(base_url);

        let err = client.search_vacancies(&search(0, None)).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        match err {
            JobApiError::Api { message, .. } => assert_eq!(message, "boom"),
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_decodes_page() {
        let base_url = test_server::respond_once(
            "200 OK",
            r#"{"objects": [{"payment_from": 100000, "payment_to": 0, "currency": "rub"}], "total": 1, "more": false}"#,
        )
        .await;
        let client = SuperJobClient::new("key").unwrap().with_base_url(base_url);

        let page = client.search_vacancies(&search(0, None)).await.unwrap();

        assert_eq!(page.total, 1);
        assert!(!page.more);
        assert_eq!(page.objects[0].payment_from, Some(100000));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = SuperJobClient::new("v3.r.very-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very-secret"));
    }
}
