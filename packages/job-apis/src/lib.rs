//! Pure HH.ru and SuperJob REST API clients.
//!
//! Minimal clients for the two vacancy search APIs. Each call fetches exactly
//! one page; pagination and any salary logic belong to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use job_apis::{HeadHunterClient, HhSearch};
//!
//! let client = HeadHunterClient::new()?;
//! let page = client
//!     .search_vacancies(&HhSearch {
//!         text: "Программист Rust".into(),
//!         area: 1,
//!         period: 30,
//!         page: 0,
//!         per_page: 100,
//!     })
//!     .await?;
//! println!("{} vacancies found", page.found);
//! ```

pub mod error;
pub mod hh;
pub mod superjob;
pub mod types;

pub use secrecy::ExposeSecret;
pub use error::{JobApiError, Result};
pub use hh::HeadHunterClient;
pub use superjob::SuperJobClient;
pub use types::*;

use serde::de::DeserializeOwned;

/// Application key for SuperJob. Redacted in `Debug`; read it with
/// [`ExposeSecret::expose_secret`].
pub type ApiKey = secrecy::SecretString;

const USER_AGENT: &str = concat!("salary-report/", env!("CARGO_PKG_VERSION"));

/// Turn a response into `T`, or into `JobApiError::Api` on a non-2xx status.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let url = resp.url().clone();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %url, "API request failed");
        return Err(JobApiError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
