//! Average programmer salaries per language, from HH.ru and SuperJob.
//!
//! For each language the configured sources are paged through, every listing
//! with a usable rouble salary is reduced to a single estimate, and the
//! estimates are averaged into [`LanguageStats`]. [`render_table`] turns the
//! per-language statistics into an ASCII table.
//!
//! # Example
//!
//! ```rust,ignore
//! use salary_report::{average_salary_by_language, render_table, Config, HeadHunterSource};
//!
//! let config = Config::from_env()?;
//! let hh = HeadHunterSource::new(HeadHunterClient::new()?, config.hh.clone());
//! let stats = average_salary_by_language(&hh, &config.languages, &config.search_prefix).await?;
//! println!("{}", render_table("HH.ru Moscow", &stats));
//! ```

pub mod aggregate;
pub mod config;
pub mod report;
pub mod salary;
pub mod source;
pub mod testing;

pub use aggregate::{average_salary_by_language, LanguageStats};
pub use config::{Config, HeadHunterSettings, SuperJobSettings};
pub use report::{render_table, report_title};
pub use salary::predict_salary;
pub use source::{
    query_term, HeadHunterSource, Listing, QueryResult, SuperJobSource, VacancyPage,
    VacancySource,
};
