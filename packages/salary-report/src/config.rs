use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;
use job_apis::ApiKey;
use std::env;

/// Languages reported when `PROGRAMMING_LANGUAGES` is not set, in report order.
pub const DEFAULT_LANGUAGES: [&str; 8] = [
    "JavaScript", "Java", "Python", "Ruby", "C++", "C#", "C", "Go",
];

/// Prepended to each language to form the search text.
pub const DEFAULT_SEARCH_PREFIX: &str = "Программист";

/// HH.ru search settings.
#[derive(Debug, Clone)]
pub struct HeadHunterSettings {
    /// Region id (1 = Moscow)
    pub area: u32,
    /// Only vacancies published within this many days
    pub period_days: u32,
    pub per_page: u32,
}

impl Default for HeadHunterSettings {
    fn default() -> Self {
        Self {
            area: 1,
            period_days: 30,
            per_page: 100,
        }
    }
}

/// SuperJob search settings.
#[derive(Debug, Clone)]
pub struct SuperJobSettings {
    /// Town id (4 = Moscow)
    pub town: u32,
    pub per_page: u32,
    /// Publication window; no filter when `None`
    pub period_days: Option<u32>,
}

impl Default for SuperJobSettings {
    fn default() -> Self {
        Self {
            town: 4,
            per_page: 100,
            period_days: None,
        }
    }
}

/// Application configuration, built once at startup and passed down.
#[derive(Debug)]
pub struct Config {
    pub languages: Vec<String>,
    pub search_prefix: String,
    /// Region label shown in report titles; matches the region ids above
    pub region_name: String,
    pub hh: HeadHunterSettings,
    pub superjob: SuperJobSettings,
    pub superjob_api_key: ApiKey,
}

impl Config {
    /// Configuration with default settings and the given SuperJob key.
    pub fn new(superjob_api_key: impl Into<ApiKey>) -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            search_prefix: DEFAULT_SEARCH_PREFIX.to_string(),
            region_name: "Moscow".to_string(),
            hh: HeadHunterSettings::default(),
            superjob: SuperJobSettings::default(),
            superjob_api_key: superjob_api_key.into(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let api_key = env::var("SUPER_JOB_TOKEN").context("SUPER_JOB_TOKEN must be set")?;
        let mut config = Self::new(api_key);

        if let Ok(raw) = env::var("PROGRAMMING_LANGUAGES") {
            config.languages = parse_languages(&raw);
            ensure!(
                !config.languages.is_empty(),
                "PROGRAMMING_LANGUAGES must name at least one language"
            );
        }

        Ok(config)
    }
}

/// Split a comma-separated language list, keeping order and dropping blanks.
fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
