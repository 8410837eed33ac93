// Entry point: print HH.ru and SuperJob salary tables

use anyhow::{Context, Result};
use job_apis::{HeadHunterClient, SuperJobClient};
use salary_report::{
    average_salary_by_language, render_table, report_title, Config, HeadHunterSource,
    SuperJobSource, VacancySource,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the tables
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Config {
        languages,
        search_prefix,
        region_name,
        hh,
        superjob,
        superjob_api_key,
    } = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(languages = languages.len(), "Configuration loaded");

    let hh = HeadHunterSource::new(
        HeadHunterClient::new().context("Failed to build HH.ru client")?,
        hh,
    );
    let superjob = SuperJobSource::new(
        SuperJobClient::new(superjob_api_key).context("Failed to build SuperJob client")?,
        superjob,
    );

    let sources: [&dyn VacancySource; 2] = [&hh, &superjob];
    for source in sources {
        tracing::info!(source = source.name(), "Collecting salaries");
        let stats = average_salary_by_language(source, &languages, &search_prefix)
            .await
            .with_context(|| format!("Failed to collect {} salaries", source.name()))?;

        println!("{}", render_table(&report_title(source, &region_name), &stats));
    }

    Ok(())
}
