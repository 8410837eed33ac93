use serde::{Deserialize, Serialize};

/// Query parameters for `GET /vacancies` on api.hh.ru.
#[derive(Debug, Clone, Serialize)]
pub struct HhSearch {
    /// Free-text search
    pub text: String,
    /// Region id (1 = Moscow)
    pub area: u32,
    /// Only vacancies published within this many days
    pub period: u32,
    /// Zero-based page index
    pub page: u32,
    pub per_page: u32,
}

/// One page of HH.ru search results.
#[derive(Debug, Clone, Deserialize)]
pub struct HhVacanciesPage {
    #[serde(default)]
    pub items: Vec<HhVacancy>,
    /// Total vacancies matching the search
    pub found: u64,
    /// Total pages available for this search
    pub pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

/// Salary block of an HH.ru vacancy. Either bound may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub currency: Option<String>,
}

/// Query parameters for `GET /vacancies` on api.superjob.ru.
#[derive(Debug, Clone, Serialize)]
pub struct SjSearch {
    pub keyword: String,
    /// Town id (4 = Moscow)
    pub town: u32,
    /// Zero-based page index
    pub page: u32,
    /// Page size
    pub count: u32,
    /// Publication window in days (1, 3 or 7); all time when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

/// One page of SuperJob search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SjVacanciesPage {
    #[serde(default)]
    pub objects: Vec<SjVacancy>,
    /// Total vacancies matching the search
    pub total: u64,
    /// Whether another page follows this one
    #[serde(default)]
    pub more: bool,
}

/// A SuperJob vacancy. SuperJob reports 0 for an unspecified bound.
#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    pub payment_from: Option<i64>,
    pub payment_to: Option<i64>,
    pub currency: Option<String>,
}
