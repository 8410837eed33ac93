//! Text table rendering.

use comfy_table::{Cell, CellAlignment, Table};
use indexmap::IndexMap;

use crate::aggregate::LanguageStats;
use crate::source::VacancySource;

/// `+`/`-`/`|` borders, a rule under the header, none between rows.
const ASCII_TABLE: &str = "||--+-++|    ++++++";

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Column holding the processed count.
const PROCESSED_COLUMN: usize = 2;

/// Title naming the site, the region and the publication window searched, so
/// tables from sites with different date filters aren't mistaken as comparable.
pub fn report_title<S>(source: &S, region: &str) -> String
where
    S: VacancySource + ?Sized,
{
    match source.period_days() {
        Some(days) => format!("{} {}, last {} days", source.name(), region, days),
        None => format!("{} {}, all time", source.name(), region),
    }
}

/// Render statistics as an ASCII table with `title` set into the top border.
pub fn render_table(title: &str, stats: &IndexMap<String, LanguageStats>) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_TABLE).set_header(HEADER);

    for (language, language_stats) in stats {
        table.add_row(vec![
            Cell::new(language),
            Cell::new(language_stats.found()),
            Cell::new(language_stats.processed()),
            Cell::new(
                language_stats
                    .average()
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
            ),
        ]);
    }

    if let Some(column) = table.column_mut(PROCESSED_COLUMN) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    with_title(&table.to_string(), title)
}

/// Overwrite the top border with `title` after the corner, e.g.
/// `+HH.ru Moscow---+`. Falls back to a separate line if it doesn't fit.
fn with_title(rendered: &str, title: &str) -> String {
    let mut lines = rendered.lines();
    let Some(top) = lines.next() else {
        return title.to_string();
    };

    let title_width = title.chars().count();
    if title_width + 2 > top.chars().count() {
        return format!("{}\n{}", title, rendered);
    }

    let mut out = String::with_capacity(rendered.len() + title.len());
    out.extend(top.chars().take(1));
    out.push_str(title);
    out.extend(top.chars().skip(1 + title_width));
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}
