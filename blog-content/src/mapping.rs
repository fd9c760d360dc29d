//! Преобразование документов сервиса контента в модели для отображения.

use chrono::{DateTime, Datelike, Utc};
use tracing::warn;

use crate::models::{PageResult, PostSummary, RawPage, RawPostRecord};

/// Сокращённые названия месяцев (pt-BR), как их выводит `MMM`.
const PT_BR_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Формат, в котором сервис отдаёт время публикации (`+0000` без двоеточия).
const CMS_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, CMS_TIMESTAMP_FORMAT))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Форматирует дату как `dd mmm yyyy` с португальскими (бразильскими)
/// сокращениями месяцев, например `25 mar 2021`.
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    let month = PT_BR_MONTHS[date.month0() as usize];
    format!("{:02} {month} {:04}", date.day(), date.year())
}

/// Разбирает время публикации из ответа сервиса и форматирует его для
/// отображения. Возвращает `None`, если строку не удалось разобрать.
pub fn format_publication_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|date| format_display_date(&date))
}

impl From<RawPostRecord> for PostSummary {
    fn from(record: RawPostRecord) -> Self {
        let timestamp = record
            .last_publication_date
            .as_deref()
            .or(record.first_publication_date.as_deref());

        let first_publication_date = match timestamp.and_then(format_publication_date) {
            Some(date) => date,
            None => {
                warn!(
                    document_id = %record.id,
                    timestamp = ?timestamp,
                    "post has no usable publication date"
                );
                String::new()
            }
        };

        Self {
            slug: record.uid.unwrap_or_default(),
            first_publication_date,
            title: record.data.title,
            subtitle: record.data.subtitle,
            author: record.data.author,
        }
    }
}

impl From<RawPage> for PageResult {
    fn from(page: RawPage) -> Self {
        Self {
            posts: page.results.into_iter().map(PostSummary::from).collect(),
            next_page_token: page.next_page,
        }
    }
}
