//! Форма фильтров списка событий и построение query-string для API.

use std::borrow::Cow;
use tracing::warn;
use validator::{Validate, ValidationError};

pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 25;

/// Допустимые ключи сортировки и подписи для селекта.
pub const ORDERING_OPTIONS: &[(&str, &str)] = &[
    ("", "По умолчанию"),
    ("start_at", "Сначала ранние"),
    ("-start_at", "Сначала поздние"),
    ("end_at", "По окончанию"),
    ("-end_at", "По окончанию (убыв.)"),
    ("title", "По названию (А-Я)"),
    ("-title", "По названию (Я-А)"),
];

/// Текущие значения полей формы фильтров. Пустые поля хранятся как `None`.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
#[validate(schema(function = "validate_bounds"))]
pub struct FilterForm {
    #[validate(length(max = 200, message = "Слишком длинная строка поиска"))]
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub start_at_after: Option<String>,
    pub start_at_before: Option<String>,
    pub end_at_after: Option<String>,
    pub end_at_before: Option<String>,
    pub rating_min: Option<String>,
    pub rating_max: Option<String>,
    pub venues: Vec<i64>,
}

/// Запрос страницы списка: фильтры плюс номер страницы.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub page: u32,
    pub filter: FilterForm,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self { page: 1, filter: FilterForm::default() }
    }
}

impl ListingQuery {
    /// Разбирает query-string страницы `/` (та же форма, что отправляет браузер).
    pub fn from_query_str(raw: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = match raw {
            Some(raw) => serde_urlencoded::from_str(raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed listing query {:?}: {}", raw, e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self::from_pairs(pairs)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListingQuery::default();
        let filter = &mut query.filter;

        for (key, value) in pairs {
            // Строка поиска уходит в API как есть, остальные поля структурные
            let value = match key.as_ref() {
                "search" => value.as_ref(),
                _ => value.as_ref().trim(),
            };
            let field = match key.as_ref() {
                "page" => {
                    query.page = value.parse().ok().filter(|p| *p >= 1).unwrap_or(1);
                    continue;
                }
                "venue" => {
                    match value.parse::<i64>() {
                        Ok(id) if !filter.venues.contains(&id) => filter.venues.push(id),
                        Ok(_) => {}
                        Err(_) if value.is_empty() => {}
                        Err(_) => warn!("Ignoring non-numeric venue id {:?}", value),
                    }
                    continue;
                }
                "search" => &mut filter.search,
                "ordering" => &mut filter.ordering,
                "start_at_after" => &mut filter.start_at_after,
                "start_at_before" => &mut filter.start_at_before,
                "end_at_after" => &mut filter.end_at_after,
                "end_at_before" => &mut filter.end_at_before,
                "rating_min" => &mut filter.rating_min,
                "rating_max" => &mut filter.rating_max,
                _ => continue,
            };
            *field = non_empty(value);
        }

        query
    }
}

impl FilterForm {
    /// Параметры запроса к `GET /api/events/` в порядке полей формы.
    /// Пустые поля пропускаются, `venue` повторяется для каждой выбранной площадки.
    pub fn to_query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.max(1).to_string())];

        let fields = [
            ("search", &self.search),
            ("ordering", &self.ordering),
            ("start_at_after", &self.start_at_after),
            ("start_at_before", &self.start_at_before),
            ("end_at_after", &self.end_at_after),
            ("end_at_before", &self.end_at_before),
            ("rating_min", &self.rating_min),
            ("rating_max", &self.rating_max),
        ];
        for (name, value) in fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((name, value.to_string()));
            }
        }

        params.extend(self.venues.iter().map(|id| ("venue", id.to_string())));
        params
    }

    /// Ссылка на страницу списка с сохранением текущих фильтров.
    pub fn page_href(&self, page: u32) -> String {
        match serde_urlencoded::to_string(self.to_query_pairs(page)) {
            Ok(query) => format!("/?{}", query),
            Err(e) => {
                warn!("Failed to encode pagination link: {}", e);
                format!("/?page={}", page)
            }
        }
    }

    pub fn has_venue(&self, id: i64) -> bool {
        self.venues.contains(&id)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn parse_rating(value: &Option<String>) -> Result<Option<i32>, ValidationError> {
    match value.as_deref() {
        None => Ok(None),
        Some(raw) => match raw.parse::<i32>() {
            Ok(rating) if (RATING_MIN..=RATING_MAX).contains(&rating) => Ok(Some(rating)),
            _ => Err(invalid("rating_range", "Рейтинг должен быть целым числом от 0 до 25")),
        },
    }
}

fn validate_bounds(form: &FilterForm) -> Result<(), ValidationError> {
    let min = parse_rating(&form.rating_min)?;
    let max = parse_rating(&form.rating_max)?;
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(invalid("rating_order", "Минимальный рейтинг больше максимального"));
        }
    }

    if let Some(ordering) = form.ordering.as_deref() {
        if !ORDERING_OPTIONS.iter().any(|(key, _)| *key == ordering) {
            return Err(invalid("ordering", "Неизвестный вариант сортировки"));
        }
    }

    Ok(())
}

/// Человекочитаемые сообщения об ошибках валидации.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|err| {
            err.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string())
        })
        .collect();
    messages.sort();
    messages
}
