use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Часовой пояс отображения; некорректное смещение откатывается к UTC.
pub fn display_offset(hours: i32) -> FixedOffset {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

fn month_name(month: u32) -> &'static str {
    MONTHS_GENITIVE[(month as usize).saturating_sub(1) % 12]
}

/// `"5 марта, 19:30"` — дата в карточке списка.
pub fn card_date(at: &DateTime<Utc>, offset: FixedOffset) -> String {
    let local = at.with_timezone(&offset);
    format!(
        "{} {}, {:02}:{:02}",
        local.day(),
        month_name(local.month()),
        local.hour(),
        local.minute()
    )
}

/// `"5 марта 2026 г., 19:30"` — даты на странице события.
pub fn detail_date(at: &DateTime<Utc>, offset: FixedOffset) -> String {
    let local = at.with_timezone(&offset);
    format!(
        "{} {} {} г., {:02}:{:02}",
        local.day(),
        month_name(local.month()),
        local.year(),
        local.hour(),
        local.minute()
    )
}

/// `"05.03.2026, 19:30:00"` — момент актуализации прогноза.
pub fn timestamp(at: &DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%d.%m.%Y, %H:%M:%S").to_string()
}

/// Обрезает описание для карточки по символам, а не байтам.
pub fn short_description(description: Option<&str>) -> String {
    match description {
        None => "Описание отсутствует".to_string(),
        Some(text) if text.chars().count() > DESCRIPTION_PREVIEW_CHARS => {
            let cut: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", cut)
        }
        Some(text) => text.to_string(),
    }
}
