use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Venue;

/// Карточка события в списке (`GET /api/events/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub preview_image: Option<String>,
}

/// Полная информация о событии (`GET /api/events/{id}/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub summary: EventSummary,
    #[serde(default)]
    pub venue: Option<Venue>,
}

impl EventSummary {
    /// Описание без пустых строк: API отдает `""`, когда описания нет.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    pub fn preview_image(&self) -> Option<&str> {
        self.preview_image.as_deref().filter(|url| !url.is_empty())
    }
}
