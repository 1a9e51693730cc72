use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Элемент мультиселекта площадок в форме фильтров.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueOption {
    pub id: i64,
    pub name: String,
}

impl Location {
    pub fn map_url(&self) -> String {
        format!(
            "https://yandex.ru/maps/?pt={},{}&z=15&l=map",
            self.longitude, self.latitude
        )
    }
}
