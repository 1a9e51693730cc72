use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Снимок погоды на момент начала события (`GET /api/events/{id}/weather/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    pub wind_speed_ms: f64,
    pub pressure_mmhg: i32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub wind_direction: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
}

impl WeatherSnapshot {
    /// Температура со знаком: положительная получает `+`.
    pub fn signed_temperature(&self) -> String {
        if self.temperature_celsius > 0.0 {
            format!("+{}", self.temperature_celsius)
        } else {
            self.temperature_celsius.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(temperature_celsius: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius,
            humidity_percent: 40,
            wind_speed_ms: 3.5,
            pressure_mmhg: 750,
            created_at: Utc::now(),
            wind_direction: None,
            venue_name: None,
        }
    }

    #[test]
    fn positive_temperature_gets_plus_sign() {
        assert_eq!(snapshot(12.5).signed_temperature(), "+12.5");
        assert_eq!(snapshot(0.0).signed_temperature(), "0");
        assert_eq!(snapshot(-7.0).signed_temperature(), "-7");
    }
}
