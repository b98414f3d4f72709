use serde::{Deserialize, Serialize};

/// Irrigation, notification and locale preferences, stored as one JSON blob.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub irrigation: IrrigationSettings,
    pub notifications: NotificationSettings,
    pub system: SystemSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationSettings {
    pub auto_mode: bool,
    /// Percent; readings below this count as dry.
    pub min_humidity: u8,
    /// Percent; readings above this count as wet.
    pub max_humidity: u8,
    /// Minutes between sensor checks.
    pub check_interval: u32,
    /// Seconds the pump runs per irrigation.
    pub irrigation_duration: u32,
}

impl Default for IrrigationSettings {
    fn default() -> Self {
        Self {
            auto_mode: true,
            min_humidity: 40,
            max_humidity: 70,
            check_interval: 30,
            irrigation_duration: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub low_humidity: bool,
    pub system_errors: bool,
    pub weekly_report: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            low_humidity: true,
            system_errors: true,
            weekly_report: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub timezone: String,
    pub language: String,
    pub units: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            timezone: "America/Sao_Paulo".to_string(),
            language: "pt-BR".to_string(),
            units: "metric".to_string(),
        }
    }
}

// Slider and input bounds.
pub const MIN_HUMIDITY_RANGE: (u8, u8) = (20, 60);
pub const MAX_HUMIDITY_RANGE: (u8, u8) = (60, 90);
pub const DURATION_RANGE: (u32, u32) = (10, 120);

pub const CHECK_INTERVALS: &[(u32, &str)] = &[
    (15, "15 minutos"),
    (30, "30 minutos"),
    (60, "1 hora"),
    (120, "2 horas"),
    (240, "4 horas"),
];

pub const TIMEZONES: &[(&str, &str)] = &[
    ("America/Sao_Paulo", "São Paulo (GMT-3)"),
    ("America/Rio_Branco", "Rio Branco (GMT-5)"),
    ("America/Manaus", "Manaus (GMT-4)"),
];

pub const LANGUAGES: &[(&str, &str)] = &[
    ("pt-BR", "Português (Brasil)"),
    ("en-US", "English (US)"),
    ("es-ES", "Español"),
];

pub const UNITS: &[(&str, &str)] = &[
    ("metric", "Métrico (°C, L)"),
    ("imperial", "Imperial (°F, gal)"),
];

/// Parse a numeric form value, clamped into `range`. Unparseable input
/// yields `None` so the previous value is kept.
pub fn parse_clamped<T>(raw: &str, range: (T, T)) -> Option<T>
where
    T: std::str::FromStr + Ord,
{
    raw.trim().parse::<T>().ok().map(|v| v.clamp(range.0, range.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_factory_values() {
        let s = Settings::default();
        assert!(s.irrigation.auto_mode);
        assert_eq!(s.irrigation.min_humidity, 40);
        assert_eq!(s.irrigation.max_humidity, 70);
        assert_eq!(s.irrigation.check_interval, 30);
        assert_eq!(s.irrigation.irrigation_duration, 30);
        assert!(s.notifications.weekly_report);
        assert_eq!(s.system.timezone, "America/Sao_Paulo");
        assert_eq!(s.system.language, "pt-BR");
        assert_eq!(s.system.units, "metric");
    }

    #[test]
    fn test_serialized_shape_uses_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["irrigation"]["minHumidity"], 40);
        assert_eq!(json["irrigation"]["autoMode"], true);
        assert_eq!(json["notifications"]["lowHumidity"], true);
        assert_eq!(json["system"]["units"], "metric");
    }

    #[test]
    fn test_parses_blob_written_by_older_builds() {
        let raw = r#"{
            "irrigation": {"autoMode": false, "minHumidity": 35, "maxHumidity": 80,
                           "checkInterval": 60, "irrigationDuration": 45},
            "notifications": {"email": false, "push": true, "lowHumidity": true,
                              "systemErrors": false, "weeklyReport": true},
            "system": {"timezone": "America/Manaus", "language": "es-ES", "units": "imperial"}
        }"#;
        let s: Settings = serde_json::from_str(raw).unwrap();
        assert!(!s.irrigation.auto_mode);
        assert_eq!(s.irrigation.min_humidity, 35);
        assert_eq!(s.irrigation.check_interval, 60);
        assert!(!s.notifications.system_errors);
        assert_eq!(s.system.timezone, "America/Manaus");
    }

    #[test]
    fn test_parse_clamped() {
        assert_eq!(parse_clamped("45", MIN_HUMIDITY_RANGE), Some(45));
        assert_eq!(parse_clamped("5", MIN_HUMIDITY_RANGE), Some(20));
        assert_eq!(parse_clamped("500", DURATION_RANGE), Some(120));
        assert_eq!(parse_clamped("", DURATION_RANGE), None);
        assert_eq!(parse_clamped("abc", MAX_HUMIDITY_RANGE), None);
    }
}
