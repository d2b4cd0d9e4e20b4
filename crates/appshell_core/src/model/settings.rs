//! Application settings record.
//!
//! # Responsibility
//! - Define the single fixed-shape configuration record and its defaults.
//! - Keep the tolerant decode used for persisted payloads in one place.
//!
//! # Invariants
//! - The in-memory record is always fully populated.
//! - Decoding fills absent fields from defaults and ignores unknown fields.

use serde::{Deserialize, Serialize};

/// Data budget preference applied by sync-heavy features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataUsage {
    Low,
    Normal,
    High,
}

impl DataUsage {
    /// Stable string id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

/// User-adjustable application configuration.
///
/// `#[serde(default)]` gives persisted payloads field-by-field merge
/// semantics: present fields win, absent fields fall back to defaults,
/// unknown fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub notifications_enabled: bool,
    pub dark_mode: bool,
    /// BCP 47-ish language tag chosen by the user, e.g. `en`.
    pub language: String,
    pub auto_sync: bool,
    pub offline_mode: bool,
    pub data_usage: DataUsage,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            dark_mode: false,
            language: "en".to_string(),
            auto_sync: true,
            offline_mode: true,
            data_usage: DataUsage::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppSettings, DataUsage};

    #[test]
    fn defaults_match_contract() {
        let settings = AppSettings::default();
        assert!(settings.notifications_enabled);
        assert!(!settings.dark_mode);
        assert_eq!(settings.language, "en");
        assert!(settings.auto_sync);
        assert!(settings.offline_mode);
        assert_eq!(settings.data_usage, DataUsage::Normal);
    }

    #[test]
    fn decode_fills_absent_fields_from_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"dark_mode":true}"#)
            .expect("partial payload should decode");
        assert!(settings.dark_mode);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.data_usage, DataUsage::Normal);
    }

    #[test]
    fn decode_tolerates_unknown_fields() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"language":"de","legacy_theme":"sepia"}"#)
                .expect("unknown fields should be dropped");
        assert_eq!(settings.language, "de");
    }

    #[test]
    fn encode_decode_round_trips_losslessly() {
        let mut settings = AppSettings::default();
        settings.dark_mode = true;
        settings.language = "fr".to_string();
        settings.data_usage = DataUsage::High;

        let raw = serde_json::to_string(&settings).expect("settings should encode");
        let decoded: AppSettings = serde_json::from_str(&raw).expect("settings should decode");
        assert_eq!(decoded, settings);
    }

    #[test]
    fn data_usage_serializes_as_snake_case() {
        let encoded = serde_json::to_string(&DataUsage::High).expect("data usage should encode");
        assert_eq!(encoded, "\"high\"");
        assert_eq!(DataUsage::Low.as_str(), "low");
    }
}
