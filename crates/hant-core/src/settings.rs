//! Detector thresholds.
//!
//! The defaults live in `default_settings.toml`, compiled into the crate. A
//! host may swap in its own `[detector]` table once, before the first
//! detection reads `settings()`; after that the values are fixed for the
//! life of the process.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static OVERRIDE: OnceLock<String> = OnceLock::new();

/// Install replacement thresholds. Rejected if invalid or if a replacement
/// was already installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    OVERRIDE
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Thresholds in effect: the installed replacement, else the embedded defaults.
pub fn settings() -> &'static Settings {
    static ACTIVE: OnceLock<Settings> = OnceLock::new();
    ACTIVE.get_or_init(|| {
        let source = OVERRIDE.get().map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        parse_settings_toml(source).unwrap_or_else(|e| {
            warn!(error = %e, "detector settings rejected, using built-in thresholds");
            Settings::default()
        })
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub detector: DetectorSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectorSettings {
    pub statistical_min_chars: usize,
    pub sample_chars: usize,
    pub ambiguity_threshold: f64,
    pub heuristic_min_chars: usize,
    pub marker_dominance: f64,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            statistical_min_chars: 10,
            sample_chars: 200,
            ambiguity_threshold: 0.05,
            heuristic_min_chars: 5,
            marker_dominance: 1.5,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(detector.statistical_min_chars);
    check_positive_usize!(detector.sample_chars);
    check_positive_usize!(detector.heuristic_min_chars);

    let d = &s.detector;
    if d.sample_chars < d.statistical_min_chars {
        return Err(SettingsError::InvalidValue {
            field: "detector.sample_chars".to_string(),
            reason: "must be at least detector.statistical_min_chars".to_string(),
        });
    }
    if !(0.0..=1.0).contains(&d.ambiguity_threshold) {
        return Err(SettingsError::InvalidValue {
            field: "detector.ambiguity_threshold".to_string(),
            reason: "must be within [0, 1]".to_string(),
        });
    }
    if d.marker_dominance.is_nan() || d.marker_dominance < 1.0 {
        return Err(SettingsError::InvalidValue {
            field: "detector.marker_dominance".to_string(),
            reason: "must be at least 1.0".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.detector, DetectorSettings::default());
        assert_eq!(s.detector.statistical_min_chars, 10);
        assert_eq!(s.detector.sample_chars, 200);
        assert!((s.detector.ambiguity_threshold - 0.05).abs() < f64::EPSILON);
        assert_eq!(s.detector.heuristic_min_chars, 5);
        assert!((s.detector.marker_dominance - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[detector]
statistical_min_chars = 20
sample_chars = 500
ambiguity_threshold = 0.1
heuristic_min_chars = 3
marker_dominance = 2.0
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.detector.sample_chars, 500);
        assert_eq!(s.detector.heuristic_min_chars, 3);
    }

    #[test]
    fn error_zero_sample() {
        let toml = r#"
[detector]
statistical_min_chars = 10
sample_chars = 0
ambiguity_threshold = 0.05
heuristic_min_chars = 5
marker_dominance = 1.5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("detector.sample_chars"));
    }

    #[test]
    fn error_sample_shorter_than_minimum() {
        let toml = r#"
[detector]
statistical_min_chars = 50
sample_chars = 20
ambiguity_threshold = 0.05
heuristic_min_chars = 5
marker_dominance = 1.5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("detector.sample_chars"));
    }

    #[test]
    fn error_threshold_out_of_range() {
        let toml = r#"
[detector]
statistical_min_chars = 10
sample_chars = 200
ambiguity_threshold = 1.5
heuristic_min_chars = 5
marker_dominance = 1.5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("ambiguity_threshold"));
    }

    #[test]
    fn error_dominance_below_one() {
        let toml = r#"
[detector]
statistical_min_chars = 10
sample_chars = 200
ambiguity_threshold = 0.05
heuristic_min_chars = 5
marker_dominance = 0.5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("marker_dominance"));
    }

    #[test]
    fn active_settings_fall_back_to_builtin_thresholds() {
        assert_eq!(settings().detector, DetectorSettings::default());
        assert!(matches!(
            init_custom("[detector]\nsample_chars = 0\n".to_string()),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[other]\nkey = 1\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
