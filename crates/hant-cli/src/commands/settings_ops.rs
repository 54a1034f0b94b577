use std::fs;

use tracing::info;

use crate::CliError;

pub fn settings_export() -> &'static str {
    hant_core::settings::default_toml()
}

pub fn settings_validate(file: &str) -> Result<String, CliError> {
    let content = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;
    let s = hant_core::settings::parse_settings_toml(&content)?;
    Ok(format!(
        "OK: sample_chars={} statistical_min_chars={} heuristic_min_chars={} ambiguity_threshold={} marker_dominance={}",
        s.detector.sample_chars,
        s.detector.statistical_min_chars,
        s.detector.heuristic_min_chars,
        s.detector.ambiguity_threshold,
        s.detector.marker_dominance,
    ))
}

/// Install custom settings from a file before any detection runs.
pub fn settings_install(file: &str) -> Result<(), CliError> {
    let content = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;
    hant_core::settings::init_custom(content)?;
    info!(file, "custom settings installed");
    Ok(())
}
