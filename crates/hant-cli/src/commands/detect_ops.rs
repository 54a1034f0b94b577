use hant_core::{ScriptConverter, ScriptDetector};

use crate::CliError;

/// One-line verdict, or the full detection report as JSON.
pub fn detect(converter: &ScriptConverter, text: &str, json: bool) -> Result<String, CliError> {
    let detection = ScriptDetector::new(converter).detect_explained(text);
    if json {
        return Ok(serde_json::to_string_pretty(&detection)?);
    }

    let mut line = detection.script.to_string();
    match (&detection.ratios, &detection.fallback) {
        (Some(r), None) => line.push_str(&format!(
            "  [statistical: to_traditional={:.3} to_simplified={:.3}]",
            r.to_traditional, r.to_simplified
        )),
        (_, Some(reason)) => {
            let markers = detection.heuristic.map(|h| h.markers).unwrap_or_default();
            line.push_str(&format!(
                "  [heuristic after {reason}: traditional_markers={} simplified_markers={}]",
                markers.traditional, markers.simplified
            ));
        }
        (None, None) => {}
    }
    Ok(line)
}
