const DETECTOR_KEYS: &[&str] = &[
    "statistical_min_chars",
    "sample_chars",
    "ambiguity_threshold",
    "heuristic_min_chars",
    "marker_dominance",
];

fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    check_detector_table(include_str!("src/default_settings.toml"));
}

/// The embedded defaults must parse and carry every `[detector]` key.
fn check_detector_table(content: &str) {
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("src/default_settings.toml: {e}"),
    };
    let Some(detector) = value.get("detector").and_then(toml::Value::as_table) else {
        panic!("src/default_settings.toml: missing [detector] table");
    };
    for key in DETECTOR_KEYS {
        if !detector.contains_key(*key) {
            panic!("src/default_settings.toml: missing detector.{key}");
        }
    }
}
