use serde::Serialize;

use crate::markers::{count_markers, MarkerCounts};
use crate::script::Script;
use crate::settings::DetectorSettings;
use crate::unicode::{char_len, contains_han};

/// Which rule of the heuristic decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicRule {
    /// Too short to scan; fixed answer.
    TooShort,
    TraditionalMarkers,
    SimplifiedMarkers,
    /// Markers inconclusive, text contains Han characters.
    HanPresent,
    /// Markers inconclusive, no Han characters at all.
    NoHan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeuristicOutcome {
    pub script: Script,
    pub rule: HeuristicRule,
    pub markers: MarkerCounts,
}

pub(super) fn detect_heuristic(text: &str, settings: &DetectorSettings) -> HeuristicOutcome {
    if char_len(text) < settings.heuristic_min_chars {
        return HeuristicOutcome {
            script: Script::Traditional,
            rule: HeuristicRule::TooShort,
            markers: MarkerCounts::default(),
        };
    }

    let markers = count_markers(text);
    let trad = markers.traditional as f64;
    let simp = markers.simplified as f64;
    let dominance = settings.marker_dominance;

    let (script, rule) = if trad > simp * dominance {
        (Script::Traditional, HeuristicRule::TraditionalMarkers)
    } else if simp > trad * dominance {
        (Script::Simplified, HeuristicRule::SimplifiedMarkers)
    } else if contains_han(text) {
        (Script::Traditional, HeuristicRule::HanPresent)
    } else {
        (Script::Simplified, HeuristicRule::NoHan)
    };

    HeuristicOutcome {
        script,
        rule,
        markers,
    }
}
