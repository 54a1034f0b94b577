//! Simplified/Traditional script detection.
//!
//! Two tiers:
//! 1. Statistical: push a prefix sample through the engine in both directions
//!    and compare how much each direction changed it. Text already in a
//!    script barely changes when converted into that script.
//! 2. Heuristic: count paired marker characters. Needs no engine.
//!
//! The statistical tier is skipped for short input and falls back to the
//! heuristic when the engine is unavailable, a conversion fails, or the two
//! ratios are too close to call. Detection itself never fails.

mod heuristic;
mod statistical;

pub use heuristic::{HeuristicOutcome, HeuristicRule};
pub use statistical::{text_difference, RoundTripRatios};

use std::fmt;

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::converter::ScriptConverter;
use crate::engine::EngineError;
use crate::script::Script;
use crate::settings::{settings, DetectorSettings};
use crate::unicode::{char_len, prefix_chars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    Statistical,
    Heuristic,
}

/// Why the statistical tier did not decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    TooShort,
    EngineUnavailable,
    ConversionFailed,
    Ambiguous,
}

impl FallbackReason {
    /// Same spelling as the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::EngineUnavailable => "engine_unavailable",
            Self::ConversionFailed => "conversion_failed",
            Self::Ambiguous => "ambiguous",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&EngineError> for FallbackReason {
    fn from(e: &EngineError) -> Self {
        match e {
            EngineError::Unavailable(_) => Self::EngineUnavailable,
            EngineError::ConversionFailed(_) => Self::ConversionFailed,
        }
    }
}

/// Detection result together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub script: Script,
    pub method: DetectionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratios: Option<RoundTripRatios>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<HeuristicOutcome>,
}

impl Detection {
    fn heuristic(
        outcome: HeuristicOutcome,
        fallback: FallbackReason,
        ratios: Option<RoundTripRatios>,
    ) -> Self {
        Self {
            script: outcome.script,
            method: DetectionMethod::Heuristic,
            fallback: Some(fallback),
            ratios,
            heuristic: Some(outcome),
        }
    }
}

pub struct ScriptDetector<'a> {
    converter: &'a ScriptConverter,
    settings: &'a DetectorSettings,
}

impl<'a> ScriptDetector<'a> {
    /// Detector using the global settings.
    pub fn new(converter: &'a ScriptConverter) -> Self {
        Self::with_settings(converter, &settings().detector)
    }

    pub fn with_settings(converter: &'a ScriptConverter, settings: &'a DetectorSettings) -> Self {
        Self {
            converter,
            settings,
        }
    }

    /// `Script::Traditional` or `Script::Simplified`; never fails.
    pub fn detect(&self, text: &str) -> Script {
        self.detect_explained(text).script
    }

    pub fn detect_explained(&self, text: &str) -> Detection {
        let _span = debug_span!("detect", len = text.len()).entered();

        if char_len(text) < self.settings.statistical_min_chars {
            let outcome = self.detect_heuristic(text);
            debug!(rule = ?outcome.rule, script = %outcome.script, "short input, heuristic");
            return Detection::heuristic(outcome, FallbackReason::TooShort, None);
        }

        let sample = prefix_chars(text, self.settings.sample_chars);
        let ratios = match RoundTripRatios::measure(self.converter, sample) {
            Ok(ratios) => ratios,
            Err(e) => {
                warn!(error = %e, "statistical detection unavailable, using heuristic");
                let outcome = self.detect_heuristic(text);
                return Detection::heuristic(outcome, FallbackReason::from(&e), None);
            }
        };

        debug!(
            to_traditional = ratios.to_traditional,
            to_simplified = ratios.to_simplified,
            "round-trip ratios"
        );

        match ratios.verdict(self.settings.ambiguity_threshold) {
            Some(script) => Detection {
                script,
                method: DetectionMethod::Statistical,
                fallback: None,
                ratios: Some(ratios),
                heuristic: None,
            },
            None => {
                let outcome = self.detect_heuristic(sample);
                debug!(rule = ?outcome.rule, script = %outcome.script, "ambiguous ratios, heuristic");
                Detection::heuristic(outcome, FallbackReason::Ambiguous, Some(ratios))
            }
        }
    }

    /// Marker-counting tier on its own.
    pub fn detect_heuristic(&self, text: &str) -> HeuristicOutcome {
        heuristic::detect_heuristic(text, self.settings)
    }
}

/// Detect with the shared converter and global settings.
pub fn detect(text: &str) -> Script {
    ScriptDetector::new(ScriptConverter::shared()).detect(text)
}
