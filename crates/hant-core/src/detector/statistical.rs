use serde::Serialize;

use crate::converter::ScriptConverter;
use crate::engine::EngineError;
use crate::script::Script;
use crate::unicode::char_len;

/// Fraction of positions at which `a` and `b` differ.
///
/// Strings of different length (in code points) score exactly 1.0: a
/// conversion that changed the length is not trusted, whatever the overlap.
/// Two empty strings score 0.0.
pub fn text_difference(a: &str, b: &str) -> f64 {
    let len = char_len(a);
    if len != char_len(b) {
        return 1.0;
    }
    if len == 0 {
        return 0.0;
    }
    let differing = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    differing as f64 / len as f64
}

/// Change ratios of a sample pushed through the engine in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundTripRatios {
    /// Sample vs. sample converted to Traditional.
    pub to_traditional: f64,
    /// Sample vs. sample converted to Simplified.
    pub to_simplified: f64,
}

impl RoundTripRatios {
    pub fn measure(converter: &ScriptConverter, sample: &str) -> Result<Self, EngineError> {
        let traditional = converter.try_convert(sample, Script::Traditional)?;
        let simplified = converter.try_convert(sample, Script::Simplified)?;
        Ok(Self {
            to_traditional: text_difference(sample, &traditional),
            to_simplified: text_difference(sample, &simplified),
        })
    }

    /// `None` when the two ratios are within `threshold` of each other.
    /// Otherwise the sample is Traditional iff converting it to Simplified
    /// changed more.
    pub fn verdict(&self, threshold: f64) -> Option<Script> {
        if (self.to_traditional - self.to_simplified).abs() < threshold {
            return None;
        }
        Some(Script::from_is_traditional(
            self.to_simplified > self.to_traditional,
        ))
    }
}
