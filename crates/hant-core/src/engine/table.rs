use std::collections::HashMap;

use super::{ConversionEngine, EngineError};
use crate::markers::MARKER_PAIRS;
use crate::script::Script;

/// Character-for-character engine over the marker table.
///
/// Coverage is limited to the marker pairs, but it needs no dictionary data
/// and preserves length exactly, which makes it a predictable offline engine.
pub struct MarkerTableEngine {
    to_traditional: HashMap<char, char>,
    to_simplified: HashMap<char, char>,
}

impl MarkerTableEngine {
    pub fn new() -> Self {
        Self::from_pairs(MARKER_PAIRS.iter().copied())
    }

    /// Build from `(traditional, simplified)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut to_traditional = HashMap::new();
        let mut to_simplified = HashMap::new();
        for (trad, simp) in pairs {
            to_traditional.insert(simp, trad);
            to_simplified.insert(trad, simp);
        }
        Self {
            to_traditional,
            to_simplified,
        }
    }
}

impl Default for MarkerTableEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionEngine for MarkerTableEngine {
    fn convert(&self, text: &str, target: Script) -> Result<String, EngineError> {
        let map = match target {
            Script::Traditional => &self.to_traditional,
            Script::Simplified => &self.to_simplified,
        };
        Ok(text
            .chars()
            .map(|c| map.get(&c).copied().unwrap_or(c))
            .collect())
    }
}
