use ferrous_opencc::{config::BuiltinConfig, OpenCC};
use tracing::debug_span;

use super::{ConversionEngine, EngineError, EngineFactory};
use crate::script::Script;

/// Phrase-aware engine backed by the builtin OpenCC dictionaries.
pub struct OpenccEngine {
    to_traditional: OpenCC,
    to_simplified: OpenCC,
}

impl OpenccEngine {
    pub fn new() -> Result<Self, EngineError> {
        let _span = debug_span!("opencc_load").entered();
        let to_traditional = OpenCC::from_config(BuiltinConfig::S2t)
            .map_err(|e| EngineError::Unavailable(format!("s2t: {e}")))?;
        let to_simplified = OpenCC::from_config(BuiltinConfig::T2s)
            .map_err(|e| EngineError::Unavailable(format!("t2s: {e}")))?;
        Ok(Self {
            to_traditional,
            to_simplified,
        })
    }
}

impl ConversionEngine for OpenccEngine {
    fn convert(&self, text: &str, target: Script) -> Result<String, EngineError> {
        Ok(match target {
            Script::Traditional => self.to_traditional.convert(text),
            Script::Simplified => self.to_simplified.convert(text),
        })
    }
}

/// Factory used by `ScriptConverter::shared()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenccFactory;

impl EngineFactory for OpenccFactory {
    fn create(&self) -> Result<Box<dyn ConversionEngine>, EngineError> {
        Ok(Box::new(OpenccEngine::new()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_both_directions() {
        let engine = OpenccEngine::new().unwrap();
        assert_eq!(
            engine.convert("这是一个测试", Script::Traditional).unwrap(),
            "這是一個測試"
        );
        assert_eq!(
            engine.convert("這是一個測試", Script::Simplified).unwrap(),
            "这是一个测试"
        );
    }

    #[test]
    fn leaves_target_script_alone() {
        let engine = OpenccEngine::new().unwrap();
        assert_eq!(
            engine.convert("這是一個測試", Script::Traditional).unwrap(),
            "這是一個測試"
        );
        assert_eq!(engine.convert("hello 123", Script::Simplified).unwrap(), "hello 123");
    }
}
