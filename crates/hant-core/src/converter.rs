//! Script conversion over a lazily constructed, shared engine.
//!
//! The engine (or the failure to build it) is cached in a `OnceLock` on first
//! use. Later callers share that outcome and never retry construction;
//! concurrent first callers block on the in-flight construction.

use std::sync::{Arc, OnceLock};

use tracing::{debug, debug_span, warn};

use crate::engine::{ConversionEngine, EngineError, EngineFactory, OpenccFactory};
use crate::script::Script;

type EngineCell = OnceLock<Result<Arc<dyn ConversionEngine>, EngineError>>;

enum EngineSource {
    /// Built by `factory` on first use; the outcome lands in `cell`.
    Lazy {
        factory: Box<dyn EngineFactory>,
        cell: EngineCell,
    },
    Ready(Arc<dyn ConversionEngine>),
}

pub struct ScriptConverter {
    source: EngineSource,
}

impl ScriptConverter {
    pub fn with_factory(factory: impl EngineFactory + 'static) -> Self {
        Self {
            source: EngineSource::Lazy {
                factory: Box::new(factory),
                cell: OnceLock::new(),
            },
        }
    }

    /// Converter over an already-built engine.
    pub fn with_engine(engine: Arc<dyn ConversionEngine>) -> Self {
        Self {
            source: EngineSource::Ready(engine),
        }
    }

    /// Process-wide converter backed by the builtin OpenCC dictionaries.
    pub fn shared() -> &'static ScriptConverter {
        static SHARED: OnceLock<ScriptConverter> = OnceLock::new();
        SHARED.get_or_init(|| ScriptConverter::with_factory(OpenccFactory))
    }

    /// Get the engine, constructing it on first call.
    pub fn engine(&self) -> Result<&dyn ConversionEngine, EngineError> {
        let (factory, cell) = match &self.source {
            EngineSource::Ready(engine) => return Ok(engine.as_ref()),
            EngineSource::Lazy { factory, cell } => (factory, cell),
        };
        let outcome = cell.get_or_init(|| {
            let _span = debug_span!("engine_init").entered();
            match factory.create() {
                Ok(engine) => {
                    debug!("conversion engine ready");
                    Ok(Arc::from(engine))
                }
                Err(e) => {
                    warn!(error = %e, "conversion engine unavailable");
                    Err(e)
                }
            }
        });
        match outcome {
            Ok(engine) => Ok(engine.as_ref()),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.engine().is_ok()
    }

    /// Convert with failures surfaced to the caller.
    pub fn try_convert(&self, text: &str, target: Script) -> Result<String, EngineError> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let _span = debug_span!("convert", %target, len = text.len()).entered();
        self.engine()?.convert(text, target)
    }

    /// Convert `text` into `target`. Never fails: if the engine is missing or
    /// the conversion errors, the failure is logged and `text` comes back
    /// unchanged.
    pub fn convert(&self, text: &str, target: Script) -> String {
        match self.try_convert(text, target) {
            Ok(converted) => converted,
            Err(e) => {
                warn!(error = %e, %target, "conversion skipped, returning input unchanged");
                text.to_string()
            }
        }
    }

    /// `convert` with the target given as a bool (`true` = Traditional).
    pub fn convert_bool(&self, text: &str, to_traditional: bool) -> String {
        self.convert(text, Script::from_is_traditional(to_traditional))
    }

    /// Convert sections one after another, in order, into a fresh buffer.
    pub fn convert_sections<S: AsRef<str>>(&self, sections: &[S], target: Script) -> Vec<String> {
        let mut out = Vec::with_capacity(sections.len());
        for section in sections {
            out.push(self.convert(section.as_ref(), target));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;
    use crate::engine::MarkerTableEngine;

    fn unavailable() -> Result<Box<dyn ConversionEngine>, EngineError> {
        Err(EngineError::Unavailable("forced".into()))
    }

    struct FailingEngine;

    impl ConversionEngine for FailingEngine {
        fn convert(&self, _text: &str, _target: Script) -> Result<String, EngineError> {
            Err(EngineError::ConversionFailed("forced".into()))
        }
    }

    #[test]
    fn empty_input_is_noop_without_engine() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let converter = ScriptConverter::with_factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            unavailable()
        });
        assert_eq!(converter.convert("", Script::Traditional), "");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unavailable_engine_is_identity() {
        let converter = ScriptConverter::with_factory(unavailable);
        for text in ["这是一个测试", "這是一個測試", "abc"] {
            assert_eq!(converter.convert(text, Script::Traditional), text);
            assert_eq!(converter.convert(text, Script::Simplified), text);
        }
        assert!(!converter.is_available());
        assert!(matches!(
            converter.try_convert("这", Script::Traditional),
            Err(EngineError::Unavailable(_))
        ));
    }

    #[test]
    fn prebuilt_engine_is_used_as_is() {
        let converter = ScriptConverter::with_engine(Arc::new(MarkerTableEngine::new()));
        assert!(converter.is_available());
        assert_eq!(converter.try_convert("这个", Script::Traditional).unwrap(), "這個");
        assert_eq!(converter.try_convert("這個", Script::Simplified).unwrap(), "这个");
    }

    #[test]
    fn failing_conversion_is_identity() {
        let converter = ScriptConverter::with_engine(Arc::new(FailingEngine));
        assert!(converter.is_available());
        assert_eq!(converter.convert("这是", Script::Traditional), "这是");
        assert!(matches!(
            converter.try_convert("这是", Script::Traditional),
            Err(EngineError::ConversionFailed(_))
        ));
    }

    #[test]
    fn failure_is_cached_not_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let converter = ScriptConverter::with_factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            unavailable()
        });
        for _ in 0..5 {
            assert!(converter.engine().is_err());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_first_use_constructs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let converter = Arc::new(ScriptConverter::with_factory(
            move || -> Result<Box<dyn ConversionEngine>, EngineError> {
                counter.fetch_add(1, Ordering::SeqCst);
                thread::sleep(std::time::Duration::from_millis(20));
                Ok(Box::new(MarkerTableEngine::new()))
            },
        ));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let converter = Arc::clone(&converter);
                thread::spawn(move || converter.convert("这个", Script::Traditional))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "這個");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn bool_bridge_matches_script_target() {
        let converter = ScriptConverter::with_engine(Arc::new(MarkerTableEngine::new()));
        assert_eq!(converter.convert_bool("这个", true), "這個");
        assert_eq!(converter.convert_bool("這個", false), "这个");
    }

    #[test]
    fn sections_keep_document_order() {
        let converter = ScriptConverter::with_engine(Arc::new(MarkerTableEngine::new()));
        let out = converter.convert_sections(&["这是", "一个", "", "测试"], Script::Traditional);
        assert_eq!(out, vec!["這是", "一個", "", "測試"]);
    }

    #[test]
    fn shared_converter_uses_opencc() {
        let converter = ScriptConverter::shared();
        assert!(converter.is_available());
        assert_eq!(converter.convert("汉字", Script::Traditional), "漢字");
        assert!(std::ptr::eq(converter, ScriptConverter::shared()));
    }
}
