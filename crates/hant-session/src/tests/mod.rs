mod proptest_toggle;

use std::sync::Arc;

use hant_core::engine::{ConversionEngine, MarkerTableEngine};
use hant_core::{EngineError, ScriptConverter};

pub(super) fn table_converter() -> ScriptConverter {
    ScriptConverter::with_engine(Arc::new(MarkerTableEngine::new()))
}

pub(super) fn unavailable_converter() -> ScriptConverter {
    ScriptConverter::with_factory(|| -> Result<Box<dyn ConversionEngine>, EngineError> {
        Err(EngineError::Unavailable("forced".into()))
    })
}

pub(super) const SIMPLIFIED_BODY: &str = "这个国家们说\n这是一个测试\n\n时间会说明一切";
pub(super) const TRADITIONAL_BODY: &str = "這個國家們說\n這是一個測試\n\n時間會說明一切";
