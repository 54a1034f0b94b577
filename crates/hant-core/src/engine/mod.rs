//! Conversion engine seam.
//!
//! A `ConversionEngine` converts text into a target script. Engines are built
//! by an `EngineFactory`; `ScriptConverter` calls the factory at most once.

mod opencc;
mod table;

pub use opencc::{OpenccEngine, OpenccFactory};
pub use table::MarkerTableEngine;

use crate::script::Script;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("conversion engine unavailable: {0}")]
    Unavailable(String),

    #[error("conversion failed: {0}")]
    ConversionFailed(String),
}

pub trait ConversionEngine: Send + Sync {
    /// Convert `text` into `target`. Characters already in `target` pass
    /// through unchanged.
    fn convert(&self, text: &str, target: Script) -> Result<String, EngineError>;
}

pub trait EngineFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn ConversionEngine>, EngineError>;
}

impl<F> EngineFactory for F
where
    F: Fn() -> Result<Box<dyn ConversionEngine>, EngineError> + Send + Sync,
{
    fn create(&self) -> Result<Box<dyn ConversionEngine>, EngineError> {
        self()
    }
}
