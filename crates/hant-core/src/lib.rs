//! Simplified/Traditional Chinese script detection and conversion.
//!
//! `ScriptDetector` classifies unlabeled text, `ScriptConverter` converts it
//! through a lazily constructed `ConversionEngine`.

pub mod converter;
pub mod detector;
pub mod engine;
pub mod markers;
pub mod script;
pub mod settings;
pub mod unicode;

pub use converter::ScriptConverter;
pub use detector::{detect, text_difference, Detection, ScriptDetector};
pub use engine::{ConversionEngine, EngineError, EngineFactory};
pub use script::{toggle_label, Script, ScriptState};
