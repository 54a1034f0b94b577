//! Script identity and the caller-owned script state.

use std::fmt;

use serde::Serialize;

/// A resolved Chinese script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Simplified,
    Traditional,
}

impl Script {
    /// `true` maps to Traditional, `false` to Simplified.
    pub fn from_is_traditional(is_traditional: bool) -> Self {
        if is_traditional {
            Self::Traditional
        } else {
            Self::Simplified
        }
    }

    pub fn is_traditional(self) -> bool {
        matches!(self, Self::Traditional)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Simplified => Self::Traditional,
            Self::Traditional => Self::Simplified,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Simplified => "Simplified",
            Self::Traditional => "Traditional",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simplified" | "s" | "hans" | "zh-hans" => Ok(Self::Simplified),
            "traditional" | "t" | "hant" | "zh-hant" => Ok(Self::Traditional),
            other => Err(format!("unknown script: {other}")),
        }
    }
}

/// Script state of a document. `Unknown` is only valid before the first
/// detection; once resolved it never goes back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScriptState {
    #[default]
    Unknown,
    Resolved(Script),
}

impl ScriptState {
    pub fn script(self) -> Option<Script> {
        match self {
            Self::Unknown => None,
            Self::Resolved(s) => Some(s),
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl From<Script> for ScriptState {
    fn from(script: Script) -> Self {
        Self::Resolved(script)
    }
}

/// Label for the conversion a toggle from `current` would perform: the
/// current script, then `current.opposite()`, which is the toggle target.
pub fn toggle_label(current: Script) -> &'static str {
    match current {
        Script::Traditional => "Traditional→Simplified",
        Script::Simplified => "Simplified→Traditional",
    }
}
