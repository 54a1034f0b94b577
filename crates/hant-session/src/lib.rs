//! Stateful document session: one title and body, one script state.
//!
//! `DocumentSession` is the only owner of the script state. Detection
//! resolves it, toggles advance it, and every transition replaces text and
//! state together so the label shown to the user always describes the text
//! actually on display.

mod export;
mod page;

#[cfg(test)]
mod tests;

use hant_core::{toggle_label, Detection, Script, ScriptConverter, ScriptDetector, ScriptState};
use tracing::{debug, debug_span, warn};

pub use page::{PageAdapter, StaticPage};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Content {
    title: String,
    /// Body split into lines, terminators kept, in document order.
    sections: Vec<String>,
}

impl Content {
    fn new(title: String, text: &str) -> Self {
        Self {
            title,
            sections: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    fn body(&self) -> String {
        self.sections.concat()
    }
}

pub struct DocumentSession<'c> {
    converter: &'c ScriptConverter,
    content: Content,
    state: ScriptState,
    last_detection: Option<Detection>,
}

impl<'c> DocumentSession<'c> {
    /// Session over the given text with the script not yet detected.
    pub fn new(converter: &'c ScriptConverter, title: impl Into<String>, text: &str) -> Self {
        Self {
            converter,
            content: Content::new(title.into(), text),
            state: ScriptState::Unknown,
            last_detection: None,
        }
    }

    /// Pull title and text from `page` and resolve the script. A page with
    /// no content resolves to Traditional without running detection.
    pub fn load(page: &dyn PageAdapter, converter: &'c ScriptConverter) -> Self {
        let title = page.extract_title();
        match page.extract_text() {
            Some(text) => {
                let mut session = Self::new(converter, title, &text);
                session.detect();
                session
            }
            None => {
                debug!("page has no content, defaulting to Traditional");
                Self {
                    converter,
                    content: Content::new(title, ""),
                    state: ScriptState::Resolved(Script::Traditional),
                    last_detection: None,
                }
            }
        }
    }

    /// Detect the script of the current body and record it as the state.
    pub fn detect(&mut self) -> Script {
        let detection = ScriptDetector::new(self.converter).detect_explained(&self.content.body());
        let script = detection.script;
        debug!(%script, method = ?detection.method, "session script resolved");
        self.state = ScriptState::Resolved(script);
        self.last_detection = Some(detection);
        script
    }

    pub fn state(&self) -> ScriptState {
        self.state
    }

    /// Evidence from the most recent detection, if one ran.
    pub fn last_detection(&self) -> Option<&Detection> {
        self.last_detection.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.content.title
    }

    /// The body as currently displayed.
    pub fn text(&self) -> String {
        self.content.body()
    }

    pub fn sections(&self) -> &[String] {
        &self.content.sections
    }

    /// Label of the conversion the next `toggle()` performs; `None` until the
    /// script is resolved.
    pub fn toggle_label(&self) -> Option<&'static str> {
        self.state.script().map(toggle_label)
    }

    /// Convert the displayed title and body to the other script.
    ///
    /// Works on the current display, never on the originally loaded text.
    /// If the engine fails, text and state are left as they were. Returns the
    /// script the session is in afterwards.
    pub fn toggle(&mut self) -> Script {
        let current = match self.state {
            ScriptState::Resolved(script) => script,
            ScriptState::Unknown => self.detect(),
        };
        let target = current.opposite();
        let _span = debug_span!("toggle", from = %current, to = %target).entered();

        match self.convert_content(target) {
            Ok(content) => {
                (self.content, self.state) = (content, ScriptState::Resolved(target));
                target
            }
            Err(e) => {
                warn!(error = %e, "toggle skipped, display unchanged");
                current
            }
        }
    }

    /// Bring the display into `target`, toggling only if needed.
    pub fn convert_to(&mut self, target: Script) -> Script {
        if self.state == ScriptState::Resolved(target) {
            return target;
        }
        if self.state == ScriptState::Unknown && self.detect() == target {
            return target;
        }
        self.toggle()
    }

    fn convert_content(&self, target: Script) -> Result<Content, hant_core::EngineError> {
        let title = self.converter.try_convert(&self.content.title, target)?;
        let mut sections = Vec::with_capacity(self.content.sections.len());
        for section in &self.content.sections {
            sections.push(self.converter.try_convert(section, target)?);
        }
        Ok(Content { title, sections })
    }

    /// Title, blank line, body; as displayed.
    pub fn export_text(&self) -> String {
        export::export_text(&self.content.title, &self.content.body())
    }

    /// `.txt` file name derived from the displayed title.
    pub fn export_file_name(&self) -> String {
        export::file_name(&self.content.title)
    }
}
