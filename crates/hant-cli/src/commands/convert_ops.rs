use hant_core::{Script, ScriptConverter};
use hant_session::{DocumentSession, StaticPage};
use tracing::debug;

/// Convert line by line, in order.
pub fn convert(converter: &ScriptConverter, text: &str, target: Script) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    debug!(lines = lines.len(), %target, "convert");
    converter.convert_sections(&lines[..], target).concat()
}

/// Load a session over `text`, toggle it `times` times and report the state,
/// label and display after each step.
pub fn toggle(converter: &ScriptConverter, title: &str, text: &str, times: usize) -> String {
    let page = StaticPage::new(title, text);
    let mut session = DocumentSession::load(&page, converter);
    let mut out = String::new();

    let mut report = |step: usize, session: &DocumentSession<'_>| {
        let state = session
            .state()
            .script()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let label = session.toggle_label().unwrap_or("-");
        out.push_str(&format!("#{step} {state} (next: {label})\n"));
        if !session.title().is_empty() {
            out.push_str(session.title());
            out.push('\n');
        }
        out.push_str(&session.text());
        if !out.ends_with('\n') {
            out.push('\n');
        }
    };

    report(0, &session);
    for step in 1..=times {
        let script = session.toggle();
        debug!(step, %script, "toggled");
        report(step, &session);
    }
    out
}
