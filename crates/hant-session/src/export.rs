const RESERVED: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Title followed by a blank line and the body.
pub(crate) fn export_text(title: &str, body: &str) -> String {
    format!("{title}\n\n{body}")
}

/// File-system safe `.txt` name derived from a title.
pub(crate) fn file_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "untitled.txt".to_string()
    } else {
        format!("{cleaned}.txt")
    }
}
