//! Caption text formatting.
//!
//! Reflows an arbitrary label string to a fixed column width so it can be
//! rendered as a multi-line caption. Structural punctuation a pretty-printer
//! would introduce around quoted phrases (quotes, parentheses) is stripped,
//! and continuation lines never start with a stray space.

use crate::core::errors::{LabelError, LabelResult};

/// Reflows `text` so that no line exceeds `columns` characters.
///
/// Quote and parenthesis characters are stripped before wrapping. Words are
/// wrapped greedily; a single token longer than `columns` is emitted on its
/// own line rather than split mid-word. The output contains no trailing
/// newline and no line begins with whitespace.
///
/// Returns `LabelError::InvalidInput` if `columns` is zero.
pub fn format_label(text: &str, columns: usize) -> LabelResult<String> {
    if columns == 0 {
        return Err(LabelError::invalid_input(
            "columns must be positive for caption formatting",
        ));
    }

    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '(' | ')'))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in stripped.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= columns {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines.join("\n"))
}
