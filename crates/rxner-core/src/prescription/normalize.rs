//! Raw OCR text normalization.

use super::rules::patterns::{BAR_OR_BULLET_RUN, BLANK_RUN, PADDED_NEWLINE};

/// Clean raw OCR text before segmentation.
///
/// Dashes are unified, table bars and bullets become spaces, whitespace
/// around line breaks and inside lines is collapsed, and a standalone
/// capital `O` (a common misread of zero) becomes `0`. The result is
/// trimmed. Applying it twice gives the same text as applying it once.
pub fn normalize_text(text: &str) -> String {
    let text = text.replace(['\u{2013}', '\u{2014}'], "-");
    let text = BAR_OR_BULLET_RUN.replace_all(&text, " ");
    let text = PADDED_NEWLINE.replace_all(&text, "\n");
    let text = BLANK_RUN.replace_all(&text, " ");
    replace_standalone_o(text.trim())
}

/// Replace every `O` that has a space on both sides with `0`.
fn replace_standalone_o(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let padded = i > 0 && chars[i - 1] == ' ' && chars.get(i + 1) == Some(&' ');
            if c == 'O' && padded { '0' } else { c }
        })
        .collect()
}
