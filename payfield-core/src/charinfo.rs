//! Shared character/word/line counting for length-limited text fields.

use crate::types::CharacterInfo;

/// Summarizes `text` against a field's length budget.
///
/// Counts are Unicode-codepoint counts of the raw buffer, not the trimmed
/// view, so the remaining-character hint tracks exactly what the caller holds.
/// `remaining_chars` goes negative once the buffer overruns `max_len`.
pub fn character_info(
    text: &str,
    max_len: usize,
    count_lines: bool,
    near_limit_threshold: i64,
) -> CharacterInfo {
    let character_count = text.chars().count();
    let word_count = if text.trim().is_empty() {
        0
    } else {
        text.split_whitespace().count()
    };
    let line_count = count_lines.then(|| text.split('\n').count());
    let remaining_chars = max_len as i64 - character_count as i64;

    CharacterInfo {
        character_count,
        word_count,
        line_count,
        remaining_chars,
        is_near_limit: remaining_chars <= near_limit_threshold,
    }
}
