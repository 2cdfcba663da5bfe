use log::debug;

use crate::transcript::normalize_text;

// @module: Display-line text segmentation

/// Punctuation marks that indicate natural break points in speech
const BREAK_PUNCTUATION: [char; 6] = ['.', '!', '?', ';', ':', ','];

/// Safety margin applied to punctuation split candidates. Splitting at
/// 90% of the line limit keeps punctuation-aligned chunks from hugging
/// the limit and overflowing on later wrapping. Fixed design constant,
/// not user-configurable.
const PUNCTUATION_SPLIT_MARGIN: f64 = 0.9;

/// Split text into display-safe chunks of at most `max_chars` characters.
///
/// The splitter prefers punctuation boundaries: every `. ! ? ; : ,` whose
/// trimmed prefix fits within 90% of `max_chars` becomes a cut point. When
/// no punctuation candidate exists the text falls back to greedy word-wrap.
/// Chunks produced by the punctuation path are not length-checked again, so
/// with very sparse punctuation they may exceed `max_chars`.
///
/// Empty or whitespace-only input yields an empty sequence; no chunk is
/// ever empty.
pub fn segment(text: &str, max_chars: usize) -> Vec<String> {
    let text = normalize_text(text);
    if text.is_empty() {
        return Vec::new();
    }

    if text.chars().count() <= max_chars {
        return vec![text];
    }

    let margin_chars = (max_chars as f64 * PUNCTUATION_SPLIT_MARGIN) as usize;
    let char_count = text.chars().count();

    // Collect byte offsets immediately after each accepted punctuation mark.
    // A mark at the very end of the text is never a candidate.
    let mut split_points: Vec<usize> = Vec::new();
    for (position, (byte_index, ch)) in text.char_indices().enumerate() {
        if BREAK_PUNCTUATION.contains(&ch) && position < char_count - 1 {
            let after_mark = byte_index + ch.len_utf8();
            let prefix = text[..after_mark].trim();
            if prefix.chars().count() <= margin_chars {
                split_points.push(after_mark);
            }
        }
    }

    if split_points.is_empty() {
        debug!(
            "No punctuation split points within margin for {} chars, using word wrap",
            char_count
        );
        return word_wrap(&text, max_chars);
    }

    // Cut at every accepted candidate, then keep the trailing remainder
    let mut chunks = Vec::with_capacity(split_points.len() + 1);
    let mut start = 0;
    for point in split_points {
        let piece = text[start..point].trim();
        if !piece.is_empty() {
            chunks.push(piece.to_string());
        }
        start = point;
    }

    if start < text.len() {
        let remaining = text[start..].trim();
        if !remaining.is_empty() {
            chunks.push(remaining.to_string());
        }
    }

    chunks
}

/// Greedy word-wrap fallback for text without usable punctuation.
///
/// Words are accumulated with single spaces while the line stays within
/// `max_chars`; a word longer than `max_chars` sits alone on its own line
/// and is never split mid-word.
fn word_wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
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

    lines
}
