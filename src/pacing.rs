// @module: Pause and reading-duration model

/// Average reading speed assumption, seconds per word
const SECONDS_PER_WORD: f64 = 0.4;

/// Minimum on-screen time for a cue in seconds, so one-word cues stay readable
const MIN_READING_DURATION: f64 = 2.0;

/// Length thresholds (in characters) that lengthen the trailing pause
const LONG_TEXT_THRESHOLD: usize = 80;
const VERY_LONG_TEXT_THRESHOLD: usize = 120;

/// Terminal punctuation that signals a natural pause in speech
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PausePunctuation {
    Period,
    Exclamation,
    Question,
    Semicolon,
    Colon,
    Comma,
}

impl PausePunctuation {
    /// Classify a terminal character, `None` for anything outside the closed set
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Period),
            '!' => Some(Self::Exclamation),
            '?' => Some(Self::Question),
            ';' => Some(Self::Semicolon),
            ':' => Some(Self::Colon),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }

    /// Base pause duration in seconds for this mark
    pub fn base_pause(&self) -> f64 {
        match self {
            Self::Period => 1.0,
            Self::Exclamation => 0.8,
            Self::Question => 0.8,
            Self::Semicolon => 0.6,
            Self::Colon => 0.4,
            Self::Comma => 0.3,
        }
    }
}

/// Pause duration following a piece of spoken text.
///
/// The base pause comes from the last non-whitespace character; unmapped
/// characters fall back to `min_pause`. Longer texts earn a longer pause,
/// applying the highest matching length bracket only (>120 chars adds
/// 0.4s, else >80 chars adds 0.2s — the brackets never stack). The result
/// is floored at `min_pause`.
pub fn pause_after(text: &str, min_pause: f64) -> f64 {
    let last_char = match text.trim_end().chars().last() {
        Some(ch) => ch,
        None => return min_pause,
    };

    let base_pause = PausePunctuation::from_char(last_char)
        .map(|p| p.base_pause())
        .unwrap_or(min_pause);

    let char_count = text.chars().count();
    let length_bonus = if char_count > VERY_LONG_TEXT_THRESHOLD {
        0.4
    } else if char_count > LONG_TEXT_THRESHOLD {
        0.2
    } else {
        0.0
    };

    (base_pause + length_bonus).max(min_pause)
}

/// Estimated time to read text aloud, from word count at a fixed speech rate
pub fn reading_duration(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    (words as f64 * SECONDS_PER_WORD).max(MIN_READING_DURATION)
}
