/// Hits beyond this many add nothing to a dimension.
pub const SATURATION: usize = 2;

pub const SHORT_MESSAGE_WORDS: usize = 15;
pub const MEDIUM_MESSAGE_WORDS: usize = 30;

/// Number of distinct phrases that occur anywhere in `text`. Callers pass
/// lower-cased text; no word boundaries are enforced.
pub fn count_hits(text: &str, patterns: &[&str]) -> usize {
    patterns
        .iter()
        .filter(|phrase| !phrase.is_empty() && text.contains(*phrase))
        .count()
}

/// 0 hits -> 0, 1 hit -> 50, 2 or more -> 100.
pub fn normalize(raw: usize) -> u32 {
    (raw.min(SATURATION) * 100 / SATURATION) as u32
}

pub fn weighted_score(parts: &[(u32, f64)]) -> u32 {
    let sum: f64 = parts
        .iter()
        .map(|(score, weight)| *score as f64 * weight)
        .sum();
    if sum.is_nan() {
        return 0;
    }
    sum.round().clamp(0.0, 100.0) as u32
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn simplicity_score(words: usize) -> u32 {
    if words <= SHORT_MESSAGE_WORDS {
        100
    } else if words <= MEDIUM_MESSAGE_WORDS {
        50
    } else {
        0
    }
}
