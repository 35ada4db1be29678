//! Text helpers shared by the query layer and CLI output.
//!
//! Post bodies are markdown. Word counts and reading times are computed over
//! the rendered text only (via `pulldown-cmark`), so link targets and
//! emphasis markers don't inflate the estimate.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Default reading speed used by reading-time estimates.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Flatten markdown to its visible text, block boundaries become spaces.
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            // Inline spans close mid-sentence
            Event::End(
                TagEnd::Emphasis
                | TagEnd::Strong
                | TagEnd::Strikethrough
                | TagEnd::Link
                | TagEnd::Image,
            ) => {}
            Event::SoftBreak | Event::HardBreak | Event::End(_) => out.push(' '),
            _ => {}
        }
    }
    out
}

/// Number of whitespace-separated words in the rendered markdown.
pub fn word_count(markdown: &str) -> usize {
    plain_text(markdown).split_whitespace().count()
}

/// Estimated minutes to read `markdown`, rounded up, never less than one.
pub fn reading_time(markdown: &str, words_per_minute: u32) -> u32 {
    let wpm = words_per_minute.max(1) as usize;
    let minutes = word_count(markdown).div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// First character of each word: "Alex Morgan" → "AM".
///
/// Used as an avatar/cover placeholder when no image is configured.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Truncate to `max` characters, appending `...` if truncated.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
