use once_cell::sync::Lazy;
use regex::Regex;

/// Regex patterns compiled once
static PATTERNS: Lazy<CleanerPatterns> = Lazy::new(CleanerPatterns::new);

struct CleanerPatterns {
    // URLs (http... / www... tokens)
    url: Regex,

    // @handle mentions
    handle: Regex,

    // Everything that is neither a word character nor whitespace.
    // `\w` is Unicode-aware, so Devanagari and Bengali letters survive
    // while punctuation and emoji are stripped.
    symbols: Regex,

    // Cleanup
    multi_space: Regex,
}

impl CleanerPatterns {
    fn new() -> Self {
        Self {
            url: Regex::new(r"http\S+|www\S+").unwrap(),
            handle: Regex::new(r"@\w+").unwrap(),
            symbols: Regex::new(r"[^\w\s]").unwrap(),
            multi_space: Regex::new(r"\s+").unwrap(),
        }
    }
}

/// Scrubs social-media noise out of labeled text samples.
pub struct TextCleaner;

impl TextCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Cleans a single text sample. Returns an empty string when nothing
    /// but noise was present.
    pub fn clean(&self, text: &str) -> String {
        // 1. Remove URLs
        let mut result = PATTERNS.url.replace_all(text, "").to_string();

        // 2. Remove @handles
        result = PATTERNS.handle.replace_all(&result, "").to_string();

        // 3. Remove punctuation, symbols and emoji
        result = PATTERNS.symbols.replace_all(&result, "").to_string();

        // 4. Normalize whitespace
        result = PATTERNS.multi_space.replace_all(&result, " ").to_string();

        result.trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
