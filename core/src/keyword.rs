use std::collections::HashSet;

/// Characters stripped from the end of a token before the letter test.
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', '?', ':', ';', '!'];

/// Words that are never indexed, stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

/// Turns a raw token into a keyword: trim, lowercase, strip trailing punctuation,
/// then require letters only and reject noise words.
///
/// Punctuation is only removed from the end of the token, so `"e.g."` keeps its
/// inner dot and is rejected. A token that reduces to the empty string is rejected.
pub fn normalize(token: &str, noise_words: &NoiseWords) -> Option<String> {
    let lowered = token.trim().to_lowercase();
    let stripped = lowered.trim_end_matches(TRAILING_PUNCTUATION);
    if stripped.is_empty() || !stripped.chars().all(char::is_alphabetic) {
        return None;
    }
    if noise_words.contains(stripped) {
        return None;
    }
    Some(stripped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn noise() -> NoiseWords { ["the", "is"].into_iter().collect() }

    #[rstest]
    #[case("Cat.", Some("cat"))]
    #[case("cat,", Some("cat"))]
    #[case("  Dog!  ", Some("dog"))]
    #[case("WHAT?!?", Some("what"))]
    #[case("end;:", Some("end"))]
    #[case("e.g.", None)]
    #[case("can't", None)]
    #[case("cat1", None)]
    #[case("\"quoted\"", None)]
    #[case("The", None)]
    #[case("is.", None)]
    #[case("", None)]
    #[case("...", None)]
    #[case("!", None)]
    fn normalizes_tokens(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize(raw, &noise()).as_deref(), expected);
    }

    #[test]
    fn keywords_are_fixed_points() {
        let noise = noise();
        for raw in ["Hello!", "WORLD.,", "Über?", "rust"] {
            let kw = normalize(raw, &noise).unwrap();
            assert_eq!(normalize(&kw, &noise).as_deref(), Some(kw.as_str()));
        }
    }

    #[test]
    fn accepts_non_ascii_letters() {
        assert_eq!(normalize("Café.", &NoiseWords::new()).as_deref(), Some("café"));
    }
}
