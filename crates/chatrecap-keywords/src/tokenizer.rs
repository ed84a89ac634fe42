use std::collections::HashSet;

use chatrecap_analysis_util::OrderedCounter;
use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::ENGLISH_STOPWORDS;

/// Word-frequency extraction over Unicode word boundaries.
///
/// Keeps purely alphabetic tokens longer than two characters that are not
/// English stop words.
#[derive(Debug, Clone)]
pub struct TokenizerExtractor {
    stopwords: HashSet<&'static str>,
}

impl Default for TokenizerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerExtractor {
    pub fn new() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    pub fn extract(&self, text: &str, top_k: usize) -> Vec<(String, usize)> {
        let lowered = text.to_lowercase();
        let counter: OrderedCounter<String> = lowered
            .unicode_words()
            .filter(|token| self.keeps(token))
            .map(str::to_string)
            .collect();
        counter.most_common_n(top_k)
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() > 2
            && token.chars().all(char::is_alphabetic)
            && !self.stopwords.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_and_short_tokens_are_dropped() {
        let terms = TokenizerExtractor::new()
            .extract("The borrow checker and the Borrow rules, ok?", 10);
        assert_eq!(
            terms,
            vec![
                ("borrow".to_string(), 2),
                ("checker".to_string(), 1),
                ("rules".to_string(), 1),
            ]
        );
    }

    #[test]
    fn tokens_with_digits_are_dropped() {
        let terms = TokenizerExtractor::new().extract("utf8 tokio2 async", 10);
        assert_eq!(terms, vec![("async".to_string(), 1)]);
    }
}
