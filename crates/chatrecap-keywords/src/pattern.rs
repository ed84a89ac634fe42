use std::sync::LazyLock;

use chatrecap_analysis_util::OrderedCounter;
use regex::Regex;

static CJK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fff}]{2,4}").expect("valid regex literal"));
static LATIN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid regex literal"));

/// Dictionary-free extraction by regular expression.
///
/// CJK text is cut greedily into runs of 2–4 ideographs, each treated as a
/// word; Latin words need at least three letters and are case-folded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    /// Most frequent CJK runs, ties in first-seen order.
    pub fn cjk_words(&self, text: &str, top_k: usize) -> Vec<(String, usize)> {
        CJK_RUN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect::<OrderedCounter<String>>()
            .most_common_n(top_k)
    }

    /// Most frequent lower-cased Latin words, ties in first-seen order.
    pub fn latin_words(&self, text: &str, top_k: usize) -> Vec<(String, usize)> {
        let lowered = text.to_lowercase();
        LATIN_WORD
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect::<OrderedCounter<String>>()
            .most_common_n(top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_cjk_runs_are_cut_greedily() {
        let words = PatternExtractor.cjk_words("人工智能发展", 10);
        assert_eq!(
            words,
            vec![("人工智能".to_string(), 1), ("发展".to_string(), 1)]
        );
    }

    #[test]
    fn single_ideographs_are_ignored() {
        assert!(PatternExtractor.cjk_words("我 你 他", 10).is_empty());
    }

    #[test]
    fn latin_words_are_case_folded_and_need_three_letters() {
        let words = PatternExtractor.latin_words("Rust rust an OK Tokio", 10);
        assert_eq!(
            words,
            vec![("rust".to_string(), 2), ("tokio".to_string(), 1)]
        );
    }

    #[test]
    fn latin_words_glued_to_ideographs_have_no_boundary() {
        assert!(PatternExtractor.latin_words("用rust写", 10).is_empty());
    }
}
