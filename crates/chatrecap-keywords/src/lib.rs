//! # chatrecap-keywords
//!
//! Keyword extraction with graceful degradation across optional backends.
//!
//! Three strategies share one contract (text in, weighted terms out):
//!
//! 1. **TF-IDF** over a Chinese word segmenter (feature `tfidf`).
//! 2. **Tokenizer** with an English stop-word list (feature `tokenizer`).
//! 3. **Pattern** extraction with regular expressions, always available.
//!
//! Which optional backends exist is decided at build time by Cargo
//! features and narrowed at run time by [`KeywordBackends`]. A backend that
//! was requested but not compiled in is logged and skipped. Extraction
//! itself cannot fail: a backend with nothing to say returns an empty list.

mod pattern;
mod stopwords;
#[cfg(feature = "tfidf")]
mod tfidf;
#[cfg(feature = "tokenizer")]
mod tokenizer;

use std::collections::HashSet;
use std::fmt;

use chatrecap_report_types::{KeywordEntry, KeywordLanguage, KeywordReport};

pub use pattern::PatternExtractor;
pub use stopwords::ENGLISH_STOPWORDS;
#[cfg(feature = "tfidf")]
pub use tfidf::TfIdfExtractor;
#[cfg(feature = "tokenizer")]
pub use tokenizer::TokenizerExtractor;

/// Candidates requested from the TF-IDF backend for the corpus report.
pub const TFIDF_TOP_K: usize = 30;
/// Candidates kept per counting strategy (tokenizer, CJK pattern, Latin pattern).
pub const COUNT_TOP_K: usize = 20;
/// Length of the merged keyword list in the report.
pub const REPORT_LIMIT: usize = 30;
/// Keywords kept per month.
pub const MONTHLY_TOP_K: usize = 3;

/// Optional keyword backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    TfIdf,
    Tokenizer,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::TfIdf => "tfidf",
            Backend::Tokenizer => "tokenizer",
        }
    }

    /// Whether the backend was compiled into this build.
    pub const fn is_compiled(self) -> bool {
        match self {
            Backend::TfIdf => cfg!(feature = "tfidf"),
            Backend::Tokenizer => cfg!(feature = "tokenizer"),
        }
    }
}

/// Run-time selection of optional backends. Selecting a backend that was not
/// compiled in has no effect beyond a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordBackends {
    pub tfidf: bool,
    pub tokenizer: bool,
}

impl Default for KeywordBackends {
    fn default() -> Self {
        Self {
            tfidf: true,
            tokenizer: true,
        }
    }
}

impl KeywordBackends {
    pub const fn none() -> Self {
        Self {
            tfidf: false,
            tokenizer: false,
        }
    }
}

/// The configured chain of keyword strategies.
pub struct KeywordEngine {
    #[cfg(feature = "tfidf")]
    tfidf: Option<TfIdfExtractor>,
    #[cfg(feature = "tokenizer")]
    tokenizer: Option<TokenizerExtractor>,
    pattern: PatternExtractor,
}

impl fmt::Debug for KeywordEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordEngine")
            .field("backends", &self.active_backends())
            .finish()
    }
}

impl Default for KeywordEngine {
    fn default() -> Self {
        Self::new(KeywordBackends::default())
    }
}

impl KeywordEngine {
    pub fn new(selection: KeywordBackends) -> Self {
        for (backend, wanted) in [
            (Backend::TfIdf, selection.tfidf),
            (Backend::Tokenizer, selection.tokenizer),
        ] {
            if wanted && !backend.is_compiled() {
                tracing::warn!(
                    backend = backend.name(),
                    "keyword backend not compiled in; skipping"
                );
            }
        }

        Self {
            #[cfg(feature = "tfidf")]
            tfidf: selection.tfidf.then(TfIdfExtractor::new),
            #[cfg(feature = "tokenizer")]
            tokenizer: selection.tokenizer.then(TokenizerExtractor::new),
            pattern: PatternExtractor,
        }
    }

    /// Engine with only the always-available pattern strategy.
    pub fn pattern_only() -> Self {
        Self::new(KeywordBackends::none())
    }

    /// Optional backends that will actually run.
    pub fn active_backends(&self) -> Vec<Backend> {
        #[cfg_attr(not(any(feature = "tfidf", feature = "tokenizer")), allow(unused_mut))]
        let mut out = Vec::new();
        #[cfg(feature = "tfidf")]
        if self.tfidf.is_some() {
            out.push(Backend::TfIdf);
        }
        #[cfg(feature = "tokenizer")]
        if self.tokenizer.is_some() {
            out.push(Backend::Tokenizer);
        }
        out
    }

    /// Corpus-wide keyword report.
    ///
    /// Every active optional backend contributes candidates; the pattern
    /// strategy runs only when none of them produced anything. Candidates
    /// are merged, sorted by descending frequency (stable), and truncated.
    pub fn corpus_keywords(&self, text: &str) -> KeywordReport {
        let mut candidates: Vec<KeywordEntry> = Vec::new();

        #[cfg(feature = "tfidf")]
        if let Some(tfidf) = &self.tfidf {
            candidates.extend(
                tfidf
                    .extract(text, TFIDF_TOP_K)
                    .into_iter()
                    .filter(|(word, _)| word.chars().count() > 1)
                    .map(|(word, weight)| KeywordEntry {
                        word,
                        frequency: weight_to_frequency(weight),
                        language: KeywordLanguage::Zh,
                    }),
            );
        }

        #[cfg(feature = "tokenizer")]
        if let Some(tokenizer) = &self.tokenizer {
            candidates.extend(counted(
                tokenizer.extract(text, COUNT_TOP_K),
                KeywordLanguage::En,
            ));
        }

        if candidates.is_empty() {
            candidates.extend(counted(
                self.pattern.cjk_words(text, COUNT_TOP_K),
                KeywordLanguage::Zh,
            ));
            candidates.extend(counted(
                self.pattern.latin_words(text, COUNT_TOP_K),
                KeywordLanguage::En,
            ));
        }

        let total_unique_keywords = candidates
            .iter()
            .map(|c| c.word.as_str())
            .collect::<HashSet<_>>()
            .len();
        candidates.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        candidates.truncate(REPORT_LIMIT);

        KeywordReport {
            top_keywords: candidates,
            total_unique_keywords,
        }
    }

    /// Up to [`MONTHLY_TOP_K`] representative words for a short span of text.
    ///
    /// Uses TF-IDF when available, otherwise the most frequent 2–4 character
    /// CJK runs. Latin words are not considered here.
    pub fn short_topics(&self, text: &str) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();

        #[cfg(feature = "tfidf")]
        if let Some(tfidf) = &self.tfidf {
            words.extend(
                tfidf
                    .extract(text, MONTHLY_TOP_K)
                    .into_iter()
                    .map(|(word, _)| word)
                    .filter(|word| word.chars().count() > 1),
            );
        }

        if words.is_empty() {
            words = self
                .pattern
                .cjk_words(text, MONTHLY_TOP_K)
                .into_iter()
                .map(|(word, _)| word)
                .collect();
        }
        words.truncate(MONTHLY_TOP_K);
        words
    }
}

/// TF-IDF weights are scaled to an integer so they sort alongside raw counts.
fn weight_to_frequency(weight: f64) -> u64 {
    (weight * 1000.0) as u64
}

fn counted(terms: Vec<(String, usize)>, language: KeywordLanguage) -> Vec<KeywordEntry> {
    terms
        .into_iter()
        .map(|(word, count)| KeywordEntry {
            word,
            frequency: count as u64,
            language,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_scaling_truncates() {
        assert_eq!(weight_to_frequency(0.4567), 456);
        assert_eq!(weight_to_frequency(0.0), 0);
    }

    #[test]
    fn pattern_only_engine_has_no_optional_backends() {
        assert!(KeywordEngine::pattern_only().active_backends().is_empty());
    }

    #[test]
    fn pattern_fallback_mixes_both_scripts() {
        let engine = KeywordEngine::pattern_only();
        let report = engine.corpus_keywords("rust rust 编程 编程 编程 tokio");
        assert_eq!(report.top_keywords[0].word, "编程");
        assert_eq!(report.top_keywords[0].frequency, 3);
        assert_eq!(report.top_keywords[1].word, "rust");
        assert_eq!(report.total_unique_keywords, 3);
    }

    #[test]
    fn empty_text_yields_empty_report() {
        let report = KeywordEngine::pattern_only().corpus_keywords("");
        assert!(report.top_keywords.is_empty());
        assert_eq!(report.total_unique_keywords, 0);
    }

    #[test]
    fn short_topics_fall_back_to_cjk_runs() {
        let engine = KeywordEngine::pattern_only();
        assert_eq!(
            engine.short_topics("学习 学习 英语 hello hello hello"),
            vec!["学习".to_string(), "英语".to_string()]
        );
    }
}
