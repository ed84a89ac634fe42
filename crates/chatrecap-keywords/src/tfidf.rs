use jieba_rs::{Jieba, KeywordExtract, TfIdf};

/// TF-IDF keyword extraction over the jieba Chinese segmenter.
///
/// Loading the dictionary is expensive, so build one extractor per run.
pub struct TfIdfExtractor {
    jieba: Jieba,
    tfidf: TfIdf,
}

impl Default for TfIdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfExtractor {
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            tfidf: TfIdf::default(),
        }
    }

    /// Up to `top_k` terms with their TF-IDF weights, highest first.
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<(String, f64)> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.tfidf
            .extract_keywords(&self.jieba, text, top_k, Vec::new())
            .into_iter()
            .map(|keyword| (keyword.keyword, keyword.weight))
            .collect()
    }
}
