//! # chatrecap-lang
//!
//! **Tier 2 (Language tagging)**
//!
//! Assigns a short language tag to a piece of text. A statistical detector
//! (feature `langdetect`) is consulted first; when it is not compiled in,
//! switched off, or cannot decide, a CJK-ratio heuristic answers instead.
//!
//! ## What belongs here
//! * Tag normalization and display names
//! * The heuristic fallback
//!
//! ## What does NOT belong here
//! * Aggregation across messages (see `chatrecap-analysis`)

use chatrecap_analysis_util::cjk_ratio;

/// Tag for Chinese text.
pub const ZH: &str = "zh";
/// Tag for English text.
pub const EN: &str = "en";

/// Share of CJK ideographs above which the heuristic answers [`ZH`].
pub const CJK_THRESHOLD: f64 = 0.3;

/// Tag chosen purely from the share of CJK ideographs.
///
/// The ratio is taken over every character of `text`, whitespace included.
pub fn heuristic_tag(text: &str) -> &'static str {
    if cjk_ratio(text) > CJK_THRESHOLD { ZH } else { EN }
}

/// Human-readable name for the two well-known tags; other tags pass through.
pub fn display_name(tag: &str) -> &str {
    match tag {
        ZH => "Chinese",
        EN => "English",
        other => other,
    }
}

/// Where a tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    Detector,
    Heuristic,
}

/// A language tag for one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub tag: String,
    pub source: TagSource,
}

/// Language tagger with an optional statistical backend.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector {
    #[cfg_attr(not(feature = "langdetect"), allow(dead_code))]
    use_backend: bool,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LanguageDetector {
    /// `use_backend` selects the statistical detector when it was compiled in.
    pub fn new(use_backend: bool) -> Self {
        if use_backend && !cfg!(feature = "langdetect") {
            tracing::warn!(backend = "langdetect", "langdetect backend not compiled in; skipping");
        }
        Self {
            use_backend: use_backend && cfg!(feature = "langdetect"),
        }
    }

    /// Tagger that only ever uses the heuristic.
    pub fn heuristic_only() -> Self {
        Self { use_backend: false }
    }

    pub fn has_backend(&self) -> bool {
        self.use_backend
    }

    pub fn detect(&self, text: &str) -> Detection {
        #[cfg(feature = "langdetect")]
        if self.use_backend {
            match backend::detect(text) {
                Some(tag) => {
                    return Detection {
                        tag,
                        source: TagSource::Detector,
                    };
                }
                None => tracing::trace!("detector undecided; using heuristic"),
            }
        }

        Detection {
            tag: heuristic_tag(text).to_string(),
            source: TagSource::Heuristic,
        }
    }

    /// Shorthand for `detect(text).tag`.
    pub fn tag(&self, text: &str) -> String {
        self.detect(text).tag
    }
}

#[cfg(feature = "langdetect")]
mod backend {
    use whatlang::Lang;

    /// Only guesses whatlang itself marks reliable are kept.
    pub(crate) fn detect(text: &str) -> Option<String> {
        whatlang::detect(text)
            .filter(|info| info.is_reliable())
            .map(|info| normalize(info.lang()))
    }

    /// ISO 639-3 codes shortened to the 639-1 tags used in reports.
    pub(crate) fn normalize(lang: Lang) -> String {
        match lang {
            Lang::Cmn => super::ZH.to_string(),
            Lang::Eng => super::EN.to_string(),
            Lang::Jpn => "ja".to_string(),
            Lang::Kor => "ko".to_string(),
            other => other.code().to_string(),
        }
    }

}
