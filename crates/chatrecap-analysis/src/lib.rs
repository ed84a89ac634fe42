//! # chatrecap-analysis
//!
//! **Tier 3 (Analysis passes)**
//!
//! Walks a loaded [`Archive`](chatrecap_types::Archive) and computes the ten
//! passes of a chatrecap report. Each pass is a pure `build_*` function over
//! the archive (or over an earlier pass's output); [`analyze`] runs them in
//! a fixed order and stamps the metadata block.
//!
//! Optional NLP backends are forwarded as Cargo features (`tfidf`,
//! `tokenizer`, `langdetect`) and narrowed at run time through
//! [`AnalysisContext`].

mod analysis;
mod depth;
mod heatmap;
mod keywords;
mod linguistic;
mod marathon;
mod monthly;
mod persona;
mod politeness;
mod ratio;
mod summary;
mod timeline;

pub use analysis::{
    AnalysisContext, NoopObserver, Pass, PassObserver, analyze, analyze_with_observer,
};
pub use depth::build_deep_dive_index;
pub use heatmap::build_activity_heatmap;
pub use keywords::{build_keyword_report, user_corpus};
pub use linguistic::{MIN_ANALYZED_CHARS, build_linguistic_profile};
pub use marathon::{UNKNOWN_DATE, UNTITLED_CONVERSATION, build_marathon_session};
pub use monthly::build_monthly_focus;
pub use persona::build_persona_badge;
pub use politeness::build_politeness_score;
pub use ratio::build_directors_ratio;
pub use summary::build_summary_stats;
