use chatrecap_keywords::KeywordEngine;
use chatrecap_report_types::KeywordReport;
use chatrecap_types::{Archive, Message};

/// Non-empty user texts joined by single spaces, in archive order.
pub fn user_corpus<'a>(messages: impl IntoIterator<Item = &'a Message>) -> String {
    messages
        .into_iter()
        .filter(|m| m.is_user() && !m.text.is_empty())
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn build_keyword_report(archive: &Archive, engine: &KeywordEngine) -> KeywordReport {
    let corpus = user_corpus(archive.messages());
    tracing::trace!(chars = corpus.chars().count(), "keyword corpus assembled");
    engine.corpus_keywords(&corpus)
}
