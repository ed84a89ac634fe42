use std::collections::BTreeMap;

use chatrecap_analysis_util::{OrderedCounter, percentage};
use chatrecap_lang::{LanguageDetector, display_name};
use chatrecap_report_types::LinguisticProfile;
use chatrecap_types::Archive;

/// User messages shorter than this after trimming carry too little signal.
pub const MIN_ANALYZED_CHARS: usize = 5;

const UNKNOWN_LANGUAGE: &str = "unknown";

pub fn build_linguistic_profile(archive: &Archive, detector: &LanguageDetector) -> LinguisticProfile {
    let mut tags: OrderedCounter<String> = OrderedCounter::new();

    for message in archive.user_messages() {
        if message.text.trim().chars().count() < MIN_ANALYZED_CHARS {
            continue;
        }
        tags.add(detector.tag(&message.text));
    }

    let analyzed = tags.total();
    let primary_language = tags
        .most_common()
        .map(|(tag, _)| tag.clone())
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

    let mut language_counts = BTreeMap::new();
    let mut language_percentages = BTreeMap::new();
    let mut language_display = BTreeMap::new();
    for (tag, count) in tags.into_entries() {
        let share = percentage(count, analyzed, 1);
        language_display.insert(display_name(&tag).to_string(), share);
        language_percentages.insert(tag.clone(), share);
        language_counts.insert(tag, count);
    }

    LinguisticProfile {
        total_messages_analyzed: analyzed,
        language_counts,
        language_percentages,
        primary_language,
        language_display,
    }
}
