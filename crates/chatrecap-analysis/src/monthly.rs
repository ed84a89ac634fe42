use std::collections::{BTreeMap, HashSet};

use chatrecap_analysis_util::Clock;
use chatrecap_keywords::KeywordEngine;
use chatrecap_report_types::MonthlyFocus;
use chatrecap_types::Archive;

use crate::timeline::stamped;

/// Per-month topics, oldest month first.
///
/// A month is listed only when it holds some non-empty user text. The
/// conversation count is the number of distinct ids created in that month.
pub fn build_monthly_focus(
    archive: &Archive,
    clock: &Clock,
    engine: &KeywordEngine,
) -> Vec<MonthlyFocus> {
    let mut texts: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    let mut ids: BTreeMap<String, HashSet<Option<&str>>> = BTreeMap::new();

    for (conv, _, stamp) in stamped(archive, clock) {
        let month = stamp.month_label();
        ids.entry(month.clone()).or_default().insert(conv.id.as_deref());

        let parts: Vec<&str> = conv
            .user_messages()
            .filter(|m| !m.text.is_empty())
            .map(|m| m.text.as_str())
            .collect();
        if !parts.is_empty() {
            texts.entry(month).or_default().extend(parts);
        }
    }

    texts
        .into_iter()
        .map(|(month, parts)| {
            let combined = parts.join(" ");
            let conversation_count = ids.get(&month).map_or(0, HashSet::len);
            MonthlyFocus {
                top_keywords: engine.short_topics(&combined),
                month,
                conversation_count,
            }
        })
        .collect()
}
