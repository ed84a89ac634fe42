use chatrecap_analysis_util::Clock;
use chatrecap_report_types::MarathonSession;
use chatrecap_types::{Archive, Conversation};

/// Title used when the marathon conversation has none.
pub const UNTITLED_CONVERSATION: &str = "Untitled conversation";
/// Date used when the marathon conversation has no usable timestamp.
pub const UNKNOWN_DATE: &str = "unknown";

/// The conversation with the most user turns; the earliest wins ties.
pub fn build_marathon_session(archive: &Archive, clock: &Clock) -> Option<MarathonSession> {
    let mut best: Option<(&Conversation, usize)> = None;
    for conv in &archive.conversations {
        let turns = conv.user_turns();
        if turns > best.map_or(0, |(_, top)| top) {
            best = Some((conv, turns));
        }
    }

    best.map(|(conv, turns)| MarathonSession {
        title: conv
            .title
            .clone()
            .unwrap_or_else(|| UNTITLED_CONVERSATION.to_string()),
        date: conv
            .created_at
            .and_then(|secs| clock.stamp(secs))
            .map_or_else(|| UNKNOWN_DATE.to_string(), |stamp| stamp.date_label()),
        turns,
        conversation_id: conv.id_or_empty().to_string(),
    })
}
