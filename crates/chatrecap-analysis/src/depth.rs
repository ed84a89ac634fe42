use chatrecap_analysis_util::mean;
use chatrecap_report_types::{ConversationTurns, DeepDiveIndex, DepthDistribution};
use chatrecap_types::Archive;

const TOP_DEEP_LIMIT: usize = 5;

/// Turn-count distribution over conversations with at least one user turn.
pub fn build_deep_dive_index(archive: &Archive) -> DeepDiveIndex {
    let mut rows: Vec<ConversationTurns> = archive
        .conversations
        .iter()
        .filter_map(|conv| {
            let turns = conv.user_turns();
            (turns > 0).then(|| ConversationTurns {
                conversation_id: conv.id_or_empty().to_string(),
                title: conv.title.clone(),
                turns,
            })
        })
        .collect();

    let turn_counts: Vec<usize> = rows.iter().map(|r| r.turns).collect();
    let mut distribution = DepthDistribution::default();
    for &turns in &turn_counts {
        match turns {
            1..=2 => distribution.shallow_1_2_turns += 1,
            3..=9 => distribution.medium_3_9_turns += 1,
            _ => distribution.deep_10plus_turns += 1,
        }
    }

    // Stable: equal turn counts keep archive order.
    rows.sort_by(|a, b| b.turns.cmp(&a.turns));
    rows.truncate(TOP_DEEP_LIMIT);

    DeepDiveIndex {
        total_conversations: turn_counts.len(),
        average_turns: mean(&turn_counts, 1),
        distribution,
        max_turns: turn_counts.iter().copied().max().unwrap_or(0),
        top_deep_conversations: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrecap_types::{Conversation, Message};

    fn with_turns(id: &str, turns: usize) -> Conversation {
        Conversation {
            id: Some(id.to_string()),
            messages: (0..turns).map(|i| Message::user(format!("q{i}"))).collect(),
            ..Conversation::default()
        }
    }

    #[test]
    fn buckets_follow_turn_ranges() {
        let archive = Archive::new(vec![
            with_turns("a", 1),
            with_turns("b", 2),
            with_turns("c", 3),
            with_turns("d", 9),
            with_turns("e", 10),
            with_turns("f", 0),
        ]);
        let index = build_deep_dive_index(&archive);
        assert_eq!(index.total_conversations, 5);
        assert_eq!(index.distribution.shallow_1_2_turns, 2);
        assert_eq!(index.distribution.medium_3_9_turns, 2);
        assert_eq!(index.distribution.deep_10plus_turns, 1);
        assert_eq!(index.max_turns, 10);
        assert_eq!(index.average_turns, 5.0);
    }

    #[test]
    fn top_list_is_capped_and_stable() {
        let archive = Archive::new(vec![
            with_turns("a", 2),
            with_turns("b", 4),
            with_turns("c", 2),
            with_turns("d", 4),
            with_turns("e", 1),
            with_turns("f", 2),
        ]);
        let ids: Vec<String> = build_deep_dive_index(&archive)
            .top_deep_conversations
            .into_iter()
            .map(|r| r.conversation_id)
            .collect();
        assert_eq!(ids, vec!["b", "d", "a", "c", "f"]);
    }

    #[test]
    fn missing_title_stays_absent() {
        let archive = Archive::new(vec![with_turns("a", 1)]);
        let index = build_deep_dive_index(&archive);
        assert_eq!(index.top_deep_conversations[0].title, None);
    }
}
