use chatrecap_analysis_util::{Clock, LocalStamp};
use chatrecap_types::{Archive, Conversation};

/// Conversations whose timestamp maps to a calendar position, in archive order.
pub(crate) fn stamped<'a>(
    archive: &'a Archive,
    clock: &'a Clock,
) -> impl Iterator<Item = (&'a Conversation, f64, LocalStamp)> + 'a {
    archive.conversations.iter().filter_map(move |conv| {
        let secs = conv.created_at?;
        let stamp = clock.stamp(secs)?;
        Some((conv, secs, stamp))
    })
}
