use std::collections::BTreeMap;

use chatrecap_analysis_util::{Clock, OrderedCounter};
use chatrecap_report_types::{ActivityHeatmap, HeatmapCell, WeekdayDistribution};
use chatrecap_types::Archive;

use crate::timeline::stamped;

/// Counts conversations per (hour, weekday) cell of their creation time.
pub fn build_activity_heatmap(archive: &Archive, clock: &Clock) -> ActivityHeatmap {
    let cells: OrderedCounter<(u8, u8)> = stamped(archive, clock)
        .map(|(_, _, stamp)| (stamp.hour, stamp.weekday))
        .collect();

    let mut hours: BTreeMap<u8, usize> = (0..24).map(|h| (h, 0)).collect();
    let mut weekdays = [0usize; 7];
    let mut heatmap_data = Vec::with_capacity(cells.len());

    for ((hour, weekday), count) in cells.into_entries() {
        *hours.entry(hour).or_default() += count;
        weekdays[usize::from(weekday)] += count;
        heatmap_data.push(HeatmapCell(hour, weekday, count));
    }

    ActivityHeatmap {
        heatmap_data,
        hour_distribution: hours,
        weekday_distribution: WeekdayDistribution::from_counts(weekdays),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrecap_types::Conversation;

    fn at(secs: f64) -> Conversation {
        Conversation {
            created_at: Some(secs),
            ..Conversation::default()
        }
    }

    #[test]
    fn cells_keep_first_seen_order() {
        // Saturday 2024-01-06 23:00Z, Monday 2024-01-01 00:00Z, Saturday again.
        let archive = Archive::new(vec![at(1_704_582_000.0), at(1_704_067_200.0), at(1_704_582_000.0)]);
        let heatmap = build_activity_heatmap(&archive, &Clock::utc());
        assert_eq!(
            heatmap.heatmap_data,
            vec![HeatmapCell(23, 5, 2), HeatmapCell(0, 0, 1)]
        );
        assert_eq!(heatmap.weekday_distribution.saturday, 2);
        assert_eq!(heatmap.weekday_distribution.monday, 1);
    }

    #[test]
    fn all_hours_are_present_even_when_empty() {
        let heatmap = build_activity_heatmap(&Archive::default(), &Clock::utc());
        assert_eq!(heatmap.hour_distribution.len(), 24);
        assert!(heatmap.hour_distribution.values().all(|&n| n == 0));
        assert!(heatmap.heatmap_data.is_empty());
    }

    #[test]
    fn offset_shifts_the_bucket() {
        let archive = Archive::new(vec![at(1_704_067_200.0)]);
        let offset = time::UtcOffset::from_hms(8, 0, 0).unwrap();
        let heatmap = build_activity_heatmap(&archive, &Clock::with_offset(offset));
        assert_eq!(heatmap.heatmap_data, vec![HeatmapCell(8, 0, 1)]);
    }
}
