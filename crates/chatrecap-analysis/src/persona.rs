use chatrecap_report_types::{ActivityHeatmap, Badge, HeatmapCell, MemorableMoment, PersonaBadge, weekday_name};

const LATE_NIGHT_SHARE: f64 = 0.2;
const EARLY_MORNING_SHARE: f64 = 0.15;
const WEEKEND_SHARE: f64 = 0.3;

fn is_late_night(cell: &HeatmapCell) -> bool {
    (1..=5).contains(&cell.hour())
}

fn is_early_morning(cell: &HeatmapCell) -> bool {
    (5..8).contains(&cell.hour())
}

fn is_weekend(cell: &HeatmapCell) -> bool {
    cell.weekday() >= 5
}

fn sum_where(cells: &[HeatmapCell], pred: impl Fn(&HeatmapCell) -> bool) -> usize {
    cells.iter().filter(|&c| pred(c)).map(HeatmapCell::count).sum()
}

fn exceeds(count: usize, total: usize, share: f64) -> bool {
    count as f64 > total as f64 * share
}

/// Behavioural badges derived from the heatmap pass.
///
/// Hour 5 counts as both late night and early morning.
pub fn build_persona_badge(heatmap: &ActivityHeatmap) -> PersonaBadge {
    let cells = &heatmap.heatmap_data;
    let total = sum_where(cells, |_| true);
    let late_night_count = sum_where(cells, is_late_night);
    let early_morning_count = sum_where(cells, is_early_morning);
    let weekend_count = sum_where(cells, is_weekend);

    let mut badges = Vec::new();
    if exceeds(late_night_count, total, LATE_NIGHT_SHARE) {
        badges.push(Badge {
            name: "Night Philosopher".to_string(),
            description: format!(
                "{late_night_count} conversations between 1 and 5 a.m.; a late-night thinker."
            ),
        });
    }
    if exceeds(early_morning_count, total, EARLY_MORNING_SHARE) {
        badges.push(Badge {
            name: "Early Bird".to_string(),
            description: format!(
                "{early_morning_count} conversations between 5 and 8 a.m.; up before everyone else."
            ),
        });
    }
    if exceeds(weekend_count, total, WEEKEND_SHARE) {
        badges.push(Badge {
            name: "Weekend Grinder".to_string(),
            description: format!(
                "{weekend_count} conversations on weekends; still working and learning on days off."
            ),
        });
    }
    if badges.is_empty() {
        badges.push(Badge {
            name: "Steady Regular".to_string(),
            description: "Your usage follows a steady, regular rhythm.".to_string(),
        });
    }

    let mut memorable: Option<&HeatmapCell> = None;
    for cell in cells.iter().filter(|c| is_late_night(c)) {
        if memorable.is_none_or(|best| cell.count() > best.count()) {
            memorable = Some(cell);
        }
    }

    PersonaBadge {
        badges,
        late_night_count,
        early_morning_count,
        weekend_count,
        memorable_moment: memorable.map(|cell| MemorableMoment {
            hour: cell.hour(),
            weekday: weekday_name(cell.weekday()).to_string(),
            count: cell.count(),
        }),
    }
}
