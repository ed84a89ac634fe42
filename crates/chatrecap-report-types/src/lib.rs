//! # chatrecap-report-types
//!
//! **Tier 0 (Report Contract)**
//!
//! Pure data structures for the aggregate report. No I/O or business logic.
//! Field names are the wire contract read verbatim by downstream consumers.
//!
//! ## What belongs here
//! * One struct per analysis pass, plus [`Report`] and [`ReportMetadata`]
//! * Classification enums (persona type, keyword language)
//! * Display tables shared by several passes (weekday names)
//!
//! ## What does NOT belong here
//! * Analysis computation logic (use `chatrecap-analysis`)
//! * File I/O

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Version string written into [`ReportMetadata::version`].
pub const REPORT_VERSION: &str = "1.0";

/// Top-level keys of a serialized [`Report`], in output order.
pub const REPORT_KEYS: [&str; 11] = [
    "summary_stats",
    "brain_activity_heatmap",
    "keywords",
    "deep_dive_index",
    "directors_ratio",
    "linguistic_profile",
    "marathon_session",
    "monthly_focus",
    "politeness_score",
    "persona_badge",
    "metadata",
];

/// Weekday display names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Display name for a weekday index (Monday = 0). Out-of-range indices wrap.
pub fn weekday_name(weekday: u8) -> &'static str {
    WEEKDAY_NAMES[usize::from(weekday) % WEEKDAY_NAMES.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary_stats: SummaryStats,
    pub brain_activity_heatmap: ActivityHeatmap,
    pub keywords: KeywordReport,
    pub deep_dive_index: DeepDiveIndex,
    pub directors_ratio: DirectorsRatio,
    pub linguistic_profile: LinguisticProfile,
    pub marathon_session: Option<MarathonSession>,
    pub monthly_focus: Vec<MonthlyFocus>,
    pub politeness_score: PolitenessScore,
    pub persona_badge: PersonaBadge,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// RFC 3339 timestamp of report generation.
    pub generated_at: String,
    pub total_conversations_analyzed: usize,
    pub version: String,
}

// -----------------
// Basic statistics
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_conversations: usize,
    /// Number of user-authored messages.
    pub total_messages: usize,
    pub total_user_characters: usize,
    pub total_assistant_characters: usize,
    pub total_hours_span: f64,
    pub most_active_date: ActiveDate,
    pub most_active_hour: ActiveHour,
    pub books_equivalent: BooksEquivalent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDate {
    /// `YYYY-MM-DD`, or `None` when no conversation carries a timestamp.
    pub date: Option<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveHour {
    pub hour: Option<u8>,
    pub count: usize,
}

/// Assistant output expressed in books of a known size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooksEquivalent {
    pub three_body_problem: f64,
    pub harry_potter: f64,
    pub little_prince: f64,
}

// -----------------
// Activity heatmap
// -----------------

/// One non-empty heatmap cell, serialized as `[hour, weekday, count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell(pub u8, pub u8, pub usize);

impl HeatmapCell {
    pub fn hour(&self) -> u8 {
        self.0
    }

    pub fn weekday(&self) -> u8 {
        self.1
    }

    pub fn count(&self) -> usize {
        self.2
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    /// Non-zero cells in first-seen order.
    pub heatmap_data: Vec<HeatmapCell>,
    /// All 24 hours, zero-filled.
    pub hour_distribution: BTreeMap<u8, usize>,
    pub weekday_distribution: WeekdayDistribution,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayDistribution {
    #[serde(rename = "Monday")]
    pub monday: usize,
    #[serde(rename = "Tuesday")]
    pub tuesday: usize,
    #[serde(rename = "Wednesday")]
    pub wednesday: usize,
    #[serde(rename = "Thursday")]
    pub thursday: usize,
    #[serde(rename = "Friday")]
    pub friday: usize,
    #[serde(rename = "Saturday")]
    pub saturday: usize,
    #[serde(rename = "Sunday")]
    pub sunday: usize,
}

impl WeekdayDistribution {
    pub fn from_counts(counts: [usize; 7]) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = counts;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }

    pub fn counts(&self) -> [usize; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }

    pub fn total(&self) -> usize {
        self.counts().iter().sum()
    }
}

// -----------------
// Keywords
// -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordLanguage {
    Zh,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub frequency: u64,
    pub language: KeywordLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub top_keywords: Vec<KeywordEntry>,
    /// Distinct words across every tier, before truncation.
    pub total_unique_keywords: usize,
}

// -----------------
// Engagement depth
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepDiveIndex {
    pub total_conversations: usize,
    pub average_turns: f64,
    pub distribution: DepthDistribution,
    pub max_turns: usize,
    pub top_deep_conversations: Vec<ConversationTurns>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthDistribution {
    pub shallow_1_2_turns: usize,
    pub medium_3_9_turns: usize,
    pub deep_10plus_turns: usize,
}

impl DepthDistribution {
    pub fn total(&self) -> usize {
        self.shallow_1_2_turns + self.medium_3_9_turns + self.deep_10plus_turns
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurns {
    pub conversation_id: String,
    pub title: Option<String>,
    pub turns: usize,
}

// -----------------
// Input/output ratio
// -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonaType {
    #[serde(rename = "learner")]
    Learner,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "co-creator")]
    CoCreator,
}

impl PersonaType {
    pub fn description(self) -> &'static str {
        match self {
            PersonaType::Learner => "You absorb a lot of information; an active learner.",
            PersonaType::Balanced => "Your exchanges with the AI are fairly balanced.",
            PersonaType::CoCreator => {
                "You bring a lot of your own context; it looks more like co-creating with the AI."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorsRatio {
    pub input_chars: usize,
    pub output_chars: usize,
    pub ratio: f64,
    pub ratio_display: String,
    pub persona_type: PersonaType,
    pub description: String,
}

// -----------------
// Language mix
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticProfile {
    pub total_messages_analyzed: usize,
    pub language_counts: BTreeMap<String, usize>,
    pub language_percentages: BTreeMap<String, f64>,
    /// Plurality language tag, or `"unknown"` when nothing was analyzed.
    pub primary_language: String,
    /// Percentages keyed by display name for known tags, raw tag otherwise.
    pub language_display: BTreeMap<String, f64>,
}

// -----------------
// Marathon session
// -----------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarathonSession {
    pub title: String,
    pub date: String,
    pub turns: usize,
    pub conversation_id: String,
}

// -----------------
// Monthly focus
// -----------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFocus {
    /// `YYYY-MM`.
    pub month: String,
    pub top_keywords: Vec<String>,
    pub conversation_count: usize,
}

// -----------------
// Politeness
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolitenessScore {
    pub please_count: usize,
    pub thank_you_count: usize,
    pub help_count: usize,
    pub total_polite_usage: usize,
    pub total_messages: usize,
    pub politeness_percentage: f64,
    pub evaluation: String,
}

// -----------------
// Persona badges
// -----------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorableMoment {
    pub hour: u8,
    pub weekday: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaBadge {
    pub badges: Vec<Badge>,
    pub late_night_count: usize,
    pub early_morning_count: usize,
    pub weekend_count: usize,
    pub memorable_moment: Option<MemorableMoment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatmap_cell_serializes_as_triple() {
        let json = serde_json::to_string(&HeatmapCell(3, 6, 9)).unwrap();
        assert_eq!(json, "[3,6,9]");
    }

    #[test]
    fn persona_type_uses_hyphenated_label() {
        let json = serde_json::to_string(&PersonaType::CoCreator).unwrap();
        assert_eq!(json, "\"co-creator\"");
    }

    #[test]
    fn weekday_distribution_keys_are_display_names() {
        let dist = WeekdayDistribution::from_counts([1, 0, 0, 0, 0, 2, 3]);
        let value = serde_json::to_value(&dist).unwrap();
        assert_eq!(value["Monday"], 1);
        assert_eq!(value["Sunday"], 3);
        assert_eq!(dist.total(), 6);
    }

    #[test]
    fn weekday_name_is_monday_first() {
        assert_eq!(weekday_name(0), "Monday");
        assert_eq!(weekday_name(6), "Sunday");
    }
}
