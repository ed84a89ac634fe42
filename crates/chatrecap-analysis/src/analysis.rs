use anyhow::{Context, Result};
use chatrecap_analysis_util::Clock;
use chatrecap_keywords::KeywordEngine;
use chatrecap_lang::LanguageDetector;
use chatrecap_report_types::{REPORT_VERSION, Report, ReportMetadata};
use chatrecap_types::Archive;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::depth::build_deep_dive_index;
use crate::heatmap::build_activity_heatmap;
use crate::keywords::build_keyword_report;
use crate::linguistic::build_linguistic_profile;
use crate::marathon::build_marathon_session;
use crate::monthly::build_monthly_focus;
use crate::persona::build_persona_badge;
use crate::politeness::build_politeness_score;
use crate::ratio::build_directors_ratio;
use crate::summary::build_summary_stats;

/// Everything a run needs besides the archive itself.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    pub clock: Clock,
    pub keywords: KeywordEngine,
    pub language: LanguageDetector,
}

impl AnalysisContext {
    /// Context with every optional backend switched off.
    pub fn baseline(clock: Clock) -> Self {
        Self {
            clock,
            keywords: KeywordEngine::pattern_only(),
            language: LanguageDetector::heuristic_only(),
        }
    }
}

/// The analysis passes, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    SummaryStats,
    ActivityHeatmap,
    Keywords,
    DeepDive,
    DirectorsRatio,
    LinguisticProfile,
    MarathonSession,
    MonthlyFocus,
    Politeness,
    PersonaBadge,
}

impl Pass {
    pub const ALL: [Pass; 10] = [
        Pass::SummaryStats,
        Pass::ActivityHeatmap,
        Pass::Keywords,
        Pass::DeepDive,
        Pass::DirectorsRatio,
        Pass::LinguisticProfile,
        Pass::MarathonSession,
        Pass::MonthlyFocus,
        Pass::Politeness,
        Pass::PersonaBadge,
    ];

    /// Report key the pass writes.
    pub const fn key(self) -> &'static str {
        match self {
            Pass::SummaryStats => "summary_stats",
            Pass::ActivityHeatmap => "brain_activity_heatmap",
            Pass::Keywords => "keywords",
            Pass::DeepDive => "deep_dive_index",
            Pass::DirectorsRatio => "directors_ratio",
            Pass::LinguisticProfile => "linguistic_profile",
            Pass::MarathonSession => "marathon_session",
            Pass::MonthlyFocus => "monthly_focus",
            Pass::Politeness => "politeness_score",
            Pass::PersonaBadge => "persona_badge",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Pass::SummaryStats => "summary statistics",
            Pass::ActivityHeatmap => "activity heatmap",
            Pass::Keywords => "keywords",
            Pass::DeepDive => "conversation depth",
            Pass::DirectorsRatio => "input/output ratio",
            Pass::LinguisticProfile => "language mix",
            Pass::MarathonSession => "longest conversation",
            Pass::MonthlyFocus => "monthly focus",
            Pass::Politeness => "politeness",
            Pass::PersonaBadge => "persona badges",
        }
    }

    /// 1-based position in [`Pass::ALL`].
    pub fn step(self) -> usize {
        Pass::ALL.iter().position(|p| *p == self).map_or(0, |i| i + 1)
    }
}

/// Receives a callback as each pass starts.
pub trait PassObserver {
    fn pass_started(&self, pass: Pass);
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PassObserver for NoopObserver {
    fn pass_started(&self, _pass: Pass) {}
}

impl<F: Fn(Pass)> PassObserver for F {
    fn pass_started(&self, pass: Pass) {
        self(pass)
    }
}

pub fn analyze(archive: &Archive, ctx: &AnalysisContext) -> Result<Report> {
    analyze_with_observer(archive, ctx, &NoopObserver)
}

/// Runs every pass in order and attaches the metadata block.
///
/// The ratio pass reads the summary pass and the badge pass reads the
/// heatmap, so the order of [`Pass::ALL`] is load-bearing.
pub fn analyze_with_observer(
    archive: &Archive,
    ctx: &AnalysisContext,
    observer: &dyn PassObserver,
) -> Result<Report> {
    let start = |pass: Pass| {
        tracing::debug!("[{}/{}] {}", pass.step(), Pass::ALL.len(), pass.label());
        observer.pass_started(pass);
    };

    start(Pass::SummaryStats);
    let summary_stats = build_summary_stats(archive, &ctx.clock);

    start(Pass::ActivityHeatmap);
    let brain_activity_heatmap = build_activity_heatmap(archive, &ctx.clock);

    start(Pass::Keywords);
    let keywords = build_keyword_report(archive, &ctx.keywords);

    start(Pass::DeepDive);
    let deep_dive_index = build_deep_dive_index(archive);

    start(Pass::DirectorsRatio);
    let directors_ratio = build_directors_ratio(&summary_stats);

    start(Pass::LinguisticProfile);
    let linguistic_profile = build_linguistic_profile(archive, &ctx.language);

    start(Pass::MarathonSession);
    let marathon_session = build_marathon_session(archive, &ctx.clock);

    start(Pass::MonthlyFocus);
    let monthly_focus = build_monthly_focus(archive, &ctx.clock, &ctx.keywords);

    start(Pass::Politeness);
    let politeness_score = build_politeness_score(archive);

    start(Pass::PersonaBadge);
    let persona_badge = build_persona_badge(&brain_activity_heatmap);

    let generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("failed to format report timestamp")?;

    Ok(Report {
        summary_stats,
        brain_activity_heatmap,
        keywords,
        deep_dive_index,
        directors_ratio,
        linguistic_profile,
        marathon_session,
        monthly_focus,
        politeness_score,
        persona_badge,
        metadata: ReportMetadata {
            generated_at,
            total_conversations_analyzed: archive.len(),
            version: REPORT_VERSION.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn pass_keys_follow_report_key_order() {
        let keys: Vec<&str> = Pass::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, chatrecap_report_types::REPORT_KEYS[..10].to_vec());
    }

    #[test]
    fn steps_are_one_based() {
        assert_eq!(Pass::SummaryStats.step(), 1);
        assert_eq!(Pass::PersonaBadge.step(), 10);
    }

    #[test]
    fn observer_sees_every_pass_in_order() {
        let seen = RefCell::new(Vec::new());
        let observer = |pass: Pass| seen.borrow_mut().push(pass);
        analyze_with_observer(&Archive::default(), &AnalysisContext::baseline(Clock::utc()), &observer)
            .unwrap();
        assert_eq!(seen.into_inner(), Pass::ALL.to_vec());
    }

    #[test]
    fn metadata_is_stamped() {
        let report = analyze(&Archive::default(), &AnalysisContext::baseline(Clock::utc())).unwrap();
        assert_eq!(report.metadata.version, "1.0");
        assert_eq!(report.metadata.total_conversations_analyzed, 0);
        assert!(report.metadata.generated_at.ends_with('Z'));
    }
}
