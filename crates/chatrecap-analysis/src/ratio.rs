use chatrecap_analysis_util::safe_ratio;
use chatrecap_report_types::{DirectorsRatio, PersonaType, SummaryStats};

const LEARNER_MIN_RATIO: f64 = 8.0;
const BALANCED_MIN_RATIO: f64 = 3.0;

/// Assistant output per character of user input. Reads the summary pass.
pub fn build_directors_ratio(summary: &SummaryStats) -> DirectorsRatio {
    let input_chars = summary.total_user_characters;
    let output_chars = summary.total_assistant_characters;
    let ratio = safe_ratio(output_chars, input_chars, 2);

    let persona_type = if ratio >= LEARNER_MIN_RATIO {
        PersonaType::Learner
    } else if ratio >= BALANCED_MIN_RATIO {
        PersonaType::Balanced
    } else {
        PersonaType::CoCreator
    };

    let ratio_display = if input_chars == 0 {
        "1:0".to_string()
    } else {
        format!("1:{ratio:?}")
    };

    DirectorsRatio {
        input_chars,
        output_chars,
        ratio,
        ratio_display,
        persona_type,
        description: persona_type.description().to_string(),
    }
}
