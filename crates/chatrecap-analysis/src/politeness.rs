use chatrecap_analysis_util::percentage;
use chatrecap_report_types::PolitenessScore;
use chatrecap_types::Archive;

/// Phrase lists per category. Each inner slice is one language; a message
/// scores once per language whose list it matches.
const PLEASE: &[&[&str]] = &[&["please"], &["请"]];
const THANKS: &[&[&str]] = &[&["thank you", "thanks"], &["谢谢", "感谢"]];
const HELP: &[&[&str]] = &[&["help"], &["帮忙", "帮", "救命"]];

const VERY_POLITE_MIN: f64 = 50.0;
const POLITE_MIN: f64 = 20.0;

fn hits(text: &str, groups: &[&[&str]]) -> usize {
    groups
        .iter()
        .filter(|phrases| phrases.iter().any(|p| text.contains(p)))
        .count()
}

fn evaluation(percentage: f64) -> &'static str {
    if percentage >= VERY_POLITE_MIN {
        "Impeccably courteous; you treat the AI like an honoured guest."
    } else if percentage >= POLITE_MIN {
        "Fairly polite; courtesy words show up now and then."
    } else {
        "A no-nonsense doer who rarely bothers with pleasantries."
    }
}

pub fn build_politeness_score(archive: &Archive) -> PolitenessScore {
    let mut please_count = 0;
    let mut thank_you_count = 0;
    let mut help_count = 0;
    let mut total_messages = 0;

    for message in archive.user_messages() {
        let text = message.text.to_lowercase();
        total_messages += 1;
        please_count += hits(&text, PLEASE);
        thank_you_count += hits(&text, THANKS);
        help_count += hits(&text, HELP);
    }

    let total_polite_usage = please_count + thank_you_count + help_count;
    let politeness_percentage = percentage(total_polite_usage, total_messages, 1);

    PolitenessScore {
        please_count,
        thank_you_count,
        help_count,
        total_polite_usage,
        total_messages,
        politeness_percentage,
        evaluation: evaluation(politeness_percentage).to_string(),
    }
}
