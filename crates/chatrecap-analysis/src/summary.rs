use chatrecap_analysis_util::{Clock, OrderedCounter, round_f64};
use chatrecap_report_types::{ActiveDate, ActiveHour, BooksEquivalent, SummaryStats};
use chatrecap_types::{Archive, Role};

use crate::timeline::stamped;

const THREE_BODY_PROBLEM_CHARS: usize = 200_000;
const HARRY_POTTER_CHARS: usize = 100_000;
const LITTLE_PRINCE_CHARS: usize = 20_000;

pub fn build_summary_stats(archive: &Archive, clock: &Clock) -> SummaryStats {
    let mut user_chars = 0usize;
    let mut assistant_chars = 0usize;
    let mut user_messages = 0usize;

    for message in archive.messages() {
        match message.role {
            Role::User => {
                user_chars += message.char_count();
                user_messages += 1;
            }
            Role::Assistant => assistant_chars += message.char_count(),
            Role::Other => {}
        }
    }

    let mut dates: OrderedCounter<String> = OrderedCounter::new();
    let mut hours: OrderedCounter<u8> = OrderedCounter::new();
    let mut earliest = f64::INFINITY;
    let mut latest = f64::NEG_INFINITY;

    for (_, secs, stamp) in stamped(archive, clock) {
        dates.add(stamp.date_label());
        hours.add(stamp.hour);
        earliest = earliest.min(secs);
        latest = latest.max(secs);
    }

    let span_hours = if dates.is_empty() {
        0.0
    } else {
        (latest - earliest) / 3600.0
    };

    let most_active_date = match dates.most_common() {
        Some((date, count)) => ActiveDate {
            date: Some(date.clone()),
            count,
        },
        None => ActiveDate {
            date: None,
            count: 0,
        },
    };
    let most_active_hour = match hours.most_common() {
        Some((hour, count)) => ActiveHour {
            hour: Some(*hour),
            count,
        },
        None => ActiveHour {
            hour: None,
            count: 0,
        },
    };

    SummaryStats {
        total_conversations: archive.len(),
        total_messages: user_messages,
        total_user_characters: user_chars,
        total_assistant_characters: assistant_chars,
        total_hours_span: round_f64(span_hours, 1),
        most_active_date,
        most_active_hour,
        books_equivalent: BooksEquivalent {
            three_body_problem: books(assistant_chars, THREE_BODY_PROBLEM_CHARS),
            harry_potter: books(assistant_chars, HARRY_POTTER_CHARS),
            little_prince: books(assistant_chars, LITTLE_PRINCE_CHARS),
        },
    }
}

fn books(chars: usize, book_size: usize) -> f64 {
    round_f64(chars as f64 / book_size as f64, 1)
}
