//! # chatrecap-analysis-util
//!
//! Helpers shared by several analysis passes: a counter with an explicit
//! first-seen tie-break, an injected clock for time bucketing, and
//! script detection for CJK text.

mod clock;
mod counter;
mod script;

pub use chatrecap_math::{mean, percentage, round_f64, safe_ratio};
pub use clock::{Clock, ClockError, LocalStamp};
pub use counter::OrderedCounter;
pub use script::{cjk_count, cjk_ratio, is_cjk};
