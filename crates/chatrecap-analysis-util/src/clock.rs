use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("invalid UTC offset `{input}` (expected `UTC`, `local`, or `+HH:MM`)")]
    InvalidOffset { input: String },

    #[error("the host's local UTC offset could not be determined")]
    LocalUnavailable,
}

/// Calendar position of a timestamp under a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalStamp {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    /// Monday = 0 .. Sunday = 6.
    pub weekday: u8,
}

impl LocalStamp {
    /// `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `YYYY-MM`.
    pub fn month_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Converts Unix timestamps into calendar buckets under an explicit offset.
///
/// Bucketing never consults ambient host state; a host-local offset has to
/// be asked for up front with [`Clock::host_local`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    offset: UtcOffset,
}

impl Default for Clock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock {
    pub fn utc() -> Self {
        Self {
            offset: UtcOffset::UTC,
        }
    }

    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// The host's current offset. Call before spawning threads.
    pub fn host_local() -> Result<Self, ClockError> {
        UtcOffset::current_local_offset()
            .map(Self::with_offset)
            .map_err(|_| ClockError::LocalUnavailable)
    }

    /// Parse `UTC`, `Z`, or a signed `+HH:MM` offset. `local` is resolved by the caller.
    pub fn parse_offset(input: &str) -> Result<UtcOffset, ClockError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(UtcOffset::UTC);
        }
        let format = format_description!("[offset_hour sign:mandatory]:[offset_minute]");
        UtcOffset::parse(trimmed, &format).map_err(|_| ClockError::InvalidOffset {
            input: input.to_string(),
        })
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Bucket a Unix timestamp (seconds, fractional part ignored).
    ///
    /// Returns `None` for values outside the representable calendar range.
    pub fn stamp(&self, unix_secs: f64) -> Option<LocalStamp> {
        if !unix_secs.is_finite() {
            return None;
        }
        let at = OffsetDateTime::from_unix_timestamp(unix_secs.floor() as i64)
            .ok()?
            .to_offset(self.offset);
        Some(LocalStamp {
            year: at.year(),
            month: u8::from(at.month()),
            day: at.day(),
            hour: at.hour(),
            weekday: at.weekday().number_days_from_monday(),
        })
    }
}
