//! Spinner shown on stderr while the analysis passes run.
//!
//! Without the `ui` feature every method is a no-op.

use std::io::IsTerminal;

/// Environment variable that suppresses the spinner when set.
pub const NO_PROGRESS_ENV: &str = "CHATRECAP_NO_PROGRESS";

/// Whether stderr is an interactive terminal that accepts decorations.
pub fn stderr_is_interactive() -> bool {
    std::io::stderr().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && std::env::var_os(NO_PROGRESS_ENV).is_none()
}

#[cfg(feature = "ui")]
mod spinner {
    use std::time::Duration;

    use indicatif::{ProgressBar, ProgressStyle};

    pub(crate) fn build() -> Option<ProgressBar> {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}").ok()?;
        let pb = ProgressBar::new_spinner();
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    }
}

/// A spinner that only draws when enabled and stderr is interactive.
pub struct Progress {
    #[cfg(feature = "ui")]
    bar: Option<indicatif::ProgressBar>,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        let show = enabled && stderr_is_interactive();
        #[cfg(feature = "ui")]
        {
            Self {
                bar: if show { spinner::build() } else { None },
            }
        }
        #[cfg(not(feature = "ui"))]
        {
            let _ = show;
            Self {}
        }
    }

    /// Whether anything is actually drawn.
    pub fn is_visible(&self) -> bool {
        #[cfg(feature = "ui")]
        {
            self.bar.is_some()
        }
        #[cfg(not(feature = "ui"))]
        {
            false
        }
    }

    pub fn set_message(&self, msg: impl Into<String>) {
        #[cfg(feature = "ui")]
        if let Some(bar) = &self.bar {
            bar.set_message(msg.into());
        }
        #[cfg(not(feature = "ui"))]
        let _ = msg;
    }

    pub fn finish_and_clear(&self) {
        #[cfg(feature = "ui")]
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}
