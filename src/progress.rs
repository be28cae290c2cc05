// Spinner shown while a blocking network call is running.

use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::time::Duration;

/// A ticking spinner on stderr, or a hidden bar when `enabled` is false.
/// Callers must `finish_and_clear` it once the call returns.
pub fn spinner(enabled: bool, message: impl Into<Cow<'static, str>>) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
