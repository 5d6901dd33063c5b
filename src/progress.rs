use chrono::{DateTime, Local};
use std::time::Duration;

/// Below this, words per minute reads as 0 rather than dividing by a near-zero span.
pub const MIN_ELAPSED: Duration = Duration::from_secs(1);

/// floor(words * 60 / elapsed seconds), or 0 while less than [`MIN_ELAPSED`] has passed.
pub fn words_per_minute(words: usize, elapsed: Duration) -> u64 {
    if elapsed < MIN_ELAPSED {
        return 0;
    }
    (words as f64 * 60.0 / elapsed.as_secs_f64()).floor() as u64
}

/// `12.3s` under a minute, `1m05.3s` from there on.
pub fn format_elapsed(elapsed: Duration) -> String {
    let tenths = elapsed.as_millis() / 100;
    let (mins, secs, tenth) = (tenths / 600, (tenths / 10) % 60, tenths % 10);
    if mins == 0 {
        format!("{secs}.{tenth}s")
    } else {
        format!("{mins}m{secs:02}.{tenth}s")
    }
}

/// Words completed and when typing began. The clock starts on the first keystroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    pub words: usize,
    pub started_at: Option<DateTime<Local>>,
}

impl Progress {
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Record the start time. Later calls keep the first timestamp.
    pub fn start(&mut self, now: DateTime<Local>) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn complete_word(&mut self) {
        self.words += 1;
    }

    pub fn elapsed_at(&self, now: DateTime<Local>) -> Duration {
        self.started_at
            .and_then(|start| (now - start).to_std().ok())
            .unwrap_or_default()
    }

    pub fn wpm_at(&self, now: DateTime<Local>) -> u64 {
        words_per_minute(self.words, self.elapsed_at(now))
    }

    pub fn status_line_at(&self, now: DateTime<Local>) -> String {
        format!(
            "{} word/min, {}",
            self.wpm_at(now),
            format_elapsed(self.elapsed_at(now))
        )
    }

    pub fn status_line(&self) -> String {
        self.status_line_at(Local::now())
    }
}
