//! Notice dispatcher
//!
//! A single slot holding at most one transient notice. Each `show` replaces the
//! current notice and restarts its expiry timer; the old timer is cancelled
//! before the new notice is set so it can never clear its replacement.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Severity of a notice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

impl Severity {
    /// Get the title for this severity
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }

    /// Get the one-character icon for this severity
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Error => "x",
            Self::Info => "i",
        }
    }
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// One-line terminal rendering, e.g. `[+] Success: Transfer sent`
    pub fn render(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.severity.icon(),
            self.severity.title(),
            self.message
        )
    }
}

#[derive(Debug, Default)]
struct Slot {
    notice: Option<Notice>,
    /// Bumped on every show and clear; a timer only clears its own generation
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Holds the single live notice and its expiry timer
///
/// Cloning yields another handle on the same slot. `show` must be called from
/// within a Tokio runtime.
#[derive(Debug, Clone)]
pub struct NoticeDispatcher {
    slot: Arc<Mutex<Slot>>,
    duration: Duration,
}

impl NoticeDispatcher {
    /// Default time a notice stays visible
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            duration,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current notice and restart the expiry countdown
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let notice = Notice::new(message, severity);
        let mut slot = self.lock();

        slot.cancel_timer();
        slot.generation += 1;
        let generation = slot.generation;
        debug!(severity = severity.title(), message = %notice.message, "Showing notice");
        slot.notice = Some(notice);

        let shared = Arc::clone(&self.slot);
        let duration = self.duration;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.generation == generation {
                slot.notice = None;
                slot.timer = None;
            }
        }));
    }

    /// Remove the notice now and cancel its timer
    pub fn clear(&self) {
        let mut slot = self.lock();
        slot.cancel_timer();
        slot.generation += 1;
        slot.notice = None;
    }

    /// The live notice, if any
    pub fn current(&self) -> Option<Notice> {
        self.lock().notice.clone()
    }
}

impl Default for NoticeDispatcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_notice_expires() {
        let notices = NoticeDispatcher::default();
        notices.show("Saved", Severity::Success);
        assert_eq!(notices.current(), Some(Notice::success("Saved")));

        sleep(Duration::from_millis(2400)).await;
        assert!(notices.current().is_some());

        sleep(Duration::from_millis(200)).await;
        assert_eq!(notices.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacement_restarts_countdown() {
        let notices = NoticeDispatcher::default();
        notices.show("a", Severity::Info);
        sleep(Duration::from_millis(2000)).await;

        notices.show("b", Severity::Error);
        // Past the first notice's expiry
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(notices.current(), Some(Notice::error("b")));

        sleep(Duration::from_millis(1600)).await;
        assert_eq!(notices.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_timer() {
        let notices = NoticeDispatcher::default();
        notices.show("a", Severity::Info);
        notices.clear();
        assert_eq!(notices.current(), None);

        sleep(Duration::from_millis(1000)).await;
        notices.show("b", Severity::Info);
        // The cleared notice's timer would have fired here
        sleep(Duration::from_millis(2000)).await;
        assert_eq!(notices.current(), Some(Notice::info("b")));
    }

    #[test]
    fn test_render() {
        assert_eq!(
            Notice::error("Please enter a card name").render(),
            "[x] Error: Please enter a card name"
        );
        assert_eq!(Severity::default(), Severity::Success);
    }
}
