//! Toast notification with a replaceable auto-hide deadline

use crate::constants::TOAST_DURATION;
use crate::types::Severity;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub severity: Severity,
}

/// A single banner. Showing a new message cancels the pending hide of the
/// previous one; there is never more than one deadline outstanding.
#[derive(Debug, Default)]
pub struct Toast {
    current: Option<ToastMessage>,
    hide_at: Option<Instant>,
}

impl Toast {
    pub fn show(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(ToastMessage { text: text.into(), severity });
        self.hide_at = Some(now + TOAST_DURATION);
    }

    /// Hide the banner if its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.hide_at.is_some_and(|at| now >= at) {
            self.current = None;
            self.hide_at = None;
        }
    }

    pub fn visible(&self) -> Option<&ToastMessage> {
        self.current.as_ref()
    }

    /// Time left until the banner hides, for scheduling a repaint
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.hide_at.map(|at| at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_duration() {
        let t0 = Instant::now();
        let mut toast = Toast::default();
        toast.show("saved", Severity::Success, t0);

        toast.tick(t0 + TOAST_DURATION - Duration::from_millis(1));
        assert_eq!(toast.visible().map(|m| m.text.as_str()), Some("saved"));

        toast.tick(t0 + TOAST_DURATION);
        assert!(toast.visible().is_none());
        assert_eq!(toast.remaining(t0), None);
    }

    #[test]
    fn second_message_cancels_first_deadline() {
        let t0 = Instant::now();
        let mut toast = Toast::default();
        toast.show("first", Severity::Error, t0);
        toast.show("second", Severity::Success, t0 + Duration::from_secs(1));

        // The first message's deadline has passed; the second must survive it
        toast.tick(t0 + TOAST_DURATION + Duration::from_millis(500));
        let shown = toast.visible().cloned();
        assert_eq!(
            shown,
            Some(ToastMessage { text: "second".into(), severity: Severity::Success })
        );

        toast.tick(t0 + Duration::from_secs(1) + TOAST_DURATION);
        assert!(toast.visible().is_none());
    }

    #[test]
    fn remaining_counts_down() {
        let t0 = Instant::now();
        let mut toast = Toast::default();
        assert_eq!(toast.remaining(t0), None);
        toast.show("x", Severity::Success, t0);
        assert_eq!(toast.remaining(t0 + Duration::from_secs(1)), Some(Duration::from_secs(2)));
        assert_eq!(toast.remaining(t0 + Duration::from_secs(10)), Some(Duration::ZERO));
    }
}
