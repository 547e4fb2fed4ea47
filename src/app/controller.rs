//! Conversion form state and event handlers, independent of egui

use super::targets::TargetSet;
use super::toast::Toast;
use crate::clipboard::Clipboard;
use crate::constants::*;
use crate::error::ConvertError;
use crate::types::*;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct ConversionController {
    input: String,
    targets: TargetSet,
    result: ResultPane,
    loading: bool,
    toast: Toast,
    api_status: ApiStatus,
}

impl ConversionController {
    pub fn new(mut targets: TargetSet) -> Self {
        targets.restyle();
        Self {
            input: String::new(),
            targets,
            result: ResultPane::Placeholder,
            loading: false,
            toast: Toast::default(),
            api_status: ApiStatus::Unknown,
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Buffer bound to the text box. Call `on_input_changed` after edits.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Enforce the character cap. Returns true if the text was truncated.
    pub fn on_input_changed(&mut self) -> bool {
        match self.input.char_indices().nth(MAX_CHARS) {
            Some((cut, _)) => {
                self.input.truncate(cut);
                debug!(max = MAX_CHARS, "Input truncated");
                true
            }
            None => false,
        }
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.char_count().min(MAX_CHARS), MAX_CHARS)
    }

    /// Counter gets error styling once the cap is reached
    pub fn counter_at_limit(&self) -> bool {
        self.char_count() >= MAX_CHARS
    }

    // ------------------------------------------------------------------
    // Target options
    // ------------------------------------------------------------------

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Check the option at `index` and restyle labels. Returns the indices
    /// of restyled labels.
    pub fn select_target(&mut self, index: usize) -> Vec<usize> {
        if !self.targets.select(index) {
            return Vec::new();
        }
        debug!(option = %self.targets.selected().value, "Target selected");
        self.targets.restyle()
    }

    // ------------------------------------------------------------------
    // Conversion
    // ------------------------------------------------------------------

    /// Validate the input and enter the loading state. Returns the request
    /// to send, or `None` if nothing should be sent.
    pub fn begin_conversion(&mut self, now: Instant) -> Option<ConvertRequest> {
        if self.loading {
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            self.notify(ConvertError::EmptyInput.to_string(), Severity::Error, now);
            return None;
        }
        let request = ConvertRequest {
            text: text.to_string(),
            target: self.targets.selected().value.clone(),
        };
        self.loading = true;
        self.result = ResultPane::Loading;
        info!(option = %request.target, chars = request.text.chars().count(), "Conversion started");
        Some(request)
    }

    /// Leave the loading state with the settled request's outcome.
    pub fn finish_conversion(&mut self, outcome: Result<String, ConvertError>) {
        if !self.loading {
            warn!("Conversion result arrived while idle, ignoring");
            return;
        }
        self.result = match outcome {
            Ok(text) if text.is_empty() => ResultPane::Placeholder,
            Ok(text) => {
                info!(chars = text.chars().count(), "Conversion succeeded");
                ResultPane::Success(text)
            }
            Err(e) => {
                warn!(error = ?e, "Conversion failed");
                ResultPane::Error(format!("{}{}", MSG_ERROR_PREFIX, e))
            }
        };
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn result(&self) -> &ResultPane {
        &self.result
    }

    // ------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------

    pub fn copy_enabled(&self) -> bool {
        self.result.copyable_text().is_some()
    }

    pub fn copy_result(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        let outcome = match self.result.copyable_text() {
            Some(text) => clipboard.set_text(text),
            None => Err(ConvertError::NothingToCopy),
        };
        match outcome {
            Ok(()) => self.notify(MSG_COPIED, Severity::Success, now),
            Err(e) => self.notify(e.to_string(), Severity::Error, now),
        }
    }

    // ------------------------------------------------------------------
    // Notifications & status
    // ------------------------------------------------------------------

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.toast.show(message, severity, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.toast.tick(now);
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn set_api_status(&mut self, status: ApiStatus) {
        self.api_status = status;
    }

    pub fn api_status(&self) -> &ApiStatus {
        &self.api_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::time::Duration;

    fn controller() -> ConversionController {
        let options = DEFAULT_TARGETS
            .iter()
            .map(|(v, l)| TargetOption::new(*v, *l))
            .collect();
        ConversionController::new(TargetSet::new(options, DEFAULT_TARGET).unwrap())
    }

    fn type_text(c: &mut ConversionController, text: &str) {
        *c.input_mut() = text.to_string();
        c.on_input_changed();
    }

    fn toast_text(c: &ConversionController) -> Option<(String, Severity)> {
        c.toast().visible().map(|m| (m.text.clone(), m.severity))
    }

    #[test]
    fn counter_tracks_length_and_truncates_over_cap() {
        let mut c = controller();
        for len in [0, 1, 250, 499, 500, 501, 750, 1200] {
            type_text(&mut c, &"a".repeat(len));
            if len <= MAX_CHARS {
                assert_eq!(c.input().len(), len);
                assert_eq!(c.counter_text(), format!("{} / 500", len));
            } else {
                assert_eq!(c.char_count(), MAX_CHARS);
                assert_eq!(c.counter_text(), "500 / 500");
            }
            assert_eq!(c.counter_at_limit(), len >= MAX_CHARS, "len {len}");
        }
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut c = controller();
        *c.input_mut() = "가".repeat(MAX_CHARS + 3);
        assert!(c.on_input_changed());
        assert_eq!(c.input(), "가".repeat(MAX_CHARS));
        assert!(!c.on_input_changed());
    }

    #[test]
    fn empty_input_never_starts_a_request() {
        let now = Instant::now();
        for text in ["", "   ", "\n\t "] {
            let mut c = controller();
            type_text(&mut c, text);
            assert_eq!(c.begin_conversion(now), None);
            assert!(c.submit_enabled());
            assert!(c.result().is_placeholder());
            assert_eq!(toast_text(&c), Some((MSG_EMPTY_INPUT.into(), Severity::Error)));
        }
    }

    #[test]
    fn request_uses_trimmed_text_and_selected_target() {
        let mut c = controller();
        type_text(&mut c, "  hello there \n");
        c.select_target(2);
        let req = c.begin_conversion(Instant::now()).unwrap();
        assert_eq!(req, ConvertRequest { text: "hello there".into(), target: "customer".into() });
    }

    #[test]
    fn submit_disabled_while_loading_then_reenabled_on_success() {
        let mut c = controller();
        type_text(&mut c, "hello");
        assert!(c.begin_conversion(Instant::now()).is_some());
        assert!(!c.submit_enabled());
        assert_eq!(c.result(), &ResultPane::Loading);
        assert!(!c.copy_enabled());

        // A second submit while in flight is rejected
        assert_eq!(c.begin_conversion(Instant::now()), None);

        c.finish_conversion(Ok("X".into()));
        assert!(c.submit_enabled());
        assert_eq!(c.result(), &ResultPane::Success("X".into()));
        assert!(c.copy_enabled());
    }

    #[test]
    fn failure_shows_prefixed_error_and_reenables_submit() {
        let mut c = controller();
        type_text(&mut c, "hello");
        c.begin_conversion(Instant::now()).unwrap();
        c.finish_conversion(Err(ConvertError::Server("bad target".into())));

        assert!(c.submit_enabled());
        assert!(c.result().is_error());
        let ResultPane::Error(msg) = c.result() else { panic!("expected error pane") };
        assert!(msg.starts_with(MSG_ERROR_PREFIX));
        assert!(msg.contains("bad target"));
    }

    #[test]
    fn next_conversion_clears_error_styling() {
        let mut c = controller();
        type_text(&mut c, "hello");
        c.begin_conversion(Instant::now()).unwrap();
        c.finish_conversion(Err(ConvertError::Network("refused".into())));
        assert!(c.result().is_error());

        c.begin_conversion(Instant::now()).unwrap();
        assert!(!c.result().is_error());
        c.finish_conversion(Ok("fine".into()));
        assert_eq!(c.result(), &ResultPane::Success("fine".into()));
    }

    #[test]
    fn empty_success_falls_back_to_placeholder() {
        let mut c = controller();
        type_text(&mut c, "hello");
        c.begin_conversion(Instant::now()).unwrap();
        c.finish_conversion(Ok(String::new()));
        assert!(c.result().is_placeholder());
        assert!(!c.copy_enabled());
    }

    #[test]
    fn late_result_while_idle_is_ignored() {
        let mut c = controller();
        c.finish_conversion(Ok("stray".into()));
        assert!(c.result().is_placeholder());
        assert!(c.submit_enabled());
    }

    #[test]
    fn copy_on_placeholder_never_touches_clipboard() {
        let mut c = controller();
        let mut clip = MemoryClipboard::default();
        c.copy_result(&mut clip, Instant::now());
        assert!(clip.writes.is_empty());
        assert_eq!(toast_text(&c), Some((MSG_NOTHING_TO_COPY.into(), Severity::Error)));
    }

    #[test]
    fn copy_while_loading_is_nothing_to_copy() {
        let mut c = controller();
        let mut clip = MemoryClipboard::default();
        type_text(&mut c, "hello");
        c.begin_conversion(Instant::now()).unwrap();
        c.copy_result(&mut clip, Instant::now());
        assert!(clip.writes.is_empty());
        assert_eq!(toast_text(&c), Some((MSG_NOTHING_TO_COPY.into(), Severity::Error)));
    }

    #[test]
    fn copy_writes_result_and_confirms() {
        let mut c = controller();
        let mut clip = MemoryClipboard::default();
        type_text(&mut c, "hello");
        c.begin_conversion(Instant::now()).unwrap();
        c.finish_conversion(Ok("converted".into()));

        c.copy_result(&mut clip, Instant::now());
        assert_eq!(clip.writes, vec!["converted".to_string()]);
        assert_eq!(toast_text(&c), Some((MSG_COPIED.into(), Severity::Success)));
    }

    #[test]
    fn clipboard_failure_is_distinct_from_nothing_to_copy() {
        let mut c = controller();
        let mut clip = MemoryClipboard { fail: true, ..Default::default() };
        type_text(&mut c, "hello");
        c.begin_conversion(Instant::now()).unwrap();
        c.finish_conversion(Ok("converted".into()));

        c.copy_result(&mut clip, Instant::now());
        assert_eq!(toast_text(&c), Some((MSG_COPY_FAILED.into(), Severity::Error)));
        assert_ne!(MSG_COPY_FAILED, MSG_NOTHING_TO_COPY);
    }

    #[test]
    fn default_option_is_styled_at_startup() {
        let c = controller();
        assert_eq!(c.targets().selected().value, DEFAULT_TARGET);
        assert_eq!(c.targets().style(0), LabelStyle::Active);
        assert_eq!(c.targets().style(1), LabelStyle::Inactive);
    }

    #[test]
    fn selecting_target_restyles_old_and_new_only() {
        let mut c = controller();
        assert_eq!(c.select_target(1), vec![0, 1]);
        assert_eq!(c.targets().style(1), LabelStyle::Active);
        assert_eq!(c.targets().style(2), LabelStyle::Inactive);
        assert!(c.select_target(1).is_empty());
    }

    #[test]
    fn quick_successive_toasts_keep_only_the_second() {
        let t0 = Instant::now();
        let mut c = controller();
        c.notify("first", Severity::Success, t0);
        c.notify("second", Severity::Error, t0 + Duration::from_millis(200));

        c.tick(t0 + TOAST_DURATION);
        assert_eq!(toast_text(&c), Some(("second".into(), Severity::Error)));

        c.tick(t0 + Duration::from_millis(200) + TOAST_DURATION);
        assert_eq!(toast_text(&c), None);
    }
}
