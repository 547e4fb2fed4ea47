//! Target option set with exactly one option selected

use crate::constants::{DEFAULT_TARGET, DEFAULT_TARGETS};
use crate::error::TargetSetError;
use crate::settings::Settings;
use crate::types::{LabelStyle, TargetOption};
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct TargetSet {
    options: Vec<TargetOption>,
    selected: usize,
    /// Styles as last applied to the labels, parallel to `options`
    styles: Vec<LabelStyle>,
}

impl TargetSet {
    /// Validate the options and pre-select `default_value`. Labels start
    /// unstyled (all inactive) until `restyle` is run.
    pub fn new(options: Vec<TargetOption>, default_value: &str) -> Result<Self, TargetSetError> {
        if options.is_empty() {
            return Err(TargetSetError::Empty);
        }
        let mut seen = HashSet::new();
        for opt in &options {
            if !seen.insert(opt.value.as_str()) {
                return Err(TargetSetError::DuplicateValue(opt.value.clone()));
            }
        }
        let selected = options
            .iter()
            .position(|o| o.value == default_value)
            .ok_or_else(|| TargetSetError::UnknownDefault(default_value.to_string()))?;
        let styles = vec![LabelStyle::Inactive; options.len()];
        Ok(Self { options, selected, styles })
    }

    /// The built-in options with the built-in default selected
    pub fn builtin() -> Self {
        let options: Vec<TargetOption> = DEFAULT_TARGETS
            .iter()
            .map(|(value, label)| TargetOption::new(*value, *label))
            .collect();
        let selected = options.iter().position(|o| o.value == DEFAULT_TARGET).unwrap_or(0);
        let styles = vec![LabelStyle::Inactive; options.len()];
        Self { options, selected, styles }
    }

    /// Build from settings. A stale `last_target` falls back to the
    /// configured default; an invalid option list falls back to `builtin`.
    pub fn from_settings(settings: &Settings) -> Self {
        let initial = settings.initial_target();
        match Self::new(settings.targets.clone(), initial) {
            Ok(set) => set,
            Err(TargetSetError::UnknownDefault(_)) if initial != settings.default_target => {
                warn!(option = %initial, "Last used target no longer configured");
                Self::new(settings.targets.clone(), &settings.default_target).unwrap_or_else(|e| {
                    warn!(error = %e, "Invalid target options in settings, using built-in");
                    Self::builtin()
                })
            }
            Err(e) => {
                warn!(error = %e, "Invalid target options in settings, using built-in");
                Self::builtin()
            }
        }
    }

    pub fn options(&self) -> &[TargetOption] {
        &self.options
    }

    pub fn selected(&self) -> &TargetOption {
        &self.options[self.selected]
    }

    pub fn style(&self, index: usize) -> LabelStyle {
        self.styles.get(index).copied().unwrap_or(LabelStyle::Inactive)
    }

    /// Check the option at `index`. Returns false if out of range or
    /// already checked.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    /// Bring label styles in line with the selection. Returns the indices of
    /// labels whose style changed.
    pub fn restyle(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, style) in self.styles.iter_mut().enumerate() {
            let wanted = if i == self.selected { LabelStyle::Active } else { LabelStyle::Inactive };
            if *style != wanted {
                *style = wanted;
                changed.push(i);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<TargetOption> {
        vec![
            TargetOption::new("boss", "To my boss"),
            TargetOption::new("colleague", "To a colleague"),
            TargetOption::new("customer", "To a customer"),
            TargetOption::new("kid", "To a child"),
        ]
    }

    #[test]
    fn from_settings_restores_last_target() {
        let settings = Settings { last_target: Some("customer".into()), ..Settings::default() };
        assert_eq!(TargetSet::from_settings(&settings).selected().value, "customer");
    }

    #[test]
    fn from_settings_falls_back_on_stale_or_invalid_config() {
        let stale = Settings { last_target: Some("gone".into()), ..Settings::default() };
        assert_eq!(TargetSet::from_settings(&stale).selected().value, DEFAULT_TARGET);

        let empty = Settings { targets: vec![], ..Settings::default() };
        let set = TargetSet::from_settings(&empty);
        assert_eq!(set.options().len(), DEFAULT_TARGETS.len());
        assert_eq!(set.selected().value, DEFAULT_TARGET);

        let bad_default = Settings {
            targets: options(),
            default_target: "nobody".into(),
            ..Settings::default()
        };
        assert_eq!(TargetSet::from_settings(&bad_default).options().len(), DEFAULT_TARGETS.len());
    }

    #[test]
    fn rejects_invalid_configurations() {
        assert_eq!(TargetSet::new(vec![], "boss").unwrap_err(), TargetSetError::Empty);

        let mut dup = options();
        dup.push(TargetOption::new("boss", "Again"));
        assert_eq!(
            TargetSet::new(dup, "boss").unwrap_err(),
            TargetSetError::DuplicateValue("boss".into())
        );

        assert_eq!(
            TargetSet::new(options(), "nobody").unwrap_err(),
            TargetSetError::UnknownDefault("nobody".into())
        );
    }

    #[test]
    fn initial_restyle_marks_default_active() {
        let mut set = TargetSet::new(options(), "customer").unwrap();
        assert_eq!(set.selected().value, "customer");
        assert_eq!(set.restyle(), vec![2]);
        assert_eq!(set.style(2), LabelStyle::Active);
        assert_eq!(set.style(0), LabelStyle::Inactive);
        // Nothing left to do
        assert!(set.restyle().is_empty());
    }

    #[test]
    fn selection_change_restyles_only_old_and_new() {
        let mut set = TargetSet::new(options(), "boss").unwrap();
        set.restyle();

        assert!(set.select(3));
        assert_eq!(set.restyle(), vec![0, 3]);
        assert_eq!(set.style(3), LabelStyle::Active);
        assert_eq!(set.style(0), LabelStyle::Inactive);
        assert_eq!(set.style(1), LabelStyle::Inactive);
    }

    #[test]
    fn reselecting_or_out_of_range_is_a_no_op() {
        let mut set = TargetSet::new(options(), "boss").unwrap();
        assert!(!set.select(0));
        assert!(!set.select(9));
        assert!(set.select(3));
        assert_eq!(set.selected().value, "kid");
    }
}
