// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Text shown by a label until something is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Please Select Value:";

/// State of the label that fronts a dropdown.
///
/// The owning [`Dropdown`](crate::Dropdown) keeps `value` and `opened` up to date; hosts only
/// choose the placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectLabel {
    placeholder: String,
    value: String,
    opened: bool,
}

impl Default for SelectLabel {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl SelectLabel {
    /// A closed, empty label.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            opened: false,
        }
    }

    /// Text to render: the value, or the placeholder while the value is empty.
    pub fn text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Joined selection value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the owning dropdown is open.
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    pub(crate) fn set_opened(&mut self, opened: bool) {
        self.opened = opened;
    }
}
