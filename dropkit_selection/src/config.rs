// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection engine configuration.

use alloc::string::String;

/// Key that moves the active item forward by default.
pub const DEFAULT_NEXT_KEY: &str = "ArrowDown";
/// Key that moves the active item backward by default.
pub const DEFAULT_PREV_KEY: &str = "ArrowUp";

/// Which side of an item renders its checkbox.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CheckboxSide {
    /// Checkbox precedes the item content.
    Before,
    /// Checkbox follows the item content.
    After,
}

/// Configured checkbox placement for all items of an engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CheckboxPlacement {
    /// [`CheckboxSide::Before`] when multi-select is enabled, no checkbox otherwise.
    #[default]
    Default,
    /// Always before the content.
    Before,
    /// Always after the content.
    After,
    /// Never render a checkbox.
    None,
}

impl CheckboxPlacement {
    /// The side items should render their checkbox on, if any.
    #[must_use]
    pub const fn resolve(self, multiple: bool) -> Option<CheckboxSide> {
        match self {
            Self::Default if multiple => Some(CheckboxSide::Before),
            Self::Default | Self::None => None,
            Self::Before => Some(CheckboxSide::Before),
            Self::After => Some(CheckboxSide::After),
        }
    }
}

/// Options recognized by [`SelectionEngine`](crate::SelectionEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct SelectionConfig {
    /// Whether more than one item can be selected.
    pub multiple: bool,
    /// Checkbox placement applied to items on every rebuild.
    pub checkbox: CheckboxPlacement,
    /// Key that moves the active item forward.
    pub next_key: String,
    /// Key that moves the active item backward.
    pub prev_key: String,
    /// Ignore keyboard and pointer input.
    pub disabled: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            checkbox: CheckboxPlacement::Default,
            next_key: DEFAULT_NEXT_KEY.into(),
            prev_key: DEFAULT_PREV_KEY.into(),
            disabled: false,
        }
    }
}

impl SelectionConfig {
    /// Enable or disable multi-select.
    #[must_use]
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set the checkbox placement.
    #[must_use]
    pub fn with_checkbox(mut self, checkbox: CheckboxPlacement) -> Self {
        self.checkbox = checkbox;
        self
    }

    /// Set the navigation keys.
    #[must_use]
    pub fn with_keys(mut self, next: impl Into<String>, prev: impl Into<String>) -> Self {
        self.next_key = next.into();
        self.prev_key = prev.into();
        self
    }

    /// Enable or disable input handling.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Effective checkbox side for the current `multiple` setting.
    #[must_use]
    pub const fn checkbox_side(&self) -> Option<CheckboxSide> {
        self.checkbox.resolve(self.multiple)
    }
}
