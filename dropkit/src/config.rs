// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dropkit_selection::SelectionConfig;

/// How the items container is positioned while open.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OpenBehavior {
    /// Compute placement once on every open and close.
    #[default]
    Static,
    /// Like `Static`, and disable page scrolling while open.
    NoScroll,
    /// Like `Static`, and recompute placement whenever the viewport scrolls while open.
    Dynamic,
}

/// Options recognized by [`Dropdown`](crate::Dropdown).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct DropdownConfig {
    /// Close after a selection change. When unset, closes only in single-select mode.
    pub close_on_select: Option<bool>,
    /// Positioning policy while open.
    pub open_behavior: OpenBehavior,
    /// Position the items container relative to the viewport instead of the control.
    pub fixed_position: bool,
    /// Options of the nested selection engine.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub selection: SelectionConfig,
}

impl DropdownConfig {
    /// Override the close-on-select policy.
    #[must_use]
    pub fn with_close_on_select(mut self, close_on_select: bool) -> Self {
        self.close_on_select = Some(close_on_select);
        self
    }

    /// Set the positioning policy.
    #[must_use]
    pub fn with_open_behavior(mut self, open_behavior: OpenBehavior) -> Self {
        self.open_behavior = open_behavior;
        self
    }

    /// Use viewport-relative positioning.
    #[must_use]
    pub fn with_fixed_position(mut self, fixed_position: bool) -> Self {
        self.fixed_position = fixed_position;
        self
    }

    /// Set the nested selection options.
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionConfig) -> Self {
        self.selection = selection;
        self
    }
}
