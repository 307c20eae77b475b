// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::time::Duration;

/// Options recognized by [`DelayedTransition`](crate::DelayedTransition).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct TransitionConfig {
    /// Time spent in `Opening` before the open relay fires.
    #[cfg_attr(feature = "serde", serde(with = "crate::delay::serde_delay"))]
    pub open_delay: Duration,
    /// Time spent in `Closing` before the close relay fires.
    #[cfg_attr(feature = "serde", serde(with = "crate::delay::serde_delay"))]
    pub close_delay: Duration,
    /// Also react to signals addressed at the host's parent.
    pub watch_parent: bool,
    /// Selector of the descendant that receives relays; the first child when unset.
    pub child_selector: Option<String>,
}

impl TransitionConfig {
    /// Set both delays.
    #[must_use]
    pub fn with_delays(mut self, open: Duration, close: Duration) -> Self {
        self.open_delay = open;
        self.close_delay = close;
        self
    }

    /// React to signals addressed at the host's parent.
    #[must_use]
    pub fn with_watch_parent(mut self, watch_parent: bool) -> Self {
        self.watch_parent = watch_parent;
        self
    }

    /// Relay to the first descendant matching `selector`.
    #[must_use]
    pub fn with_child_selector(mut self, selector: impl Into<String>) -> Self {
        self.child_selector = Some(selector.into());
        self
    }
}
