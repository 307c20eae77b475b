// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-event to signal bindings.

use alloc::string::String;
use core::fmt::Debug;

use crate::path::{closest, emit};
use crate::types::{Delivery, Outcome, TreeLookup, TriggerEvent, TriggerKind};

/// Host event name that toggles when [`TriggerBinding::use_click`] is set.
pub const CLICK: &str = "click";

/// Turns host events seen by a control into trigger signals.
///
/// Without [`for_selector`](Self::for_selector) the signal bubbles from the control's own node,
/// so any ancestor can interpret it. With a selector, the closest matching node (the control
/// itself included) is the only recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerBinding {
    /// Selector for the closest node to address instead of bubbling from the control.
    pub for_selector: Option<String>,
    /// Host event name that sends [`TriggerKind::Open`].
    pub open_on: Option<String>,
    /// Host event name that sends [`TriggerKind::Close`].
    pub close_on: Option<String>,
    /// Whether a click sends [`TriggerKind::Toggle`].
    pub use_click: bool,
}

impl Default for TriggerBinding {
    fn default() -> Self {
        Self {
            for_selector: None,
            open_on: None,
            close_on: None,
            use_click: true,
        }
    }
}

impl TriggerBinding {
    /// Address the closest node matching `selector`.
    #[must_use]
    pub fn with_for_selector(mut self, selector: impl Into<String>) -> Self {
        self.for_selector = Some(selector.into());
        self
    }

    /// Open on the named host event.
    #[must_use]
    pub fn with_open_on(mut self, event_name: impl Into<String>) -> Self {
        self.open_on = Some(event_name.into());
        self
    }

    /// Close on the named host event.
    #[must_use]
    pub fn with_close_on(mut self, event_name: impl Into<String>) -> Self {
        self.close_on = Some(event_name.into());
        self
    }

    /// Enable or disable click-to-toggle.
    #[must_use]
    pub fn with_click(mut self, use_click: bool) -> Self {
        self.use_click = use_click;
        self
    }

    /// The signal a host event maps to, if any.
    ///
    /// When one name is bound several ways, the signal a receiver would see last wins: open
    /// over close, and either over the click toggle.
    pub fn kind_for(&self, event_name: &str) -> Option<TriggerKind> {
        if self.open_on.as_deref() == Some(event_name) {
            Some(TriggerKind::Open)
        } else if self.close_on.as_deref() == Some(event_name) {
            Some(TriggerKind::Close)
        } else if self.use_click && event_name == CLICK {
            Some(TriggerKind::Toggle)
        } else {
            None
        }
    }

    /// Translate a host event seen at `host` and deliver the resulting signal.
    ///
    /// Returns `None` when the event is not bound or the selector matches nothing; the latter
    /// is logged as a warning and is otherwise a no-op.
    pub fn fire<K, T, F>(
        &self,
        host: K,
        event_name: &str,
        tree: &T,
        handler: F,
    ) -> Option<TriggerEvent<K>>
    where
        K: Copy + Debug,
        T: TreeLookup<K> + ?Sized,
        F: FnMut(&K, &mut TriggerEvent<K>) -> Outcome,
    {
        let kind = self.kind_for(event_name)?;
        match self.for_selector.as_deref() {
            None => emit(Some(host), kind, Delivery::Bubble, tree, handler),
            Some(selector) => {
                let target = closest(host, selector, tree);
                if target.is_none() {
                    log::warn!(
                        "trigger selector `{selector}` does not match any closest node to {host:?}"
                    );
                }
                emit(target, kind, Delivery::Target, tree, handler)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParentLookup;
    use alloc::vec;
    use alloc::vec::Vec;

    // 10 (select) ── 11 (label) ── 12 (trigger)
    struct Doc;
    impl ParentLookup<u32> for Doc {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                12 => Some(11),
                11 => Some(10),
                _ => None,
            }
        }
    }
    impl TreeLookup<u32> for Doc {
        fn matches(&self, node: &u32, selector: &str) -> bool {
            selector == "select" && *node == 10
        }
        fn first_child(&self, _node: &u32) -> Option<u32> {
            None
        }
        fn query(&self, _root: &u32, _selector: &str) -> Option<u32> {
            None
        }
    }

    #[test]
    fn click_toggles_by_default() {
        let binding = TriggerBinding::default();
        assert_eq!(binding.kind_for(CLICK), Some(TriggerKind::Toggle));
        assert_eq!(binding.kind_for("mouseenter"), None);
        assert_eq!(binding.with_click(false).kind_for(CLICK), None);
    }

    #[test]
    fn named_events_map_to_open_and_close() {
        let binding = TriggerBinding::default()
            .with_open_on("mouseenter")
            .with_close_on("mouseleave");
        assert_eq!(binding.kind_for("mouseenter"), Some(TriggerKind::Open));
        assert_eq!(binding.kind_for("mouseleave"), Some(TriggerKind::Close));
    }

    #[test]
    fn one_name_bound_several_ways_resolves_to_the_last_listener() {
        let binding = TriggerBinding::default()
            .with_open_on("focus")
            .with_close_on("focus");
        assert_eq!(binding.kind_for("focus"), Some(TriggerKind::Open));

        let binding = TriggerBinding::default().with_close_on(CLICK);
        assert_eq!(binding.kind_for(CLICK), Some(TriggerKind::Close));
    }

    #[test]
    fn without_selector_signal_bubbles_from_host() {
        let mut seen = Vec::new();
        let ev = TriggerBinding::default().fire(12, CLICK, &Doc, |n, _| {
            seen.push(*n);
            Outcome::Continue
        });
        assert_eq!(ev.map(|e| *e.target()), Some(12));
        assert_eq!(seen, vec![12, 11, 10]);
    }

    #[test]
    fn selector_targets_closest_match_only() {
        let mut seen = Vec::new();
        let ev = TriggerBinding::default()
            .with_for_selector("select")
            .fire(12, CLICK, &Doc, |n, _| {
                seen.push(*n);
                Outcome::Continue
            });
        assert_eq!(ev.map(|e| *e.target()), Some(10));
        assert_eq!(seen, vec![10]);
    }

    #[test]
    fn unresolved_selector_is_a_no_op() {
        let mut calls = 0;
        let ev = TriggerBinding::default()
            .with_for_selector("nothing")
            .fire(12, CLICK, &Doc, |_, _| {
                calls += 1;
                Outcome::Continue
            });
        assert!(ev.is_none());
        assert_eq!(calls, 0);
    }
}
