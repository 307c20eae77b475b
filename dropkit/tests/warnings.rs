// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Missing data and unresolved selectors are warnings with a safe default, never errors.

use std::cell::RefCell;
use std::sync::Once;

use dropkit::PageScrollLock;
use dropkit::selection::{ItemDecl, ItemEntry, SelectionConfig, SelectionEngine};
use dropkit::trigger::{CLICK, Outcome, ParentLookup, TreeLookup, TriggerBinding};

thread_local! {
    static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

#[derive(Debug)]
struct Capture;

impl log::Log for Capture {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

/// Warnings logged on this thread while `f` runs.
fn warnings_during(f: impl FnOnce()) -> Vec<String> {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Warn);
    });
    WARNINGS.with(|w| w.borrow_mut().clear());
    f();
    WARNINGS.with(|w| w.take())
}

// 1 (.form) ── 2 ── 3
struct Chain;

impl ParentLookup<u32> for Chain {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        (*node > 1).then(|| node - 1)
    }
}

impl TreeLookup<u32> for Chain {
    fn matches(&self, node: &u32, selector: &str) -> bool {
        *node == 1 && selector == ".form"
    }

    fn first_child(&self, node: &u32) -> Option<u32> {
        (*node < 3).then(|| node + 1)
    }

    fn query(&self, _root: &u32, _selector: &str) -> Option<u32> {
        None
    }
}

#[test]
fn unmatched_binding_selector_warns_and_sends_nothing() {
    let binding = TriggerBinding::default().with_for_selector(".menu");
    let mut delivered = false;
    let warnings = warnings_during(|| {
        let ev = binding.fire(3, CLICK, &Chain, |_, _| {
            delivered = true;
            Outcome::Continue
        });
        assert!(ev.is_none());
    });
    assert!(!delivered);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains(".menu"), "{warnings:?}");

    let binding = TriggerBinding::default().with_for_selector(".form");
    let warnings = warnings_during(|| {
        assert!(binding.fire(3, CLICK, &Chain, |_, _| Outcome::Continue).is_some());
    });
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn declaring_an_item_without_value_warns_but_succeeds() {
    let mut entry = None;
    let warnings = warnings_during(|| {
        entry = Some(ItemDecl::new(7_u32).with_default_selected(true).initialize());
    });
    let entry = entry.unwrap().unwrap();
    assert!(entry.selected);
    assert_eq!(entry.value, None);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains('7'), "{warnings:?}");
}

#[test]
fn reading_a_missing_value_warns_and_uses_empty_string() {
    let mut engine = SelectionEngine::new(SelectionConfig::default().with_multiple(true));
    let mut values = Vec::new();
    let warnings = warnings_during(|| {
        engine.rebuild(
            [
                ItemEntry::new(1_u32, "a").selected(),
                ItemEntry {
                    handle: 2,
                    value: None,
                    selected: true,
                    active: false,
                },
            ],
            &mut (),
        );
        values = engine.selected_values();
    });
    assert_eq!(values, ["a", ""]);
    assert!(!warnings.is_empty());
    assert!(warnings.iter().all(|w| w.contains("no value")), "{warnings:?}");
}

#[test]
fn duplicate_handles_warn_and_keep_the_first() {
    let mut engine = SelectionEngine::new(SelectionConfig::default());
    let warnings = warnings_during(|| {
        engine.rebuild([ItemEntry::new(1_u32, "a"), ItemEntry::new(1, "b")], &mut ());
    });
    assert_eq!(engine.len(), 1);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn unbalanced_scroll_lock_release_warns() {
    let mut lock = PageScrollLock::new();
    let warnings = warnings_during(|| {
        assert!(!lock.release());
    });
    assert_eq!(lock.holders(), 0);
    assert_eq!(warnings.len(), 1);
}
