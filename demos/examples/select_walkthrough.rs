// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dropdown driven end to end over a tiny in-memory document.
//!
//! This example shows how to combine:
//! - a `TriggerBinding` on the label that turns clicks into toggle signals,
//! - a `Dropdown` that interprets the signal, computes placement, and locks page scrolling,
//! - keyboard and pointer input flowing into the selection engine.
//!
//! Run:
//! - `cargo run -p dropkit_demos --example select_walkthrough`

use std::collections::HashMap;

use dropkit::selection::{ItemEntry, ItemHost, KeyPress, ValueChange};
use dropkit::trigger::{CLICK, Outcome, ParentLookup, TreeLookup, TriggerBinding, contains};
use dropkit::{
    BoxError, Boundaries, Dropdown, DropdownConfig, DropdownError, DropdownHost, OpenChange,
    PageScrollLock, Placement,
};
use kurbo::Rect;
use simplelog::{Config, LevelFilter, SimpleLogger};

const BODY: u32 = 1;
const SELECT: u32 = 2;
const LABEL: u32 = 3;
const ITEMS: u32 = 4;
const OUTSIDE: u32 = 20;

/// Parent links and one class per node; enough for selector lookups.
struct Dom {
    parents: HashMap<u32, u32>,
    classes: HashMap<u32, &'static str>,
    children: Vec<(u32, u32)>,
}

impl Dom {
    fn new() -> Self {
        let mut dom = Self {
            parents: HashMap::new(),
            classes: HashMap::new(),
            children: Vec::new(),
        };
        dom.insert(SELECT, BODY, "select");
        dom.insert(LABEL, SELECT, "label");
        dom.insert(ITEMS, SELECT, "items");
        for item in 10..13 {
            dom.insert(item, ITEMS, "item");
        }
        dom.insert(OUTSIDE, BODY, "button");
        dom
    }

    fn insert(&mut self, node: u32, parent: u32, class: &'static str) {
        self.parents.insert(node, parent);
        self.classes.insert(node, class);
        self.children.push((parent, node));
    }
}

impl ParentLookup<u32> for Dom {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.parents.get(node).copied()
    }
}

impl TreeLookup<u32> for Dom {
    fn matches(&self, node: &u32, selector: &str) -> bool {
        let Some(class) = selector.strip_prefix('.') else {
            return false;
        };
        self.classes.get(node).is_some_and(|c| *c == class)
    }

    fn first_child(&self, node: &u32) -> Option<u32> {
        self.children
            .iter()
            .find(|(parent, _)| parent == node)
            .map(|(_, child)| *child)
    }

    fn query(&self, root: &u32, selector: &str) -> Option<u32> {
        self.children
            .iter()
            .map(|(_, child)| *child)
            .filter(|child| child != root && contains(root, child, self))
            .find(|child| self.matches(child, selector))
    }
}

/// The rendering layer: prints every effect the dropdown asks for.
struct Page {
    dom: Dom,
    lock: PageScrollLock,
    select_rect: Rect,
}

impl ItemHost<u32> for Page {
    fn set_selected(&mut self, item: &u32, selected: bool) {
        println!("  item {item}: selected = {selected}");
    }
    fn set_active(&mut self, item: &u32, active: bool) {
        println!("  item {item}: active = {active}");
    }
    fn scroll_into_view(&mut self, item: &u32) {
        println!("  item {item}: scroll into view");
    }
}

impl ParentLookup<u32> for Page {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.dom.parent_of(node)
    }
}

impl DropdownHost<u32> for Page {
    fn measure(&mut self) -> Result<Boundaries, BoxError> {
        let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
        Ok(Boundaries::new(viewport, self.select_rect))
    }
    fn page_scroll_lock(&mut self) -> &mut PageScrollLock {
        &mut self.lock
    }
    fn set_page_scroll_enabled(&mut self, enabled: bool) {
        println!("  page scrolling {}", if enabled { "enabled" } else { "disabled" });
    }
    fn apply_placement(&mut self, placement: &Placement) {
        println!(
            "  items: {} {}, top {}, bottom {}, max height {}px",
            placement.position.as_str(),
            placement.y_axis.as_str(),
            placement.top,
            placement.bottom,
            placement.max_height
        );
    }
    fn attach_outside_listeners(&mut self) {
        println!("  listening for outside clicks");
    }
    fn detach_outside_listeners(&mut self) {
        println!("  no longer listening for outside clicks");
    }
    fn open_changed(&mut self, change: OpenChange) {
        println!("  open changed: {}", change.is_opened);
    }
    fn value_changed(&mut self, change: &ValueChange) {
        println!("  value changed: {:?}", change.values);
    }
}

fn click_label(
    binding: &TriggerBinding,
    dropdown: &mut Dropdown<u32>,
    page: &mut Page,
) -> Result<(), DropdownError> {
    let root = dropdown.root();
    let mut reached = false;
    let signal = binding.fire(LABEL, CLICK, &page.dom, |node, _| {
        if *node == root {
            reached = true;
            Outcome::Stop
        } else {
            Outcome::Continue
        }
    });
    match signal {
        Some(mut signal) if reached => dropdown.on_trigger(&mut signal, page),
        _ => Ok(()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Debug, Config::default())?;

    let config: DropdownConfig = serde_json::from_str(
        r#"{ "open-behavior": "no-scroll", "multiple": false, "next-key": "ArrowDown" }"#,
    )?;
    let mut page = Page {
        dom: Dom::new(),
        lock: PageScrollLock::new(),
        select_rect: Rect::new(40.0, 600.0, 300.0, 640.0),
    };
    let mut dropdown = Dropdown::new(SELECT, config);
    let label = TriggerBinding::default();

    println!("content loaded");
    dropdown.on_content_change(
        [
            ItemEntry::new(10, "espresso"),
            ItemEntry::new(11, "latte").selected(),
            ItemEntry::new(12, "mocha"),
        ],
        &mut page,
    )?;
    println!("label reads {:?}", dropdown.label().text());

    println!("label clicked");
    click_label(&label, &mut dropdown, &mut page)?;

    println!("pointer over mocha, then Enter");
    dropdown.on_item_pointer_over(&12, &mut page);
    dropdown.on_keydown(KeyPress::new("Enter"), false, &mut page)?;
    println!("label reads {:?}", dropdown.label().text());

    println!("label clicked again, then a click outside");
    click_label(&label, &mut dropdown, &mut page)?;
    dropdown.on_outside_interaction(&OUTSIDE, &mut page)?;

    println!("ArrowUp while focused and closed");
    dropdown.on_keydown(KeyPress::new("ArrowUp"), true, &mut page)?;
    println!("final value {:?}", dropdown.value());
    Ok(())
}
