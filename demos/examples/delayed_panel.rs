// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A delayed transition relaying open/close signals to an animated panel.
//!
//! Clicks on the page toggle a wrapper; the wrapper holds the signal for a configurable delay
//! before forwarding it to the panel inside. Signals that arrive while one is still pending
//! supersede it. The clock is simulated, advancing in 25ms frames.
//!
//! Run:
//! - `cargo run -p dropkit_demos --example delayed_panel`

use dropkit::transition::{DelayedTransition, TransitionConfig};
use dropkit::trigger::{Outcome, ParentLookup, TreeLookup, TriggerKind};
use simplelog::{Config, LevelFilter, SimpleLogger};

const PAGE: u32 = 1;
const WRAPPER: u32 = 2;
const PANEL: u32 = 3;

/// `page > wrapper > panel`.
struct Doc;

impl ParentLookup<u32> for Doc {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        (*node > PAGE).then(|| node - 1)
    }
}

impl TreeLookup<u32> for Doc {
    fn matches(&self, node: &u32, selector: &str) -> bool {
        *node == PANEL && selector == ".panel"
    }

    fn first_child(&self, node: &u32) -> Option<u32> {
        (*node < PANEL).then(|| node + 1)
    }

    fn query(&self, root: &u32, selector: &str) -> Option<u32> {
        (*root < PANEL && self.matches(&PANEL, selector)).then_some(PANEL)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Trace, Config::default())?;

    let config: TransitionConfig = serde_json::from_str(
        r#"{
            "open-delay": "150ms",
            "close-delay": "0.05s",
            "watch-parent": true,
            "child-selector": ".panel"
        }"#,
    )?;
    let mut wrapper = DelayedTransition::new(config);

    // Signals sent at the page, which the wrapper watches as its parent. The second click
    // cancels the first before it relays; the third sticks.
    let clicks = [
        (0_u64, TriggerKind::Toggle),
        (100, TriggerKind::Toggle),
        (200, TriggerKind::Toggle),
    ];
    let mut panel_open = false;
    let mut clicks = clicks.into_iter().peekable();

    for now in (0..=500).step_by(25) {
        while let Some((_, kind)) = clicks.next_if(|(at, _)| *at <= now) {
            if wrapper.observes(&PAGE, &WRAPPER, &Doc) {
                wrapper.on_trigger(kind, now);
                println!("{now:>4}ms  wrapper {}", wrapper.state().as_str());
            }
        }
        let Some(kind) = wrapper.poll(now) else {
            continue;
        };
        wrapper.relay(kind, &WRAPPER, &Doc, |node, event| {
            if *node == PANEL {
                panel_open = event.kind().resolve(panel_open);
                event.mark_handled();
            }
            Outcome::Stop
        });
        println!(
            "{now:>4}ms  wrapper {}, panel {}",
            wrapper.state().as_str(),
            if panel_open { "open" } else { "closed" }
        );
    }

    println!("next deadline: {:?}", wrapper.next_deadline());
    Ok(())
}
