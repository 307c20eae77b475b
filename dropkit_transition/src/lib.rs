// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropkit Transition: staged open/close relays for animated containers.
//!
//! A [`DelayedTransition`] sits between a signal source and a descendant. Each incoming signal
//! moves it into `Opening` or `Closing` and schedules a relay; once the delay elapses the
//! relay is forwarded to the descendant and the state settles in `Opened` or `Closed`.
//! Hosts typically expose [`TransitionState::as_str`] as an attribute so styling can animate
//! the intermediate states.
//!
//! ## Stale timers
//!
//! Timers are never cancelled. Every signal bumps a generation counter, and a timer fires only
//! if it belongs to the latest generation. A signal that supersedes an earlier one therefore
//! always wins:
//!
//! ```
//! use core::time::Duration;
//! use dropkit_transition::{DelayedTransition, TransitionConfig, TransitionState};
//! use dropkit_trigger::TriggerKind;
//!
//! let mut t = DelayedTransition::new(
//!     TransitionConfig::default()
//!         .with_delays(Duration::from_millis(100), Duration::ZERO),
//! );
//!
//! let open = t.on_trigger(TriggerKind::Open, 0);
//! t.on_trigger(TriggerKind::Close, 50);
//!
//! // The close relay is due immediately; the open timer is stale.
//! assert_eq!(t.poll(50), Some(TriggerKind::Close));
//! assert_eq!(t.fire(open), None);
//! assert_eq!(t.state(), TransitionState::Closed);
//! ```
//!
//! ## Time
//!
//! Time is supplied by the host in milliseconds. Hosts that own real timers call
//! [`DelayedTransition::fire`] with the [`Timer`] returned from
//! [`DelayedTransition::on_trigger`]; hosts with a frame loop call
//! [`DelayedTransition::poll`] and use [`DelayedTransition::next_deadline`] to decide when to
//! wake up.
//!
//! ## Delays
//!
//! Delays are [`Duration`](core::time::Duration)s. [`parse_delay`] accepts strings such as
//! `"150ms"`, `"1.5s"`, `"2m"`, or `"1h"`; with the `serde` feature,
//! [`TransitionConfig`] reads its delays from such strings.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod delay;
mod transition;

pub use config::TransitionConfig;
pub use delay::{ParseDelayError, parse_delay};
pub use transition::{DelayedTransition, Timer, TransitionState};
