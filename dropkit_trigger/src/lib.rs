// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropkit Trigger: open/close/toggle signaling between decoupled controls.
//!
//! ## Overview
//!
//! A trigger signal is a tiny command ([`TriggerKind::Open`], [`TriggerKind::Close`] or
//! [`TriggerKind::Toggle`]) addressed at a node of the host's element tree.
//! The sender does not know what the receiver is. A label, a button, or a keyboard shortcut can
//! all open the same dropdown, and one toggle can mean "open" to one receiver and "close" to
//! another: toggle resolution is always done by the receiver against its own state
//! (see [`TriggerKind::resolve`]).
//!
//! This crate does not own a tree and does not run an event loop. Hosts provide:
//!
//! - a [`ParentLookup`] so signals can travel along an explicit target → root chain, and
//! - optionally a [`TreeLookup`] so controls can address targets by selector.
//!
//! ## Delivery
//!
//! [`emit`] builds the propagation path for a target and walks it with [`dispatcher::run`]:
//!
//! - [`Delivery::Target`]: only the addressed node receives the signal.
//! - [`Delivery::Bubble`]: the target first, then each ancestor up to the root.
//!
//! Handlers return [`Outcome::Stop`] to abort propagation. The [`TriggerEvent`] also carries a
//! `handled` flag; a receiver that consumed the signal marks it so receivers further up the
//! chain can skip their default interpretation.
//!
//! ```
//! use dropkit_trigger::{Delivery, Outcome, ParentLookup, TriggerKind, emit};
//!
//! struct Chain;
//! impl ParentLookup<u32> for Chain {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node > 1).then(|| node - 1)
//!     }
//! }
//!
//! let mut open = false;
//! let mut seen = Vec::new();
//! let ev = emit(Some(3), TriggerKind::Toggle, Delivery::Bubble, &Chain, |node, ev| {
//!     seen.push(*node);
//!     if *node == 2 && !ev.is_handled() {
//!         open = ev.kind().resolve(open);
//!         ev.mark_handled();
//!     }
//!     Outcome::Continue
//! })
//! .unwrap();
//!
//! assert!(open);
//! assert!(ev.is_handled());
//! assert_eq!(seen, vec![3, 2, 1]);
//! ```
//!
//! ## Bindings
//!
//! [`TriggerBinding`] describes a control that turns host events (a click, or named events)
//! into signals, either bubbling from itself or delivered to the closest ancestor matching a
//! selector.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
pub mod dispatcher;
mod path;
mod types;

pub use binding::{CLICK, TriggerBinding};
pub use path::{closest, contains, emit, propagation_path};
pub use types::{
    Delivery, NoParent, Outcome, ParentLookup, TreeLookup, TriggerEvent, TriggerKind,
};
