// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: walk a propagation path and honor stop outcomes.
//!
//! The dispatcher is minimal:
//!
//! - [`Outcome`] only controls propagation (`Continue` vs `Stop`).
//! - The return value from [`run`] reports where propagation stopped (if at all).
//! - Higher‑level semantics such as "handled" live on the event payload you pass to
//!   [`run`], not in [`Outcome`].
//!
//! Paths are usually produced by [`propagation_path`](crate::propagation_path), which lists the
//! target first and the root last.
//!
//! ```
//! use dropkit_trigger::dispatcher;
//! use dropkit_trigger::{Outcome, TriggerEvent, TriggerKind};
//!
//! let path = [3_u32, 2, 1];
//! let mut ev = TriggerEvent::new(3_u32, TriggerKind::Close);
//! let mut seen = Vec::new();
//! let stopped = dispatcher::run(&path, &mut ev, |node, ev| {
//!     seen.push(*node);
//!     if *node == 2 {
//!         ev.mark_handled();
//!         return Outcome::Stop;
//!     }
//!     Outcome::Continue
//! });
//!
//! assert_eq!(stopped, Some(&2));
//! assert!(ev.is_handled());
//! assert_eq!(seen, vec![3, 2]);
//! ```

use crate::types::Outcome;

/// Run a handler over a propagation path and honor stop outcomes.
///
/// - [`Outcome::Continue`]: keep going.
/// - [`Outcome::Stop`]: abort propagation immediately (no later nodes).
///
/// Returns `None` if the full path was visited, or `Some(node)` with the node whose handler
/// stopped propagation.
pub fn run<'a, K, E>(
    path: &'a [K],
    event: &mut E,
    mut handler: impl FnMut(&K, &mut E) -> Outcome,
) -> Option<&'a K> {
    for node in path {
        match handler(node, event) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(node),
        }
    }
    None
}
