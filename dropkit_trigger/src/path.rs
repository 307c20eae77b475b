// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path reconstruction and signal emission.

use alloc::vec;
use alloc::vec::Vec;

use crate::dispatcher;
use crate::types::{Delivery, Outcome, ParentLookup, TreeLookup, TriggerEvent, TriggerKind};

/// Collect `target` and its ancestors, target first.
///
/// The caller guarantees acyclic ancestry.
pub fn propagation_path<K: Copy>(target: K, parents: &(impl ParentLookup<K> + ?Sized)) -> Vec<K> {
    let mut out = Vec::new();
    let mut cur = target;
    loop {
        out.push(cur);
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => break,
        }
    }
    out
}

/// Whether `node` is `ancestor` or lies inside its subtree.
pub fn contains<K: Copy + Eq>(
    ancestor: &K,
    node: &K,
    parents: &(impl ParentLookup<K> + ?Sized),
) -> bool {
    let mut cur = *node;
    loop {
        if cur == *ancestor {
            return true;
        }
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => return false,
        }
    }
}

/// The closest node to `origin` (inclusive) that matches `selector`, walking towards the root.
pub fn closest<K: Copy>(
    origin: K,
    selector: &str,
    tree: &(impl TreeLookup<K> + ?Sized),
) -> Option<K> {
    let mut cur = origin;
    loop {
        if tree.matches(&cur, selector) {
            return Some(cur);
        }
        cur = tree.parent_of(&cur)?;
    }
}

/// Dispatch `kind` at `target`.
///
/// Does nothing and returns `None` when `target` is absent. Otherwise the signal is delivered
/// according to `delivery` and the event is returned, so the sender can inspect whether a
/// receiver handled it.
pub fn emit<K, P, F>(
    target: Option<K>,
    kind: TriggerKind,
    delivery: Delivery,
    parents: &P,
    handler: F,
) -> Option<TriggerEvent<K>>
where
    K: Copy,
    P: ParentLookup<K> + ?Sized,
    F: FnMut(&K, &mut TriggerEvent<K>) -> Outcome,
{
    let target = target?;
    let path = match delivery {
        Delivery::Target => vec![target],
        Delivery::Bubble => propagation_path(target, parents),
    };
    let mut event = TriggerEvent::new(target, kind);
    dispatcher::run(&path, &mut event, handler);
    Some(event)
}
