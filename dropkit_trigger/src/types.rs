// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signal values and the tree lookups used to deliver them.

/// What a trigger signal asks its receiver to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Become open.
    Open,
    /// Become closed.
    Close,
    /// Flip the receiver's own open state.
    Toggle,
}

impl TriggerKind {
    /// Resolve this signal against a receiver's current open state.
    ///
    /// Returns the state the receiver should end up in. `Toggle` depends on the receiver, so the
    /// same signal can open one control and close another.
    #[must_use]
    pub const fn resolve(self, currently_open: bool) -> bool {
        match self {
            Self::Open => true,
            Self::Close => false,
            Self::Toggle => !currently_open,
        }
    }

    /// The non-toggle signal that drives a receiver into `open`.
    #[must_use]
    pub const fn for_state(open: bool) -> Self {
        if open { Self::Open } else { Self::Close }
    }
}

/// A signal in flight.
///
/// `kind` and `target` are fixed at creation. Receivers may only set the `handled` flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerEvent<K> {
    kind: TriggerKind,
    target: K,
    handled: bool,
}

impl<K> TriggerEvent<K> {
    /// Create an unhandled signal addressed at `target`.
    pub const fn new(target: K, kind: TriggerKind) -> Self {
        Self {
            kind,
            target,
            handled: false,
        }
    }

    /// The requested operation.
    pub const fn kind(&self) -> TriggerKind {
        self.kind
    }

    /// The node the signal was addressed at.
    pub const fn target(&self) -> &K {
        &self.target
    }

    /// Whether a receiver has already interpreted this signal.
    pub const fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark the signal as interpreted so later receivers skip their default behavior.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}

/// Propagation control returned by signal handlers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep delivering along the path.
    Continue,
    /// Abort propagation immediately.
    Stop,
}

/// How far a signal travels from its target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Delivery {
    /// Only the target receives the signal.
    Target,
    /// The target, then each ancestor up to the root.
    #[default]
    Bubble,
}

/// Provides parent relationships for path reconstruction.
pub trait ParentLookup<K> {
    /// Return the parent of `node`, or `None` at the root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A [`ParentLookup`] where every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    fn parent_of(&self, _: &K) -> Option<K> {
        None
    }
}

/// Selector-aware tree access for controls that address nodes by selector.
///
/// Selector syntax is owned by the host; this crate only passes the string through.
pub trait TreeLookup<K>: ParentLookup<K> {
    /// Whether `node` matches `selector`.
    fn matches(&self, node: &K, selector: &str) -> bool;

    /// First child element of `node`, if any.
    fn first_child(&self, node: &K) -> Option<K>;

    /// First descendant of `root` (excluding `root`) in document order that matches `selector`.
    fn query(&self, root: &K, selector: &str) -> Option<K>;
}
