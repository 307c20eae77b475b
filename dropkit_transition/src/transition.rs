// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The staged transition state machine.

use core::fmt::Debug;
use core::time::Duration;

use dropkit_trigger::{
    Delivery, Outcome, ParentLookup, TreeLookup, TriggerEvent, TriggerKind, emit,
};

use crate::config::TransitionConfig;

/// Staged open state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Fully closed.
    #[default]
    Closed,
    /// Waiting for the open delay to elapse.
    Opening,
    /// Fully open.
    Opened,
    /// Waiting for the close delay to elapse.
    Closing,
}

impl TransitionState {
    /// Whether a toggle received in this state opens.
    pub const fn toggle_opens(self) -> bool {
        matches!(self, Self::Closed | Self::Closing)
    }

    /// Attribute-style name of the state (`"opening"`, `"closed"`, …).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Opened => "opened",
            Self::Closing => "closing",
        }
    }
}

/// A scheduled relay.
///
/// Timers are never cancelled. A timer only takes effect if no newer signal arrived since it
/// was scheduled; see [`DelayedTransition::fire`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timer {
    generation: u64,
    kind: TriggerKind,
    due: u64,
}

impl Timer {
    /// Generation of the signal that scheduled this timer.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// [`TriggerKind::Open`] or [`TriggerKind::Close`].
    pub const fn kind(&self) -> TriggerKind {
        self.kind
    }

    /// Host time (milliseconds) at which the timer is due.
    pub const fn due(&self) -> u64 {
        self.due
    }
}

/// Stages open/close signals behind configurable delays.
///
/// Every incoming signal bumps a generation counter and schedules a [`Timer`]. When a timer
/// fires with a stale generation it is dropped; only the most recent signal ever reaches the
/// descendant.
#[derive(Clone, Debug, Default)]
pub struct DelayedTransition {
    config: TransitionConfig,
    state: TransitionState,
    generation: u64,
    pending: Option<Timer>,
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

impl DelayedTransition {
    /// Create a closed transition.
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Generation of the most recent signal.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stage a signal received at host time `now` (milliseconds).
    ///
    /// Open, or Toggle while closed or closing, moves to `Opening`; anything else moves to
    /// `Closing`. Any timer scheduled earlier becomes stale.
    pub fn on_trigger(&mut self, kind: TriggerKind, now: u64) -> Timer {
        self.generation += 1;
        let opens = match kind {
            TriggerKind::Open => true,
            TriggerKind::Close => false,
            TriggerKind::Toggle => self.state.toggle_opens(),
        };
        let (state, relay, delay) = if opens {
            let delay = self.config.open_delay;
            (TransitionState::Opening, TriggerKind::Open, delay)
        } else {
            let delay = self.config.close_delay;
            (TransitionState::Closing, TriggerKind::Close, delay)
        };
        self.state = state;

        let timer = Timer {
            generation: self.generation,
            kind: relay,
            due: now.saturating_add(millis(delay)),
        };
        if let Some(stale) = self.pending.replace(timer) {
            log::trace!(
                "superseding {:?} relay of generation {}",
                stale.kind,
                stale.generation
            );
        }
        log::debug!(
            "transition {} (generation {})",
            state.as_str(),
            self.generation
        );
        timer
    }

    /// Fire a timer scheduled by [`on_trigger`](Self::on_trigger).
    ///
    /// Returns the signal to relay and finalizes the state when `timer` is still current.
    /// Stale timers, and timers that already fired, return `None`.
    pub fn fire(&mut self, timer: Timer) -> Option<TriggerKind> {
        if self.pending != Some(timer) {
            log::trace!(
                "dropping stale {:?} relay of generation {} (current {})",
                timer.kind,
                timer.generation,
                self.generation
            );
            return None;
        }
        self.pending = None;
        self.state = match timer.kind {
            TriggerKind::Open => TransitionState::Opened,
            _ => TransitionState::Closed,
        };
        log::debug!(
            "transition {} (generation {})",
            self.state.as_str(),
            self.generation
        );
        Some(timer.kind)
    }

    /// Fire the current timer if it is due at host time `now`.
    ///
    /// For hosts that poll rather than keep their own timers.
    pub fn poll(&mut self, now: u64) -> Option<TriggerKind> {
        let timer = self.pending.filter(|t| t.due <= now)?;
        self.fire(timer)
    }

    /// When the host should next call [`poll`](Self::poll), if anything is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.map(|t| t.due)
    }

    /// Whether a signal delivered at `node` reaches this transition hosted at `host`.
    ///
    /// Signals are observed at the host itself, and at the host's parent when `watch_parent`
    /// is set.
    pub fn observes<K: Copy + PartialEq>(
        &self,
        node: &K,
        host: &K,
        parents: &(impl ParentLookup<K> + ?Sized),
    ) -> bool {
        node == host
            || (self.config.watch_parent && parents.parent_of(host).as_ref() == Some(node))
    }

    /// The descendant of `host` that receives relays.
    ///
    /// A configured selector that matches nothing is logged as a warning.
    pub fn resolve_descendant<K: Copy + Debug>(
        &self,
        host: &K,
        tree: &(impl TreeLookup<K> + ?Sized),
    ) -> Option<K> {
        match &self.config.child_selector {
            Some(selector) => {
                let target = tree.query(host, selector);
                if target.is_none() {
                    log::warn!(
                        "child selector `{selector}` does not match any descendant of {host:?}"
                    );
                }
                target
            }
            None => tree.first_child(host),
        }
    }

    /// Deliver `kind` to the resolved descendant only.
    ///
    /// Returns `None` without dispatching when no descendant resolves.
    pub fn relay<K, T, F>(
        &self,
        kind: TriggerKind,
        host: &K,
        tree: &T,
        handler: F,
    ) -> Option<TriggerEvent<K>>
    where
        K: Copy + Debug,
        T: TreeLookup<K> + ?Sized,
        F: FnMut(&K, &mut TriggerEvent<K>) -> Outcome,
    {
        let target = self.resolve_descendant(host, tree);
        emit(target, kind, Delivery::Target, tree, handler)
    }
}
