// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection engine.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use dropkit_trigger::{ParentLookup, TriggerKind};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::config::SelectionConfig;
use crate::item::{Item, ItemEntry, ItemHost, ItemState};
use crate::keyboard::{KeyOutcome, KeyPress, TAB};
use crate::navigation::{Direction, boundary, neighbor};

/// Notification carrying the selection set's values, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueChange {
    /// Selected values, oldest selection first.
    pub values: Vec<String>,
}

impl ValueChange {
    /// Values joined for display.
    pub fn joined(&self, separator: &str) -> String {
        self.values.join(separator)
    }
}

/// How [`SelectionEngine::change_selection`] modifies the selection set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionOp {
    /// Add the item; in single-select mode this replaces the selection.
    Add,
    /// Clear the selection, then add the item.
    AddOnly,
    /// Remove the item.
    Remove,
    /// `Remove` if the item is selected, `Add` otherwise.
    Toggle,
}

/// Options for [`SelectionEngine::set_active`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActivateOptions {
    /// Give the item input focus without scrolling.
    pub focus: bool,
    /// Smoothly scroll the item into view.
    pub scroll: bool,
}

impl Default for ActivateOptions {
    fn default() -> Self {
        Self {
            focus: false,
            scroll: true,
        }
    }
}

/// Options for [`SelectionEngine::switch_active`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwitchOptions {
    /// With no active item, enter from the boundary in the travel direction.
    pub switch_back: bool,
    /// Options used to activate the new item.
    pub activate: ActivateOptions,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self {
            switch_back: true,
            activate: ActivateOptions::default(),
        }
    }
}

/// Selection and active-item state over a list of host entries.
///
/// ## Usage
///
/// - Call [`rebuild`](Self::rebuild) with the host's entries whenever its content set changes.
///   Handles are only meaningful within the epoch of the last rebuild.
/// - Drive selection directly with [`change_selection`](Self::change_selection) and friends, or
///   feed raw input through [`on_keydown`](Self::on_keydown), [`on_click`](Self::on_click), and
///   [`on_pointer_over`](Self::on_pointer_over). Raw input is only interpreted while the
///   engine is open (see [`on_trigger`](Self::on_trigger)).
/// - Every operation that changes the selection returns a [`ValueChange`] for the host to
///   publish.
///
/// All state flags are written through an [`ItemHost`], so the rendering layer always mirrors
/// the engine.
#[derive(Clone, Debug)]
pub struct SelectionEngine<K> {
    config: SelectionConfig,
    items: Vec<Item<K>>,
    by_handle: HashMap<K, usize>,
    selected: SmallVec<[usize; 4]>,
    active: Option<usize>,
    opened: bool,
    epoch: u64,
}

/// [`SelectionOp`] with `Toggle` resolved.
#[derive(Copy, Clone)]
enum Resolved {
    Add { exclusive: bool },
    Remove,
}

impl<K: Copy + Eq + Hash + Debug> SelectionEngine<K> {
    /// Create an empty, closed engine.
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            by_handle: HashMap::new(),
            selected: SmallVec::new(),
            active: None,
            opened: false,
            epoch: 0,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Whether multi-select is enabled.
    pub fn is_multiple(&self) -> bool {
        self.config.multiple
    }

    /// Enable or disable input handling.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Switch between single- and multi-select.
    ///
    /// Leaving multi-select keeps only the most recent selection.
    pub fn set_multiple(
        &mut self,
        multiple: bool,
        host: &mut impl ItemHost<K>,
    ) -> Option<ValueChange> {
        self.config.multiple = multiple;
        if multiple || self.selected.len() <= 1 {
            return None;
        }
        let keep = self.selected.len() - 1;
        for idx in self.selected.drain(..keep) {
            let item = &mut self.items[idx];
            item.state.remove(ItemState::SELECTED);
            host.set_selected(&item.handle, false);
        }
        Some(self.value_change())
    }

    /// Number of rebuilds so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Items of the current epoch, in order.
    pub fn items(&self) -> &[Item<K>] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by handle.
    pub fn item(&self, handle: &K) -> Option<&Item<K>> {
        self.by_handle.get(handle).map(|&i| &self.items[i])
    }

    /// The selection set, oldest selection first.
    pub fn selected_items(&self) -> impl Iterator<Item = &Item<K>> + '_ {
        self.selected.iter().map(|&i| &self.items[i])
    }

    /// The active item, if any.
    pub fn active_item(&self) -> Option<&Item<K>> {
        self.active.map(|i| &self.items[i])
    }

    /// Whether the engine is currently open and interpreting input.
    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Values of the selection set, in selection order.
    ///
    /// An item without a value contributes an empty string.
    pub fn selected_values(&self) -> Vec<String> {
        self.selected
            .iter()
            .map(|&i| {
                let item = &self.items[i];
                item.value.clone().unwrap_or_else(|| {
                    log::warn!("item {:?} has no value; using \"\"", item.handle);
                    String::new()
                })
            })
            .collect()
    }

    fn value_change(&self) -> ValueChange {
        ValueChange {
            values: self.selected_values(),
        }
    }

    /// Replace the item list with a fresh scan of the host's entries.
    ///
    /// The active item and selection set are reset, checkbox placement is applied, and entries
    /// flagged selected or active are reconciled back into engine state. Returns the value
    /// change produced by reconciling, if any entry was flagged selected, or an empty change
    /// when a previous selection was dropped and nothing replaced it.
    pub fn rebuild<I>(&mut self, entries: I, host: &mut impl ItemHost<K>) -> Option<ValueChange>
    where
        I: IntoIterator<Item = ItemEntry<K>>,
    {
        let had_selection = !self.selected.is_empty();
        self.epoch += 1;
        self.active = None;
        self.selected.clear();
        self.items.clear();
        self.by_handle.clear();

        let checkbox = self.config.checkbox_side();
        let mut change = None;
        for entry in entries {
            if self.by_handle.contains_key(&entry.handle) {
                log::warn!("duplicate item handle {:?} ignored", entry.handle);
                continue;
            }
            let index = self.items.len();
            self.items.push(Item {
                handle: entry.handle,
                index,
                value: entry.value,
                state: ItemState::empty(),
            });
            self.by_handle.insert(entry.handle, index);
            host.set_checkbox(&entry.handle, checkbox);

            if entry.selected {
                change = Some(self.apply(Resolved::Add { exclusive: false }, index, host));
            }
            if entry.active {
                self.activate(index, ActivateOptions::default(), host);
            }
        }
        log::debug!(
            "rebuilt selection list: {} items, epoch {}",
            self.items.len(),
            self.epoch
        );
        if change.is_none() && had_selection {
            change = Some(self.value_change());
        }
        change
    }

    /// Modify the selection state of `item`.
    ///
    /// Returns `None` when `item` is not part of the current list.
    pub fn change_selection(
        &mut self,
        op: SelectionOp,
        item: &K,
        host: &mut impl ItemHost<K>,
    ) -> Option<ValueChange> {
        let index = *self.by_handle.get(item)?;
        Some(self.change_selection_at(op, index, host))
    }

    fn change_selection_at(
        &mut self,
        op: SelectionOp,
        index: usize,
        host: &mut impl ItemHost<K>,
    ) -> ValueChange {
        let resolved = match op {
            SelectionOp::Add => Resolved::Add { exclusive: false },
            SelectionOp::AddOnly => Resolved::Add { exclusive: true },
            SelectionOp::Remove => Resolved::Remove,
            SelectionOp::Toggle if self.items[index].is_selected() => Resolved::Remove,
            SelectionOp::Toggle => Resolved::Add { exclusive: false },
        };
        self.apply(resolved, index, host)
    }

    fn apply(&mut self, op: Resolved, index: usize, host: &mut impl ItemHost<K>) -> ValueChange {
        match op {
            Resolved::Add { exclusive } => {
                if exclusive || !self.config.multiple {
                    for &i in &self.selected {
                        let item = &mut self.items[i];
                        item.state.remove(ItemState::SELECTED);
                        host.set_selected(&item.handle, false);
                    }
                    self.selected.clear();
                }
                if !self.selected.contains(&index) {
                    self.selected.push(index);
                }
                let item = &mut self.items[index];
                item.state.insert(ItemState::SELECTED);
                host.set_selected(&item.handle, true);
            }
            Resolved::Remove => {
                self.selected.retain(|i| *i != index);
                let item = &mut self.items[index];
                item.state.remove(ItemState::SELECTED);
                host.set_selected(&item.handle, false);
            }
        }
        self.value_change()
    }

    /// Select only the item after the most recently selected one.
    ///
    /// With nothing selected, selects the first item. Does nothing at the last item.
    pub fn select_next_only(&mut self, host: &mut impl ItemHost<K>) -> Option<ValueChange> {
        self.select_only(Direction::Next, host)
    }

    /// Select only the item before the most recently selected one.
    ///
    /// With nothing selected, selects the last item. Does nothing at the first item.
    pub fn select_prev_only(&mut self, host: &mut impl ItemHost<K>) -> Option<ValueChange> {
        self.select_only(Direction::Prev, host)
    }

    fn select_only(
        &mut self,
        direction: Direction,
        host: &mut impl ItemHost<K>,
    ) -> Option<ValueChange> {
        let target = match self.selected.last() {
            Some(&last) => neighbor(last, self.items.len(), direction),
            None => boundary(self.items.len(), direction),
        }?;
        Some(self.change_selection_at(SelectionOp::AddOnly, target, host))
    }

    /// Make `item` the active item.
    ///
    /// Returns `false` if `item` is unknown or already active.
    pub fn set_active(
        &mut self,
        item: &K,
        options: ActivateOptions,
        host: &mut impl ItemHost<K>,
    ) -> bool {
        match self.by_handle.get(item) {
            Some(&index) => self.activate(index, options, host),
            None => false,
        }
    }

    fn activate(
        &mut self,
        index: usize,
        options: ActivateOptions,
        host: &mut impl ItemHost<K>,
    ) -> bool {
        if self.active == Some(index) {
            return false;
        }
        host.blur_focused();
        self.clear_active(host);

        let item = &mut self.items[index];
        item.state.insert(ItemState::ACTIVE);
        host.set_active(&item.handle, true);
        self.active = Some(index);

        if options.scroll {
            host.scroll_into_view(&item.handle);
        }
        if options.focus {
            host.focus(&item.handle, true);
        }
        true
    }

    /// Deactivate and blur the active item, if any.
    pub fn clear_active(&mut self, host: &mut impl ItemHost<K>) {
        if let Some(index) = self.active.take() {
            let item = &mut self.items[index];
            host.blur(&item.handle);
            item.state.remove(ItemState::ACTIVE);
            host.set_active(&item.handle, false);
        }
    }

    /// Move the active item one step in `direction`.
    ///
    /// Returns `true` if the active item changed.
    pub fn switch_active(
        &mut self,
        direction: Direction,
        options: SwitchOptions,
        host: &mut impl ItemHost<K>,
    ) -> bool {
        let target = match self.active {
            Some(index) => neighbor(index, self.items.len(), direction),
            None if options.switch_back => boundary(self.items.len(), direction),
            None => None,
        };
        match target {
            Some(index) => self.activate(index, options.activate, host),
            None => false,
        }
    }

    /// Apply an open/close signal relayed by the owning control.
    ///
    /// Returns the resulting open state.
    pub fn on_trigger(&mut self, kind: TriggerKind, host: &mut impl ItemHost<K>) -> bool {
        self.set_open(kind.resolve(self.opened), host);
        self.opened
    }

    /// Open or close the engine. Closing clears the active item.
    pub fn set_open(&mut self, open: bool, host: &mut impl ItemHost<K>) {
        if self.opened == open {
            return;
        }
        self.opened = open;
        if !open {
            self.clear_active(host);
        }
    }

    /// Interpret a key press while open.
    pub fn on_keydown(&mut self, press: KeyPress<'_>, host: &mut impl ItemHost<K>) -> KeyOutcome {
        if self.config.disabled || !self.opened {
            return KeyOutcome::IGNORED;
        }

        if press.key == TAB {
            let direction = if press.shift() {
                Direction::Prev
            } else {
                Direction::Next
            };
            let options = SwitchOptions {
                switch_back: false,
                activate: ActivateOptions {
                    focus: true,
                    ..ActivateOptions::default()
                },
            };
            return KeyOutcome::prevented(self.switch_active(direction, options, host));
        }
        if press.key == self.config.next_key {
            return KeyOutcome::prevented(self.switch_active(
                Direction::Next,
                SwitchOptions::default(),
                host,
            ));
        }
        if press.key == self.config.prev_key {
            return KeyOutcome::prevented(self.switch_active(
                Direction::Prev,
                SwitchOptions::default(),
                host,
            ));
        }
        if press.is_confirm() {
            if let Some(index) = self.active {
                let change = self.change_selection_at(SelectionOp::Toggle, index, host);
                return KeyOutcome {
                    default_prevented: true,
                    change: Some(change),
                };
            }
        }
        KeyOutcome::IGNORED
    }

    /// Index of the closest item at or above `target`.
    fn item_index_for(
        &self,
        target: &K,
        parents: &(impl ParentLookup<K> + ?Sized),
    ) -> Option<usize> {
        let mut cur = *target;
        loop {
            if let Some(&index) = self.by_handle.get(&cur) {
                return Some(index);
            }
            cur = parents.parent_of(&cur)?;
        }
    }

    /// Handle of the closest item at or above `target`.
    pub fn item_for_target(
        &self,
        target: &K,
        parents: &(impl ParentLookup<K> + ?Sized),
    ) -> Option<K> {
        self.item_index_for(target, parents)
            .map(|index| self.items[index].handle)
    }

    /// Toggle the item containing a clicked node.
    pub fn on_click(
        &mut self,
        target: &K,
        parents: &(impl ParentLookup<K> + ?Sized),
        host: &mut impl ItemHost<K>,
    ) -> Option<ValueChange> {
        if self.config.disabled || !self.opened {
            return None;
        }
        let index = self.item_index_for(target, parents)?;
        Some(self.change_selection_at(SelectionOp::Toggle, index, host))
    }

    /// Activate the item containing a hovered node.
    ///
    /// Returns `true` if the active item changed.
    pub fn on_pointer_over(
        &mut self,
        target: &K,
        parents: &(impl ParentLookup<K> + ?Sized),
        host: &mut impl ItemHost<K>,
    ) -> bool {
        if self.config.disabled || !self.opened {
            return false;
        }
        match self.item_index_for(target, parents) {
            Some(index) => self.activate(index, ActivateOptions::default(), host),
            None => false,
        }
    }
}

impl<K: Copy + Eq + Hash + Debug> Default for SelectionEngine<K> {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}
