// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Items, item declarations, and the host side of item state.

use alloc::string::String;
use core::fmt::Debug;

use crate::config::CheckboxSide;
use crate::error::SetupError;

bitflags::bitflags! {
    /// Per-item interaction state owned by the selection engine.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemState: u8 {
        /// Item is a member of the selection set.
        const SELECTED = 0b0000_0001;
        /// Item is the keyboard/pointer activation candidate.
        const ACTIVE   = 0b0000_0010;
    }
}

/// One selectable entry of the current rebuild epoch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<K> {
    pub(crate) handle: K,
    pub(crate) index: usize,
    pub(crate) value: Option<String>,
    pub(crate) state: ItemState,
}

impl<K: Copy> Item<K> {
    /// Host handle of the entry.
    pub const fn handle(&self) -> K {
        self.handle
    }

    /// Position in the list.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declared value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Current state flags.
    pub const fn state(&self) -> ItemState {
        self.state
    }

    /// Whether the item is in the selection set.
    pub const fn is_selected(&self) -> bool {
        self.state.contains(ItemState::SELECTED)
    }

    /// Whether the item is the active item.
    pub const fn is_active(&self) -> bool {
        self.state.contains(ItemState::ACTIVE)
    }
}

/// What the host reports for an entry when the engine rescans its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemEntry<K> {
    /// Opaque host handle.
    pub handle: K,
    /// Declared value.
    pub value: Option<String>,
    /// Entry is currently flagged selected on the host side.
    pub selected: bool,
    /// Entry is currently flagged active on the host side.
    pub active: bool,
}

impl<K> ItemEntry<K> {
    /// An unflagged entry.
    pub fn new(handle: K, value: impl Into<String>) -> Self {
        Self {
            handle,
            value: Some(value.into()),
            selected: false,
            active: false,
        }
    }

    /// Mark the entry selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Mark the entry active.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

/// User-facing declaration of an entry, checked once before it joins a list.
///
/// `selected` is managed by the engine. Declarations must use `default_selected` to
/// pre-select an entry; setting `selected` is rejected by [`ItemDecl::initialize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemDecl<K> {
    /// Opaque host handle.
    pub handle: K,
    /// Value reported in value-change notifications.
    pub value: Option<String>,
    /// Pre-select the entry.
    pub default_selected: bool,
    /// Engine-managed flag; must stay `false` in declarations.
    pub selected: bool,
    /// Start as the active item.
    pub active: bool,
}

impl<K: Debug> ItemDecl<K> {
    /// Declare an entry without a value.
    pub fn new(handle: K) -> Self {
        Self {
            handle,
            value: None,
            default_selected: false,
            selected: false,
            active: false,
        }
    }

    /// Set the value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Pre-select the entry.
    #[must_use]
    pub fn with_default_selected(mut self, default_selected: bool) -> Self {
        self.default_selected = default_selected;
        self
    }

    /// Validate the declaration and produce the entry the engine rescans.
    ///
    /// A missing value is only a warning: the entry still participates and reads as `""`.
    pub fn initialize(self) -> Result<ItemEntry<K>, SetupError> {
        if self.selected {
            return Err(SetupError::InternallyManaged {
                flag: "selected",
                instead: "default_selected",
            });
        }
        if self.value.as_deref().is_none_or(str::is_empty) {
            log::warn!("value is required for item {:?}", self.handle);
        }
        Ok(ItemEntry {
            handle: self.handle,
            value: self.value,
            selected: self.default_selected,
            active: self.active,
        })
    }
}

/// Rendering-layer side of item state.
///
/// The engine writes flag changes and presentation requests through this trait. Every method
/// defaults to a no-op, and `()` implements it for hosts that only read engine state.
pub trait ItemHost<K> {
    /// Reflect the `selected` flag.
    fn set_selected(&mut self, item: &K, selected: bool) {
        let _ = (item, selected);
    }

    /// Reflect the `active` flag.
    fn set_active(&mut self, item: &K, active: bool) {
        let _ = (item, active);
    }

    /// Apply checkbox placement.
    fn set_checkbox(&mut self, item: &K, side: Option<CheckboxSide>) {
        let _ = (item, side);
    }

    /// Give input focus to `item`; `prevent_scroll` asks the host not to scroll for it.
    fn focus(&mut self, item: &K, prevent_scroll: bool) {
        let _ = (item, prevent_scroll);
    }

    /// Remove input focus from `item`.
    fn blur(&mut self, item: &K) {
        let _ = item;
    }

    /// Remove input focus from whatever currently holds it.
    fn blur_focused(&mut self) {}

    /// Smoothly scroll `item` into view (nearest block edge).
    fn scroll_into_view(&mut self, item: &K) {
        let _ = item;
    }
}

impl<K> ItemHost<K> for () {}

impl<K, H: ItemHost<K> + ?Sized> ItemHost<K> for &mut H {
    fn set_selected(&mut self, item: &K, selected: bool) {
        (**self).set_selected(item, selected);
    }
    fn set_active(&mut self, item: &K, active: bool) {
        (**self).set_active(item, active);
    }
    fn set_checkbox(&mut self, item: &K, side: Option<CheckboxSide>) {
        (**self).set_checkbox(item, side);
    }
    fn focus(&mut self, item: &K, prevent_scroll: bool) {
        (**self).focus(item, prevent_scroll);
    }
    fn blur(&mut self, item: &K) {
        (**self).blur(item);
    }
    fn blur_focused(&mut self) {
        (**self).blur_focused();
    }
    fn scroll_into_view(&mut self, item: &K) {
        (**self).scroll_into_view(item);
    }
}
