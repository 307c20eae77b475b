// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dropkit_selection::{ItemHost, ValueChange};
use dropkit_trigger::ParentLookup;

use crate::error::BoxError;
use crate::geometry::{Boundaries, Placement};
use crate::scroll_lock::PageScrollLock;

/// Notification that a dropdown opened or closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpenChange {
    /// The new open state.
    pub is_opened: bool,
}

/// Rendering-layer side of a [`Dropdown`](crate::Dropdown).
///
/// Besides the item flags of [`ItemHost`] and the tree access of [`ParentLookup`], a host
/// measures the control, applies placements, owns the page-wide scroll lock, and receives
/// notifications. Everything except measurement and the scroll lock defaults to a no-op.
pub trait DropdownHost<K>: ItemHost<K> + ParentLookup<K> {
    /// Measure the control against the viewport.
    fn measure(&mut self) -> Result<Boundaries, BoxError>;

    /// The scroll lock shared by every dropdown on the page.
    fn page_scroll_lock(&mut self) -> &mut PageScrollLock;

    /// Enable or disable page scrolling. Called only when the shared lock changes state.
    fn set_page_scroll_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// Position and size the items container.
    fn apply_placement(&mut self, placement: &Placement) {
        let _ = placement;
    }

    /// Start delivering document-level clicks and focus changes to
    /// [`Dropdown::on_outside_interaction`](crate::Dropdown::on_outside_interaction).
    fn attach_outside_listeners(&mut self) {}

    /// Stop delivering document-level clicks and focus changes.
    fn detach_outside_listeners(&mut self) {}

    /// Start delivering viewport scrolls to
    /// [`Dropdown::on_viewport_scroll`](crate::Dropdown::on_viewport_scroll).
    fn subscribe_viewport_scroll(&mut self) {}

    /// Stop delivering viewport scrolls.
    fn unsubscribe_viewport_scroll(&mut self) {}

    /// Remove input focus from the control itself.
    fn blur_self(&mut self) {}

    /// Forward the joined value to a custom label, if the host renders one.
    fn set_label_value(&mut self, value: &str) {
        let _ = value;
    }

    /// Forward the open state to a custom label, if the host renders one.
    fn set_label_opened(&mut self, opened: bool) {
        let _ = opened;
    }

    /// The dropdown opened or closed.
    fn open_changed(&mut self, change: OpenChange) {
        let _ = change;
    }

    /// The selection changed.
    fn value_changed(&mut self, change: &ValueChange) {
        let _ = change;
    }
}
