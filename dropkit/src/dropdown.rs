// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown orchestrator.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use dropkit_selection::keyboard::ESCAPE;
use dropkit_selection::{
    ItemEntry, KeyOutcome, KeyPress, SelectionEngine, SelectionOp, ValueChange,
};
use dropkit_trigger::{NoParent, TriggerEvent, TriggerKind, contains};

use crate::config::{DropdownConfig, OpenBehavior};
use crate::error::DropdownError;
use crate::geometry::Placement;
use crate::host::{DropdownHost, OpenChange};
use crate::label::SelectLabel;

/// Separator used to join selected values for display.
pub const VALUE_SEPARATOR: &str = ", ";

/// A dropdown control: open state, placement, and the selection engine it wraps.
///
/// All side effects go through a [`DropdownHost`] passed to each call. Opening and closing
/// happen in [`set_open`](Self::set_open), which applies listeners, placement, and
/// notifications in a fixed order; every other entry point funnels into it.
///
/// Close a dropdown before discarding it so its outside listeners, viewport subscription, and
/// scroll-lock claim are released.
///
/// A dropdown owns its listener, subscription, and lock claims, so it cannot be cloned:
///
/// ```compile_fail
/// use dropkit::{Dropdown, DropdownConfig};
///
/// let dropdown: Dropdown<u32> = Dropdown::new(1, DropdownConfig::default());
/// let _copy = dropdown.clone();
/// ```
#[derive(Debug)]
pub struct Dropdown<K> {
    root: K,
    close_on_select: Option<bool>,
    open_behavior: OpenBehavior,
    fixed_position: bool,
    engine: SelectionEngine<K>,
    opened: bool,
    values: Vec<String>,
    label: SelectLabel,
    placement: Option<Placement>,
    listening_outside: bool,
    scroll_subscribed: bool,
    holds_scroll_lock: bool,
}

impl<K: Copy + Eq + Hash + Debug> Dropdown<K> {
    /// Create a closed dropdown rooted at host node `root`.
    pub fn new(root: K, config: DropdownConfig) -> Self {
        let DropdownConfig {
            close_on_select,
            open_behavior,
            fixed_position,
            selection,
        } = config;
        Self {
            root,
            close_on_select,
            open_behavior,
            fixed_position,
            engine: SelectionEngine::new(selection),
            opened: false,
            values: Vec::new(),
            label: SelectLabel::default(),
            placement: None,
            listening_outside: false,
            scroll_subscribed: false,
            holds_scroll_lock: false,
        }
    }

    /// Host node of the control.
    pub fn root(&self) -> K {
        self.root
    }

    /// The wrapped selection engine.
    pub fn selection(&self) -> &SelectionEngine<K> {
        &self.engine
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Selected values joined with [`VALUE_SEPARATOR`].
    pub fn value(&self) -> String {
        self.values.join(VALUE_SEPARATOR)
    }

    /// Selected values as last reported by the selection engine.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The built-in label.
    pub fn label(&self) -> &SelectLabel {
        &self.label
    }

    /// The built-in label, for changing its placeholder.
    pub fn label_mut(&mut self) -> &mut SelectLabel {
        &mut self.label
    }

    /// The most recently applied placement.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Positioning policy.
    pub fn open_behavior(&self) -> OpenBehavior {
        self.open_behavior
    }

    /// Change the positioning policy. Takes effect on the next open.
    pub fn set_open_behavior(&mut self, open_behavior: OpenBehavior) {
        self.open_behavior = open_behavior;
    }

    /// Use viewport-relative positioning. Takes effect on the next placement.
    pub fn set_fixed_position(&mut self, fixed_position: bool) {
        self.fixed_position = fixed_position;
    }

    /// Override the close-on-select policy, or `None` to follow the selection mode.
    pub fn set_close_on_select(&mut self, close_on_select: Option<bool>) {
        self.close_on_select = close_on_select;
    }

    /// Whether a selection change closes the dropdown.
    ///
    /// Follows the explicit override if set; otherwise `true` exactly in single-select mode.
    pub fn close_on_select(&self) -> bool {
        self.close_on_select
            .unwrap_or_else(|| !self.engine.is_multiple())
    }

    /// Enable or disable item input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.engine.set_disabled(disabled);
    }

    /// Switch the selection engine between single- and multi-select.
    pub fn set_multiple(
        &mut self,
        multiple: bool,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        match self.engine.set_multiple(multiple, host) {
            Some(change) => self.on_value_change(change, host),
            None => Ok(()),
        }
    }

    /// Handle a trigger signal addressed at this control.
    ///
    /// Toggle resolves against the current open state. The signal is always marked handled and
    /// the control gives up input focus.
    pub fn on_trigger(
        &mut self,
        event: &mut TriggerEvent<K>,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        event.mark_handled();
        host.blur_self();
        self.set_open(event.kind().resolve(self.opened), host)
    }

    /// Open or close the dropdown.
    ///
    /// Does nothing if the state is unchanged. Otherwise, in order:
    /// 1. outside-interaction listeners are attached (open) or detached (close);
    /// 2. the positioning policy runs: the page scroll lock is claimed or released for
    ///    [`OpenBehavior::NoScroll`], placement is recomputed, and the viewport-scroll
    ///    subscription is toggled for [`OpenBehavior::Dynamic`];
    /// 3. the selection engine is opened or closed;
    /// 4. the label and [`DropdownHost::open_changed`] are notified.
    ///
    /// A measurement failure in step 2 does not stop steps 3 and 4; it is returned afterwards.
    pub fn set_open(
        &mut self,
        open: bool,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        if self.opened == open {
            return Ok(());
        }
        self.opened = open;
        log::debug!(
            "dropdown {:?} {}",
            self.root,
            if open { "opened" } else { "closed" }
        );

        if open && !self.listening_outside {
            host.attach_outside_listeners();
            self.listening_outside = true;
        } else if !open && self.listening_outside {
            host.detach_outside_listeners();
            self.listening_outside = false;
        }

        let placed = self.apply_open_behavior(open, host);

        self.engine.on_trigger(TriggerKind::for_state(open), host);

        self.label.set_opened(open);
        host.set_label_opened(open);
        host.open_changed(OpenChange { is_opened: open });
        placed
    }

    fn apply_open_behavior(
        &mut self,
        open: bool,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        let no_scroll = self.open_behavior == OpenBehavior::NoScroll;
        if open && no_scroll && !self.holds_scroll_lock {
            self.holds_scroll_lock = true;
            if host.page_scroll_lock().acquire() {
                host.set_page_scroll_enabled(false);
            }
        } else if !open && self.holds_scroll_lock {
            self.holds_scroll_lock = false;
            if host.page_scroll_lock().release() {
                host.set_page_scroll_enabled(true);
            }
        }

        let placed = self.compute_placement(host).map(drop);

        let dynamic = self.open_behavior == OpenBehavior::Dynamic;
        if open && dynamic && !self.scroll_subscribed {
            host.subscribe_viewport_scroll();
            self.scroll_subscribed = true;
        } else if !open && self.scroll_subscribed {
            host.unsubscribe_viewport_scroll();
            self.scroll_subscribed = false;
        }
        placed
    }

    /// Measure the control, compute its placement, and apply it.
    pub fn compute_placement(
        &mut self,
        host: &mut impl DropdownHost<K>,
    ) -> Result<Placement, DropdownError> {
        let boundaries = host
            .measure()
            .map_err(|source| DropdownError::Measure { source })?;
        let placement = Placement::compute(&boundaries, self.fixed_position);
        host.apply_placement(&placement);
        self.placement = Some(placement);
        Ok(placement)
    }

    /// A document-level click or focus change reached `target` while listeners are attached.
    ///
    /// Closes the dropdown when `target` lies outside the control.
    pub fn on_outside_interaction(
        &mut self,
        target: &K,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        if self.opened && !contains(&self.root, target, &*host) {
            return self.set_open(false, host);
        }
        Ok(())
    }

    /// The viewport scrolled; recompute placement if subscribed.
    pub fn on_viewport_scroll(
        &mut self,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        if self.scroll_subscribed {
            self.compute_placement(host)?;
        }
        Ok(())
    }

    /// Publish a selection change and apply the close-on-select policy.
    pub fn on_value_change(
        &mut self,
        change: ValueChange,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        let value = change.joined(VALUE_SEPARATOR);
        self.label.set_value(&value);
        host.set_label_value(&value);
        host.value_changed(&change);
        self.values = change.values;

        if self.close_on_select() {
            self.set_open(false, host)?;
        }
        Ok(())
    }

    /// Modify the selection directly, publishing any change.
    pub fn change_selection(
        &mut self,
        op: SelectionOp,
        item: &K,
        host: &mut impl DropdownHost<K>,
    ) -> Result<Option<ValueChange>, DropdownError> {
        let change = self.engine.change_selection(op, item, host);
        if let Some(change) = &change {
            self.on_value_change(change.clone(), host)?;
        }
        Ok(change)
    }

    /// The set of items changed; rebuild the selection engine from `entries`.
    pub fn on_content_change<I>(
        &mut self,
        entries: I,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError>
    where
        I: IntoIterator<Item = ItemEntry<K>>,
    {
        match self.engine.rebuild(entries, host) {
            Some(change) => self.on_value_change(change, host),
            None => Ok(()),
        }
    }

    /// A key was pressed somewhere in the document.
    ///
    /// While closed and focused, Enter and Space open the dropdown and the navigation keys
    /// move the selection without opening. While open, Escape closes and every other key goes
    /// to the selection engine.
    pub fn on_keydown(
        &mut self,
        press: KeyPress<'_>,
        has_focus: bool,
        host: &mut impl DropdownHost<K>,
    ) -> Result<KeyOutcome, DropdownError> {
        if !self.opened {
            if !has_focus {
                return Ok(KeyOutcome::IGNORED);
            }
            if press.is_confirm() {
                self.set_open(true, host)?;
                return Ok(KeyOutcome {
                    default_prevented: true,
                    change: None,
                });
            }
            let is_next = press.key == self.engine.config().next_key;
            let is_prev = press.key == self.engine.config().prev_key;
            let change = if is_next {
                self.engine.select_next_only(host)
            } else if is_prev {
                self.engine.select_prev_only(host)
            } else {
                return Ok(KeyOutcome::IGNORED);
            };
            if let Some(change) = &change {
                self.on_value_change(change.clone(), host)?;
            }
            return Ok(KeyOutcome {
                default_prevented: true,
                change,
            });
        }

        if press.key == ESCAPE {
            self.set_open(false, host)?;
            return Ok(KeyOutcome {
                default_prevented: true,
                change: None,
            });
        }
        let outcome = self.engine.on_keydown(press, host);
        if let Some(change) = &outcome.change {
            self.on_value_change(change.clone(), host)?;
        }
        Ok(outcome)
    }

    /// A click landed on `target` inside the items container.
    pub fn on_item_click(
        &mut self,
        target: &K,
        host: &mut impl DropdownHost<K>,
    ) -> Result<(), DropdownError> {
        let Some(item) = self.engine.item_for_target(target, &*host) else {
            return Ok(());
        };
        match self.engine.on_click(&item, &NoParent, host) {
            Some(change) => self.on_value_change(change, host),
            None => Ok(()),
        }
    }

    /// The pointer moved over `target` inside the items container.
    ///
    /// Returns `true` if the active item changed.
    pub fn on_item_pointer_over(&mut self, target: &K, host: &mut impl DropdownHost<K>) -> bool {
        match self.engine.item_for_target(target, &*host) {
            Some(item) => self.engine.on_pointer_over(&item, &NoParent, host),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::geometry::{Boundaries, Inset, YAxis};
    use crate::label::DEFAULT_PLACEHOLDER;
    use crate::scroll_lock::PageScrollLock;
    use alloc::string::ToString;
    use alloc::vec;
    use dropkit_selection::{ItemHost, SelectionConfig};
    use dropkit_trigger::ParentLookup;
    use kurbo::Rect;

    #[derive(Clone, Debug, PartialEq)]
    enum Effect {
        Attach,
        Detach,
        Subscribe,
        Unsubscribe,
        PageScroll(bool),
        Placed(YAxis),
        Label(String),
        LabelOpened(bool),
        Open(bool),
        Value(Vec<String>),
        BlurSelf,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("layout is not ready")]
    struct NotLaidOut;

    // 1 (control) ── 2 (items container) ─┬─ 10, 11, 12 (items)
    //                                      └─ 100 inside item 10
    // 99 lives outside the control.
    struct Page {
        lock: PageScrollLock,
        effects: Vec<Effect>,
        element: Rect,
        fail_measure: bool,
    }

    impl Page {
        fn new() -> Self {
            Self {
                lock: PageScrollLock::new(),
                effects: Vec::new(),
                element: Rect::new(0.0, 100.0, 200.0, 140.0),
                fail_measure: false,
            }
        }

        fn take(&mut self) -> Vec<Effect> {
            core::mem::take(&mut self.effects)
        }

        fn count(&self, effect: &Effect) -> usize {
            self.effects.iter().filter(|e| *e == effect).count()
        }
    }

    impl ItemHost<u32> for Page {}

    impl ParentLookup<u32> for Page {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                2 => Some(1),
                10..=12 => Some(2),
                100 => Some(10),
                _ => None,
            }
        }
    }

    impl DropdownHost<u32> for Page {
        fn measure(&mut self) -> Result<Boundaries, BoxError> {
            if self.fail_measure {
                return Err(NotLaidOut.into());
            }
            Ok(Boundaries::new(
                Rect::new(0.0, 0.0, 800.0, 600.0),
                self.element,
            ))
        }
        fn page_scroll_lock(&mut self) -> &mut PageScrollLock {
            &mut self.lock
        }
        fn set_page_scroll_enabled(&mut self, enabled: bool) {
            self.effects.push(Effect::PageScroll(enabled));
        }
        fn apply_placement(&mut self, placement: &Placement) {
            self.effects.push(Effect::Placed(placement.y_axis));
        }
        fn attach_outside_listeners(&mut self) {
            self.effects.push(Effect::Attach);
        }
        fn detach_outside_listeners(&mut self) {
            self.effects.push(Effect::Detach);
        }
        fn subscribe_viewport_scroll(&mut self) {
            self.effects.push(Effect::Subscribe);
        }
        fn unsubscribe_viewport_scroll(&mut self) {
            self.effects.push(Effect::Unsubscribe);
        }
        fn blur_self(&mut self) {
            self.effects.push(Effect::BlurSelf);
        }
        fn set_label_value(&mut self, value: &str) {
            self.effects.push(Effect::Label(value.to_string()));
        }
        fn set_label_opened(&mut self, opened: bool) {
            self.effects.push(Effect::LabelOpened(opened));
        }
        fn open_changed(&mut self, change: OpenChange) {
            self.effects.push(Effect::Open(change.is_opened));
        }
        fn value_changed(&mut self, change: &ValueChange) {
            self.effects.push(Effect::Value(change.values.clone()));
        }
    }

    fn items() -> Vec<ItemEntry<u32>> {
        vec![
            ItemEntry::new(10, "red"),
            ItemEntry::new(11, "green"),
            ItemEntry::new(12, "blue"),
        ]
    }

    fn dropdown(config: DropdownConfig, page: &mut Page) -> Dropdown<u32> {
        let mut d = Dropdown::new(1, config);
        d.on_content_change(items(), page).unwrap();
        page.take();
        d
    }

    fn multiple() -> DropdownConfig {
        DropdownConfig::default().with_selection(SelectionConfig::default().with_multiple(true))
    }

    #[test]
    fn opening_applies_effects_in_order() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        d.set_open(true, &mut page).unwrap();
        assert_eq!(
            page.take(),
            vec![
                Effect::Attach,
                Effect::Placed(YAxis::Bottom),
                Effect::LabelOpened(true),
                Effect::Open(true),
            ]
        );
        assert!(d.selection().is_open());
        assert!(d.label().is_opened());

        d.set_open(true, &mut page).unwrap();
        assert!(page.take().is_empty());

        d.set_open(false, &mut page).unwrap();
        assert_eq!(
            page.take(),
            vec![
                Effect::Detach,
                Effect::Placed(YAxis::Bottom),
                Effect::LabelOpened(false),
                Effect::Open(false),
            ]
        );
        assert!(!d.selection().is_open());
    }

    #[test]
    fn trigger_resolves_toggle_and_marks_handled() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        let mut event = TriggerEvent::new(1, TriggerKind::Toggle);
        d.on_trigger(&mut event, &mut page).unwrap();
        assert!(event.is_handled());
        assert!(d.is_open());
        assert_eq!(page.take()[0], Effect::BlurSelf);

        let mut event = TriggerEvent::new(1, TriggerKind::Open);
        d.on_trigger(&mut event, &mut page).unwrap();
        assert!(d.is_open());
        let mut event = TriggerEvent::new(1, TriggerKind::Toggle);
        d.on_trigger(&mut event, &mut page).unwrap();
        assert!(!d.is_open());
    }

    #[test]
    fn single_select_closes_on_select() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        d.set_open(true, &mut page).unwrap();
        page.take();

        d.on_item_click(&100, &mut page).unwrap();
        assert!(!d.is_open());
        assert_eq!(d.value(), "red");
        let effects = page.take();
        let value_at = effects
            .iter()
            .position(|e| *e == Effect::Value(vec!["red".to_string()]))
            .unwrap();
        let closed_at = effects
            .iter()
            .position(|e| *e == Effect::Open(false))
            .unwrap();
        assert!(value_at < closed_at);
        assert_eq!(d.label().text(), "red");
    }

    #[test]
    fn multiple_select_stays_open() {
        let mut page = Page::new();
        let mut d = dropdown(multiple(), &mut page);
        assert!(!d.close_on_select());
        d.set_open(true, &mut page).unwrap();
        d.on_item_click(&10, &mut page).unwrap();
        d.on_item_click(&12, &mut page).unwrap();
        assert!(d.is_open());
        assert_eq!(d.value(), "red, blue");
        assert_eq!(d.label().text(), "red, blue");
    }

    #[test]
    fn explicit_close_on_select_overrides_mode() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default().with_close_on_select(false), &mut page);
        d.set_open(true, &mut page).unwrap();
        d.on_item_click(&11, &mut page).unwrap();
        assert!(d.is_open());

        let mut d = dropdown(multiple().with_close_on_select(true), &mut page);
        d.set_open(true, &mut page).unwrap();
        d.on_item_click(&11, &mut page).unwrap();
        assert!(!d.is_open());
    }

    #[test]
    fn clicks_outside_close() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        d.set_open(true, &mut page).unwrap();
        d.on_outside_interaction(&100, &mut page).unwrap();
        assert!(d.is_open());
        d.on_outside_interaction(&99, &mut page).unwrap();
        assert!(!d.is_open());
    }

    #[test]
    fn outside_listeners_are_paired() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        for _ in 0..3 {
            d.set_open(true, &mut page).unwrap();
            d.set_open(true, &mut page).unwrap();
            d.on_outside_interaction(&99, &mut page).unwrap();
            d.set_open(false, &mut page).unwrap();
        }
        assert_eq!(page.count(&Effect::Attach), 3);
        assert_eq!(page.count(&Effect::Detach), 3);
    }

    #[test]
    fn overlapping_no_scroll_dropdowns_keep_page_locked() {
        let mut page = Page::new();
        let config = DropdownConfig::default().with_open_behavior(OpenBehavior::NoScroll);
        let mut a = dropdown(config.clone(), &mut page);
        let mut b = Dropdown::new(1, config);

        a.set_open(true, &mut page).unwrap();
        b.set_open(true, &mut page).unwrap();
        assert_eq!(page.count(&Effect::PageScroll(false)), 1);

        a.set_open(false, &mut page).unwrap();
        assert!(page.lock.is_locked());
        assert_eq!(page.count(&Effect::PageScroll(true)), 0);

        b.set_open(false, &mut page).unwrap();
        assert!(!page.lock.is_locked());
        assert_eq!(page.count(&Effect::PageScroll(true)), 1);
    }

    #[test]
    fn scroll_claim_is_released_after_behavior_change() {
        let mut page = Page::new();
        let config = DropdownConfig::default().with_open_behavior(OpenBehavior::NoScroll);
        let mut d = dropdown(config, &mut page);
        d.set_open(true, &mut page).unwrap();
        d.set_open_behavior(OpenBehavior::Static);
        d.set_open(false, &mut page).unwrap();
        assert_eq!(page.lock.holders(), 0);
    }

    #[test]
    fn dynamic_tracks_viewport_scroll_while_open() {
        let mut page = Page::new();
        let config = DropdownConfig::default().with_open_behavior(OpenBehavior::Dynamic);
        let mut d = dropdown(config, &mut page);

        d.on_viewport_scroll(&mut page).unwrap();
        assert!(page.take().is_empty());

        d.set_open(true, &mut page).unwrap();
        assert_eq!(
            &page.take()[..3],
            &[Effect::Attach, Effect::Placed(YAxis::Bottom), Effect::Subscribe]
        );

        page.element = Rect::new(0.0, 500.0, 200.0, 540.0);
        d.on_viewport_scroll(&mut page).unwrap();
        assert_eq!(page.take(), vec![Effect::Placed(YAxis::Top)]);
        assert_eq!(d.placement().map(|p| p.bottom), Some(Inset::Percent(100.0)));

        d.set_open(false, &mut page).unwrap();
        assert!(page.take().contains(&Effect::Unsubscribe));
        d.on_viewport_scroll(&mut page).unwrap();
        assert!(page.take().is_empty());
    }

    #[test]
    fn fixed_position_uses_viewport_coordinates() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default().with_fixed_position(true), &mut page);
        let p = d.compute_placement(&mut page).unwrap();
        assert_eq!(p.top, Inset::Px(140.0));
        assert_eq!(p.left, Inset::Px(0.0));
        assert_eq!(p.right, Inset::Px(600.0));
    }

    #[test]
    fn measurement_failure_is_reported_after_state_change() {
        let mut page = Page::new();
        page.fail_measure = true;
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        let err = d.set_open(true, &mut page).unwrap_err();
        assert!(matches!(err, DropdownError::Measure { .. }));
        let source = core::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "layout is not ready");

        assert!(d.is_open());
        assert!(d.selection().is_open());
        assert!(page.take().contains(&Effect::Open(true)));
    }

    #[test]
    fn closed_keyboard_requires_focus() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        let out = d.on_keydown(KeyPress::new("Enter"), false, &mut page).unwrap();
        assert_eq!(out, KeyOutcome::IGNORED);
        assert!(!d.is_open());

        let out = d.on_keydown(KeyPress::new(" "), true, &mut page).unwrap();
        assert!(out.default_prevented);
        assert!(d.is_open());
    }

    #[test]
    fn closed_navigation_selects_without_opening() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        let out = d.on_keydown(KeyPress::new("ArrowDown"), true, &mut page).unwrap();
        assert!(out.default_prevented);
        assert_eq!(d.value(), "red");
        d.on_keydown(KeyPress::new("ArrowDown"), true, &mut page).unwrap();
        d.on_keydown(KeyPress::new("ArrowDown"), true, &mut page).unwrap();
        let out = d.on_keydown(KeyPress::new("ArrowDown"), true, &mut page).unwrap();
        assert!(out.default_prevented);
        assert_eq!(out.change, None);
        assert_eq!(d.value(), "blue");
        d.on_keydown(KeyPress::new("ArrowUp"), true, &mut page).unwrap();
        assert_eq!(d.value(), "green");
        assert!(!d.is_open());

        let out = d.on_keydown(KeyPress::new("x"), true, &mut page).unwrap();
        assert_eq!(out, KeyOutcome::IGNORED);
    }

    #[test]
    fn open_keyboard_forwards_and_escape_closes() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        d.set_open(true, &mut page).unwrap();

        let out = d.on_keydown(KeyPress::new("ArrowDown"), false, &mut page).unwrap();
        assert!(out.default_prevented);
        assert_eq!(d.selection().active_item().map(|i| i.handle()), Some(10));

        let out = d.on_keydown(KeyPress::new("Escape"), false, &mut page).unwrap();
        assert!(out.default_prevented);
        assert!(!d.is_open());
        assert!(d.selection().active_item().is_none());
    }

    #[test]
    fn enter_on_active_item_selects_and_closes() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        d.set_open(true, &mut page).unwrap();
        assert!(d.on_item_pointer_over(&11, &mut page));
        let out = d.on_keydown(KeyPress::new("Enter"), true, &mut page).unwrap();
        assert_eq!(out.change.map(|c| c.values), Some(vec!["green".to_string()]));
        assert!(!d.is_open());
    }

    #[test]
    fn preselected_content_publishes_value() {
        let mut page = Page::new();
        let mut d = Dropdown::new(1, multiple());
        d.on_content_change(
            vec![
                ItemEntry::new(10, "red").selected(),
                ItemEntry::new(11, "green").selected(),
            ],
            &mut page,
        )
        .unwrap();
        assert_eq!(d.value(), "red, green");
        assert!(!d.is_empty());
        assert_eq!(
            page.take(),
            vec![
                Effect::Label("red, green".to_string()),
                Effect::Value(vec!["red".to_string(), "green".to_string()]),
            ]
        );
    }

    #[test]
    fn content_change_that_drops_the_selection_clears_value() {
        let mut page = Page::new();
        let mut d = dropdown(multiple(), &mut page);
        d.change_selection(SelectionOp::Add, &11, &mut page).unwrap();
        assert_eq!(d.value(), "green");
        page.take();

        d.on_content_change(vec![ItemEntry::new(20, "cyan")], &mut page).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.value(), "");
        assert_eq!(d.label().text(), DEFAULT_PLACEHOLDER);
        assert_eq!(page.take(), vec![Effect::Label(String::new()), Effect::Value(vec![])]);
    }

    #[test]
    fn leaving_multiple_publishes_trimmed_value() {
        let mut page = Page::new();
        let mut d = dropdown(multiple(), &mut page);
        d.change_selection(SelectionOp::Add, &10, &mut page).unwrap();
        d.change_selection(SelectionOp::Add, &11, &mut page).unwrap();
        d.set_multiple(false, &mut page).unwrap();
        assert_eq!(d.value(), "green");
        assert!(d.close_on_select());
    }

    #[test]
    fn unknown_item_change_is_a_no_op() {
        let mut page = Page::new();
        let mut d = dropdown(DropdownConfig::default(), &mut page);
        assert_eq!(d.change_selection(SelectionOp::Add, &42, &mut page).unwrap(), None);
        d.set_open(true, &mut page).unwrap();
        page.take();
        d.on_item_click(&99, &mut page).unwrap();
        assert!(page.take().is_empty());
        assert!(!d.on_item_pointer_over(&99, &mut page));
    }
}
