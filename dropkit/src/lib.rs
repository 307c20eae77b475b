// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropkit: headless dropdown/select controls.
//!
//! A [`Dropdown`] ties together:
//! - an **open state**, driven by trigger signals ([`dropkit_trigger`]), keyboard input,
//!   clicks outside the control, and selection changes;
//! - a **selection engine** ([`dropkit_selection`]) over the dropdown's items, opened and
//!   closed together with the dropdown;
//! - **placement** of the items container ([`Placement`]) computed from the control's distance
//!   to the viewport edges, and an [`OpenBehavior`] deciding whether page scrolling is locked
//!   or placement follows viewport scrolls while open.
//!
//! The crate never draws and never listens to anything itself. The rendering layer implements
//! [`DropdownHost`] and forwards events to the matching `on_*` method.
//!
//! ## Minimal example
//!
//! ```rust
//! use dropkit::{
//!     BoxError, Boundaries, Dropdown, DropdownConfig, DropdownHost, PageScrollLock, YAxis,
//! };
//! use dropkit::selection::{ItemEntry, ItemHost, KeyPress};
//! use dropkit::trigger::{ParentLookup, TriggerEvent, TriggerKind};
//! use kurbo::Rect;
//!
//! // Node 1 is the control; 10 and 11 are its items.
//! struct Page {
//!     lock: PageScrollLock,
//!     opened: Vec<bool>,
//! }
//!
//! impl ItemHost<u32> for Page {}
//!
//! impl ParentLookup<u32> for Page {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node >= 10).then_some(1)
//!     }
//! }
//!
//! impl DropdownHost<u32> for Page {
//!     fn measure(&mut self) -> Result<Boundaries, BoxError> {
//!         let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//!         Ok(Boundaries::new(viewport, Rect::new(10.0, 500.0, 210.0, 530.0)))
//!     }
//!     fn page_scroll_lock(&mut self) -> &mut PageScrollLock {
//!         &mut self.lock
//!     }
//!     fn open_changed(&mut self, change: dropkit::OpenChange) {
//!         self.opened.push(change.is_opened);
//!     }
//! }
//!
//! let mut page = Page { lock: PageScrollLock::new(), opened: Vec::new() };
//! let mut dropdown = Dropdown::new(1, DropdownConfig::default());
//! dropdown
//!     .on_content_change(
//!         [ItemEntry::new(10, "tea"), ItemEntry::new(11, "coffee")],
//!         &mut page,
//!     )
//!     .unwrap();
//!
//! // A label clicked: it sends a toggle signal at the control.
//! let mut signal = TriggerEvent::new(1, TriggerKind::Toggle);
//! dropdown.on_trigger(&mut signal, &mut page).unwrap();
//! assert!(dropdown.is_open());
//! // Near the bottom of the viewport, the items open upward.
//! assert_eq!(dropdown.placement().unwrap().y_axis, YAxis::Top);
//!
//! // Arrow down activates the first item, Enter selects it and closes.
//! dropdown.on_keydown(KeyPress::new("ArrowDown"), true, &mut page).unwrap();
//! dropdown.on_keydown(KeyPress::new("Enter"), true, &mut page).unwrap();
//! assert_eq!(dropdown.value(), "tea");
//! assert!(!dropdown.is_open());
//! assert_eq!(page.opened, [true, false]);
//! ```
//!
//! ## Open behavior
//!
//! - [`OpenBehavior::Static`]: placement is computed on every open and close.
//! - [`OpenBehavior::NoScroll`]: additionally claims the host's [`PageScrollLock`] while open.
//!   The lock is shared: the page only scrolls again once every claim is released.
//! - [`OpenBehavior::Dynamic`]: additionally asks the host for viewport scroll events while
//!   open and recomputes placement on each.
//!
//! ## Staged transitions
//!
//! Animated containers can sit behind a
//! [`DelayedTransition`](dropkit_transition::DelayedTransition), which delays open and close
//! signals and drops any that were superseded in the meantime.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `serde` traits for every configuration type, using kebab-case keys.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod dropdown;
mod error;
mod geometry;
mod host;
mod label;
mod scroll_lock;

pub use dropkit_selection as selection;
pub use dropkit_transition as transition;
pub use dropkit_trigger as trigger;

pub use config::{DropdownConfig, OpenBehavior};
pub use dropdown::{Dropdown, VALUE_SEPARATOR};
pub use error::{BoxError, DropdownError};
pub use geometry::{Boundaries, Inset, Placement, Position, YAxis};
pub use host::{DropdownHost, OpenChange};
pub use label::{DEFAULT_PLACEHOLDER, SelectLabel};
pub use scroll_lock::PageScrollLock;
