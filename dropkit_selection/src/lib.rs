// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropkit Selection: selection and keyboard navigation over a list of selectable items.
//!
//! This crate models a listbox as:
//! - **Items** ([`Item`]) identified by an opaque host handle and their position in the list.
//!   The list is rebuilt wholesale from the host's entries ([`ItemEntry`]) whenever the content
//!   set changes; each rebuild starts a new epoch.
//! - A **selection set** kept in selection order. With multi-select disabled it never holds
//!   more than one item.
//! - An **active item**: the single keyboard/pointer candidate that Enter, Space, or a click
//!   acts on.
//! - An **item host** ([`ItemHost`]) through which every flag change and presentation request
//!   (focus, blur, scroll into view, checkbox side) is written back to the rendering layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use dropkit_selection::{
//!     ItemEntry, KeyPress, SelectionConfig, SelectionEngine, SelectionOp,
//! };
//! use dropkit_trigger::TriggerKind;
//!
//! let mut engine = SelectionEngine::new(SelectionConfig::default());
//! engine.rebuild(
//!     [
//!         ItemEntry::new(1_u32, "apple"),
//!         ItemEntry::new(2, "pear"),
//!         ItemEntry::new(3, "plum").selected(),
//!     ],
//!     &mut (),
//! );
//! assert_eq!(engine.selected_values(), ["plum"]);
//!
//! // Single-select: adding replaces.
//! let change = engine.change_selection(SelectionOp::Add, &1, &mut ()).unwrap();
//! assert_eq!(change.values, ["apple"]);
//!
//! // Keyboard input is interpreted while open.
//! engine.on_trigger(TriggerKind::Open, &mut ());
//! engine.on_keydown(KeyPress::new("ArrowDown"), &mut ());
//! engine.on_keydown(KeyPress::new("ArrowDown"), &mut ());
//! let out = engine.on_keydown(KeyPress::new("Enter"), &mut ());
//! assert!(out.default_prevented);
//! assert_eq!(out.change.unwrap().values, ["pear"]);
//! ```
//!
//! ## Navigation
//!
//! Navigation never wraps. [`SelectionEngine::select_next_only`] and
//! [`SelectionEngine::select_prev_only`] move the selection itself (used while the owning
//! control is closed); [`SelectionEngine::switch_active`] moves the active item (used while it
//! is open). Both stop at the list edges.
//!
//! ## Declarations
//!
//! Hosts that build entries from user declarations should pass them through
//! [`ItemDecl::initialize`] first: `selected` is owned by the engine and rejected there, while
//! `default_selected` is the supported way to pre-select an entry.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod item;
pub mod keyboard;
mod navigation;

pub use config::{
    CheckboxPlacement, CheckboxSide, DEFAULT_NEXT_KEY, DEFAULT_PREV_KEY, SelectionConfig,
};
pub use engine::{ActivateOptions, SelectionEngine, SelectionOp, SwitchOptions, ValueChange};
pub use error::SetupError;
pub use item::{Item, ItemDecl, ItemEntry, ItemHost, ItemState};
pub use keyboard::{KeyOutcome, KeyPress, Modifiers};
pub use navigation::Direction;
