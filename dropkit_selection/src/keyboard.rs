// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw key input as delivered by the rendering layer.
//!
//! Keys use the platform's logical key names (`"Tab"`, `"Enter"`, `" "`, `"ArrowDown"`, …).

use crate::engine::ValueChange;

/// Logical key name of Tab.
pub const TAB: &str = "Tab";
/// Logical key name of Enter.
pub const ENTER: &str = "Enter";
/// Logical key name of the space bar.
pub const SPACE: &str = " ";
/// Logical key name of Escape.
pub const ESCAPE: &str = "Escape";

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command.
        const META  = 0b0000_1000;
    }
}

/// A key-down event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyPress<'a> {
    /// Logical key name.
    pub key: &'a str,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl<'a> KeyPress<'a> {
    /// A key press without modifiers.
    pub const fn new(key: &'a str) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key press with modifiers.
    pub const fn with_modifiers(key: &'a str, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Whether Shift was held.
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Whether this is Enter or Space.
    pub fn is_confirm(&self) -> bool {
        self.key == ENTER || self.key == SPACE
    }
}

/// What a key press did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The host must suppress the platform default for this key.
    pub default_prevented: bool,
    /// Selection changed as a result of the key.
    pub change: Option<ValueChange>,
}

impl KeyOutcome {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        default_prevented: false,
        change: None,
    };

    /// The key had an effect but no selection change.
    pub(crate) const fn prevented(default_prevented: bool) -> Self {
        Self {
            default_prevented,
            change: None,
        }
    }
}
