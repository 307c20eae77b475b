// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Page-wide scroll lock shared by every dropdown on a page.
///
/// Each open dropdown that disables page scrolling holds one claim. The page stays locked
/// until the last claim is released, so overlapping dropdowns never re-enable scrolling early.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageScrollLock {
    holders: usize,
}

impl PageScrollLock {
    /// An unlocked page.
    pub const fn new() -> Self {
        Self { holders: 0 }
    }

    /// Add a claim. Returns `true` if this claim locked the page.
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Drop a claim. Returns `true` if this release unlocked the page.
    pub fn release(&mut self) -> bool {
        match self.holders {
            0 => {
                log::warn!("page scroll lock released without a claim");
                false
            }
            n => {
                self.holders = n - 1;
                self.holders == 0
            }
        }
    }

    /// Whether page scrolling is currently disabled.
    pub const fn is_locked(&self) -> bool {
        self.holders > 0
    }

    /// Number of outstanding claims.
    pub const fn holders(&self) -> usize {
        self.holders
    }
}
