// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index navigation over a dense list, without wraparound.

/// Direction of list navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices (for example, `ArrowDown` or Tab).
    Next,
    /// Towards lower indices (for example, `ArrowUp` or Shift+Tab).
    Prev,
}

/// The neighbor of `index` in `direction`, or `None` at the edge.
pub(crate) fn neighbor(index: usize, len: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Next => index.checked_add(1).filter(|&i| i < len),
        Direction::Prev => index.checked_sub(1).filter(|&i| i < len),
    }
}

/// The item a direction enters from when nothing is current: first for `Next`, last for `Prev`.
pub(crate) fn boundary(len: usize, direction: Direction) -> Option<usize> {
    match direction {
        _ if len == 0 => None,
        Direction::Next => Some(0),
        Direction::Prev => Some(len - 1),
    }
}
