// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

/// Boxed error returned by host collaborators.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Failure of a host collaborator while driving a dropdown.
#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    /// Geometry measurement failed; placement was not updated.
    #[error("failed to measure dropdown geometry")]
    Measure {
        /// The host's error.
        #[source]
        source: BoxError,
    },
}
